//! The priority-ordered decision chain shared by every bot variant
//!
//! Steps, first applicable wins:
//! 1. opening book (first decisions only)
//! 2. random early move (if the profile asks for one)
//! 3. immediate win
//! 4. aggressive fence
//! 5. defensive fence
//! 6. best move along the weighted shortest path
//! 7. no action
//!
//! All evaluation happens on borrowed or copied boards; the caller applies
//! the returned action.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::opening::{choose_pattern, OpeningProgress, OPENING_BOOK};
use crate::ai::profile::AiProfile;
use crate::ai::state::AiState;
use crate::ai::Action;
use crate::board::constants::MAX_FENCE_INDEX;
use crate::board::fences::{is_legal_fence_placement, legal_fence_placements};
use crate::board::geometry::Direction;
use crate::board::movegen::legal_pawn_moves;
use crate::board::pathfinding::{player_distance, shortest_path_from, weighted_distance};
use crate::board::state::BoardState;
use crate::core::types::{Fence, PlayerId, Position};

/// Costs within this margin count as equal when comparing candidates
const DISTANCE_EPSILON: f64 = 1e-9;

/// Choose an action for `player` without touching `board`
pub fn ai_decide(
    board: &BoardState,
    state: &mut AiState,
    player: PlayerId,
    profile: &AiProfile,
) -> Action {
    let decision = state.move_count;
    state.move_count += 1;
    let legal = legal_pawn_moves(board, player);

    if profile.opening.enabled && decision <= profile.opening.last_decision {
        match opening_move(board, state, player, profile, &legal) {
            OpeningOutcome::Play(target) => {
                tracing::debug!("{} plays opening step to {}", player, target);
                return record_move(board, state, player, target);
            }
            OpeningOutcome::Abandoned => {
                return match best_move(board, state, player, &legal) {
                    Some(target) => record_move(board, state, player, target),
                    None => no_action(player),
                };
            }
            OpeningOutcome::NotApplicable => {}
        }
    }

    if decision < profile.random_moves.early_turns
        && state.rng().gen::<f64>() < profile.random_moves.probability
    {
        if let Some(&target) = legal.choose(state.rng()) {
            tracing::debug!("{} plays random early move to {}", player, target);
            return record_move(board, state, player, target);
        }
    }

    let goal_row = board.player(player).goal_row;
    if let Some(&target) = legal.iter().find(|p| p.row == goal_row) {
        tracing::debug!("{} takes the winning move to {}", player, target);
        return record_move(board, state, player, target);
    }

    if can_fence(board, player, profile) {
        if let Some(fence) = aggressive_fence(board, state, player, profile) {
            tracing::debug!("{} places aggressive fence {}", player, fence);
            return Action::PlaceFence(fence);
        }
        if let Some(fence) = defensive_fence(board, player, profile) {
            tracing::debug!("{} places defensive fence {}", player, fence);
            return Action::PlaceFence(fence);
        }
    }

    match best_move(board, state, player, &legal) {
        Some(target) => {
            tracing::debug!("{} follows best path to {}", player, target);
            record_move(board, state, player, target)
        }
        None => no_action(player),
    }
}

fn record_move(board: &BoardState, state: &mut AiState, player: PlayerId, target: Position) -> Action {
    state.previous_position = Some(board.player(player).position);
    Action::Move(target)
}

fn no_action(player: PlayerId) -> Action {
    tracing::error!("{} has no legal moves; the path invariant has been violated", player);
    Action::None
}

fn can_fence(board: &BoardState, player: PlayerId, profile: &AiProfile) -> bool {
    profile.fences.enabled && board.player(player).fences_remaining > 0
}

enum OpeningOutcome {
    Play(Position),
    Abandoned,
    NotApplicable,
}

fn opening_move(
    board: &BoardState,
    state: &mut AiState,
    player: PlayerId,
    profile: &AiProfile,
    legal: &[Position],
) -> OpeningOutcome {
    if state.opening == OpeningProgress::Undecided {
        state.opening = if state.rng().gen::<f64>() < profile.opening.probability {
            match choose_pattern(state.rng()) {
                Some(pattern) => {
                    tracing::debug!("{} opens with '{}'", player, OPENING_BOOK[pattern].name);
                    OpeningProgress::Active { pattern, step: 0 }
                }
                None => OpeningProgress::Declined,
            }
        } else {
            OpeningProgress::Declined
        };
    }

    let OpeningProgress::Active { pattern, step } = state.opening else {
        return OpeningOutcome::NotApplicable;
    };
    let Some(next) = OPENING_BOOK.get(pattern).and_then(|p| p.steps.get(step)) else {
        state.opening = OpeningProgress::Finished;
        return OpeningOutcome::NotApplicable;
    };

    let me = board.player(player);
    let target = next.target(me.position, me.goal_row);
    if legal.contains(&target) {
        state.opening = OpeningProgress::Active {
            pattern,
            step: step + 1,
        };
        OpeningOutcome::Play(target)
    } else {
        tracing::warn!(
            "{} abandons opening '{}': {} is not reachable",
            player,
            OPENING_BOOK[pattern].name,
            target
        );
        state.opening = OpeningProgress::Abandoned;
        OpeningOutcome::Abandoned
    }
}

/// Fence with the largest advantage gain, if that gain reaches the threshold
fn aggressive_fence(
    board: &BoardState,
    state: &mut AiState,
    player: PlayerId,
    profile: &AiProfile,
) -> Option<Fence> {
    let opponent = player.opponent();
    let current = player_distance(board, opponent) - player_distance(board, player);
    if !current.is_finite() {
        return None;
    }

    let mut candidates = legal_fence_placements(board);
    candidates.shuffle(state.rng());

    let mut best: Option<(Fence, f64)> = None;
    for fence in candidates {
        let hypothetical = board.with_fence(fence);
        let advantage =
            player_distance(&hypothetical, opponent) - player_distance(&hypothetical, player);
        if !advantage.is_finite() {
            continue;
        }
        let gain = advantage - current;
        if best.map_or(true, |(_, top)| gain > top) {
            best = Some((fence, gain));
        }
    }

    best.filter(|(_, gain)| *gain >= profile.fences.aggressive_threshold - DISTANCE_EPSILON)
        .map(|(fence, _)| fence)
}

/// Block a nearly-finished opponent, front first then sides
fn defensive_fence(board: &BoardState, player: PlayerId, profile: &AiProfile) -> Option<Fence> {
    let opponent = board.opponent(player);
    let current = player_distance(board, opponent.id);
    if current > profile.fences.defensive_distance_threshold
        || opponent.rows_to_goal() > profile.fences.defensive_row_threshold
    {
        return None;
    }

    let improves = |fence: &Fence| {
        is_legal_fence_placement(board, fence)
            && player_distance(&board.with_fence(*fence), opponent.id) > current
    };

    direct_blocking_candidates(opponent.position, opponent.goal_row)
        .into_iter()
        .find(|f| improves(f))
        .or_else(|| {
            side_blocking_candidates(opponent.position)
                .into_iter()
                .find(|f| improves(f))
        })
}

fn clamp_index(value: i32) -> i32 {
    value.clamp(0, MAX_FENCE_INDEX)
}

fn push_unique(list: &mut Vec<Fence>, fence: Fence) {
    if !list.contains(&fence) {
        list.push(fence);
    }
}

/// Horizontal fences on the grid line the opponent is about to cross
pub(crate) fn direct_blocking_candidates(pos: Position, goal_row: i32) -> Vec<Fence> {
    let row = match Direction::toward_row(pos.row, goal_row) {
        Direction::Up => pos.row - 1,
        _ => pos.row,
    };
    let mut list = Vec::with_capacity(2);
    for col in [pos.col - 1, pos.col] {
        push_unique(&mut list, Fence::horizontal(clamp_index(row), clamp_index(col)));
    }
    list
}

/// Vertical fences beside the opponent, its own row first then the row above
pub(crate) fn side_blocking_candidates(pos: Position) -> Vec<Fence> {
    let mut list = Vec::with_capacity(4);
    for row in [pos.row, pos.row - 1] {
        for col in [pos.col - 1, pos.col] {
            push_unique(&mut list, Fence::vertical(clamp_index(row), clamp_index(col)));
        }
    }
    list
}

/// Next square on the weighted shortest path, or the best-scoring neighbour
fn best_move(
    board: &BoardState,
    state: &AiState,
    player: PlayerId,
    legal: &[Position],
) -> Option<Position> {
    let path = shortest_path_from(board, player);
    if let Some(&next) = path.get(1) {
        if legal.contains(&next) {
            return Some(next);
        }
    }

    let goal_row = board.player(player).goal_row;
    let scored: Vec<(Position, f64)> = legal
        .iter()
        .map(|&pos| (pos, weighted_distance(board, pos, goal_row)))
        .collect();
    let min = scored.iter().map(|(_, d)| *d).fold(f64::INFINITY, f64::min);
    let tied: Vec<Position> = scored
        .iter()
        .filter(|(_, d)| *d <= min + DISTANCE_EPSILON || (min.is_infinite() && d.is_infinite()))
        .map(|(pos, _)| *pos)
        .collect();

    tied.iter()
        .find(|pos| Some(**pos) != state.previous_position)
        .or_else(|| tied.first())
        .copied()
}
