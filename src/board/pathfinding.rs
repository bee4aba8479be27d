//! Path searches over the board graph
//!
//! Two distinct searches live here:
//! - `has_path_to_goal`: plain BFS over wall topology, pawns ignored. This is
//!   the only search fence legality may use.
//! - `weighted_distance` / `shortest_path_from`: Dijkstra over jump-aware pawn
//!   moves with fence- and opponent-proximity penalties, for the AI.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;

use crate::board::constants::{BASE_STEP_COST, FENCE_PROXIMITY_PENALTY, OPPONENT_ADJACENCY_PENALTY};
use crate::board::fence_set::FenceSet;
use crate::board::geometry::{in_bounds, Direction};
use crate::board::movegen::pawn_moves_from;
use crate::board::state::BoardState;
use crate::core::types::{PlayerId, Position};

/// True if `player` can reach its goal row through `fences`, ignoring pawns
///
/// `fences` may include hypothetical fences that are not on `board`.
pub fn has_path_to_goal(board: &BoardState, player: PlayerId, fences: &FenceSet) -> bool {
    let me = board.player(player);
    let mut visited = AHashSet::new();
    let mut frontier = VecDeque::new();
    visited.insert(me.position);
    frontier.push_back(me.position);

    while let Some(pos) = frontier.pop_front() {
        if pos.row == me.goal_row {
            return true;
        }
        for dir in Direction::ALL {
            let next = pos.offset(dir.delta());
            if in_bounds(next) && !fences.blocks(pos, next) && visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }
    false
}

/// Extra cost for stepping onto `pos` near a placed fence
pub fn fence_proximity_penalty(pos: Position, fences: &FenceSet) -> f64 {
    match fences.nearest_corner_distance(pos) {
        Some(d) if (d as usize) < FENCE_PROXIMITY_PENALTY.len() => FENCE_PROXIMITY_PENALTY[d as usize],
        _ => 0.0,
    }
}

/// Extra cost for stepping onto a cell touching the opponent (8-neighbourhood)
pub fn opponent_adjacency_penalty(pos: Position, opponent: Option<Position>) -> f64 {
    match opponent {
        Some(opp) if pos.chebyshev(&opp) == 1 => OPPONENT_ADJACENCY_PENALTY,
        _ => 0.0,
    }
}

/// Node in the Dijkstra open set
#[derive(Debug, Clone, Copy)]
struct PathNode {
    pos: Position,
    cost: OrderedFloat<f64>,
    /// Discovery order, for a stable tie-break
    seq: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap, earlier discovery first on ties
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct SearchOutcome {
    goal: Option<(Position, f64)>,
    came_from: AHashMap<Position, Position>,
}

/// The pawn that is not heading for `goal_row`; goal rows are distinct per player
fn other_pawn(board: &BoardState, goal_row: i32) -> Option<Position> {
    board
        .players()
        .iter()
        .find(|p| p.goal_row != goal_row)
        .map(|p| p.position)
}

fn dijkstra(board: &BoardState, start: Position, goal_row: i32) -> SearchOutcome {
    let fences = board.fences();
    let opponent = other_pawn(board, goal_row);

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<Position, Position> = AHashMap::new();
    let mut costs: AHashMap<Position, f64> = AHashMap::new();
    let mut seq = 0u64;

    costs.insert(start, 0.0);
    open_set.push(PathNode {
        pos: start,
        cost: OrderedFloat(0.0),
        seq,
    });

    while let Some(current) = open_set.pop() {
        let current_cost = current.cost.into_inner();
        if current_cost > *costs.get(&current.pos).unwrap_or(&f64::INFINITY) {
            continue; // stale entry
        }
        if current.pos.row == goal_row {
            return SearchOutcome {
                goal: Some((current.pos, current_cost)),
                came_from,
            };
        }

        for next in pawn_moves_from(fences, current.pos, opponent) {
            let step = BASE_STEP_COST
                + fence_proximity_penalty(next, fences)
                + opponent_adjacency_penalty(next, opponent);
            let tentative = current_cost + step;
            if tentative < *costs.get(&next).unwrap_or(&f64::INFINITY) {
                costs.insert(next, tentative);
                came_from.insert(next, current.pos);
                seq += 1;
                open_set.push(PathNode {
                    pos: next,
                    cost: OrderedFloat(tentative),
                    seq,
                });
            }
        }
    }

    SearchOutcome {
        goal: None,
        came_from,
    }
}

/// Heuristic cost from `start` to any cell on `goal_row`
///
/// The mover is whichever pawn heads for `goal_row`; the other pawn blocks
/// squares and enables jumps. Returns `f64::INFINITY` when unreachable.
pub fn weighted_distance(board: &BoardState, start: Position, goal_row: i32) -> f64 {
    dijkstra(board, start, goal_row)
        .goal
        .map_or(f64::INFINITY, |(_, cost)| cost)
}

/// Weighted distance for a player from its current square
pub fn player_distance(board: &BoardState, player: PlayerId) -> f64 {
    let me = board.player(player);
    weighted_distance(board, me.position, me.goal_row)
}

/// Cheapest route for `player`, start square first
///
/// Empty when the goal row is unreachable.
pub fn shortest_path_from(board: &BoardState, player: PlayerId) -> Vec<Position> {
    let me = board.player(player);
    let outcome = dijkstra(board, me.position, me.goal_row);
    match outcome.goal {
        Some((goal, _)) => reconstruct_path(&outcome.came_from, goal),
        None => Vec::new(),
    }
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &AHashMap<Position, Position>, mut current: Position) -> Vec<Position> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
