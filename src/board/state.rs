//! Board state and the two mutating commands
//!
//! `BoardState` is only changed through `apply_move` and `apply_fence`, both
//! of which validate against the current state before writing anything.

use serde::Serialize;

use crate::board::constants::{
    FENCES_PER_PLAYER, PLAYER_ONE_GOAL_ROW, PLAYER_ONE_START, PLAYER_TWO_GOAL_ROW,
    PLAYER_TWO_START,
};
use crate::board::fence_set::FenceSet;
use crate::board::fences::check_fence_placement;
use crate::board::geometry::in_bounds;
use crate::board::movegen::is_legal_pawn_move;
use crate::core::error::{QuoridorError, Result};
use crate::core::types::{Fence, PlayerId, Position};

/// One side of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Position,
    pub fences_remaining: u8,
    pub goal_row: i32,
}

impl Player {
    pub fn new(id: PlayerId, position: Position, goal_row: i32) -> Self {
        Self {
            id,
            position,
            fences_remaining: FENCES_PER_PLAYER,
            goal_row,
        }
    }

    pub fn has_won(&self) -> bool {
        self.position.row == self.goal_row
    }

    /// Rows still to cross, ignoring fences
    pub fn rows_to_goal(&self) -> i32 {
        (self.position.row - self.goal_row).abs()
    }
}

/// Complete game position
#[derive(Debug, Clone)]
pub struct BoardState {
    players: [Player; 2],
    fences: FenceSet,
    current: PlayerId,
    game_over: bool,
    winner: Option<PlayerId>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Fresh game: player one at e9 heading for row 0, player two at e1
    pub fn new() -> Self {
        Self {
            players: [
                Player::new(PlayerId::One, PLAYER_ONE_START, PLAYER_ONE_GOAL_ROW),
                Player::new(PlayerId::Two, PLAYER_TWO_START, PLAYER_TWO_GOAL_ROW),
            ],
            fences: FenceSet::new(),
            current: PlayerId::One,
            game_over: false,
            winner: None,
        }
    }

    /// Arbitrary mid-game position
    ///
    /// Fences are validated one at a time in the given order and charged
    /// alternately to player one and player two. Pawns must be on distinct
    /// in-bounds cells and not already on their goal rows.
    pub fn from_setup(positions: [Position; 2], fences: &[Fence], to_move: PlayerId) -> Result<Self> {
        let mut board = Self::new();
        for id in PlayerId::ALL {
            let pos = positions[id.index()];
            if !in_bounds(pos) || board.player(id).goal_row == pos.row {
                return Err(QuoridorError::IllegalMove {
                    player: id,
                    target: pos,
                });
            }
            board.players[id.index()].position = pos;
        }
        if positions[0] == positions[1] {
            return Err(QuoridorError::IllegalMove {
                player: PlayerId::Two,
                target: positions[1],
            });
        }

        for (i, fence) in fences.iter().enumerate() {
            let owner = if i % 2 == 0 { PlayerId::One } else { PlayerId::Two };
            if board.player(owner).fences_remaining == 0 {
                return Err(QuoridorError::NoFencesRemaining(owner));
            }
            check_fence_placement(&board, fence).map_err(|reason| {
                QuoridorError::IllegalFence {
                    fence: *fence,
                    reason,
                }
            })?;
            board.fences.insert(*fence);
            board.players[owner.index()].fences_remaining -= 1;
        }

        board.current = to_move;
        Ok(board)
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn opponent(&self, id: PlayerId) -> &Player {
        &self.players[id.opponent().index()]
    }

    pub fn fences(&self) -> &FenceSet {
        &self.fences
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Which player, if any, stands on `pos`
    pub fn occupant(&self, pos: Position) -> Option<PlayerId> {
        self.players.iter().find(|p| p.position == pos).map(|p| p.id)
    }

    /// Private copy with one extra fence, no legality check and no budget change
    pub fn with_fence(&self, fence: Fence) -> Self {
        let mut board = self.clone();
        board.fences.insert(fence);
        board
    }

    /// Move `player`'s pawn to `target`
    pub fn apply_move(&mut self, player: PlayerId, target: Position) -> Result<()> {
        if self.game_over {
            return Err(QuoridorError::GameOver);
        }
        if player != self.current {
            return Err(QuoridorError::OutOfTurn(player));
        }
        if !is_legal_pawn_move(self, player, target) {
            tracing::warn!("Rejected move for {} to {}", player, target);
            return Err(QuoridorError::IllegalMove { player, target });
        }

        let mover = &mut self.players[player.index()];
        mover.position = target;
        tracing::debug!("{} moved to {}", player, target);

        if mover.has_won() {
            self.game_over = true;
            self.winner = Some(player);
            tracing::info!("{} reached the goal row", player);
        } else {
            self.current = player.opponent();
        }
        Ok(())
    }

    /// Place `fence` for the side to move
    pub fn apply_fence(&mut self, fence: Fence) -> Result<()> {
        if self.game_over {
            return Err(QuoridorError::GameOver);
        }
        let player = self.current;
        if self.player(player).fences_remaining == 0 {
            return Err(QuoridorError::NoFencesRemaining(player));
        }
        if let Err(reason) = check_fence_placement(self, &fence) {
            tracing::warn!("Rejected fence {} for {}: {}", fence, player, reason);
            return Err(QuoridorError::IllegalFence { fence, reason });
        }

        self.fences.insert(fence);
        self.players[player.index()].fences_remaining -= 1;
        tracing::debug!(
            "{} placed fence {} ({} left)",
            player,
            fence,
            self.player(player).fences_remaining
        );
        self.current = player.opponent();
        Ok(())
    }

    /// End the game in the opponent's favour; only the side to move can forfeit
    pub(crate) fn forfeit(&mut self, loser: PlayerId) -> Result<()> {
        if self.game_over {
            return Err(QuoridorError::GameOver);
        }
        if loser != self.current {
            return Err(QuoridorError::OutOfTurn(loser));
        }
        self.game_over = true;
        self.winner = Some(loser.opponent());
        Ok(())
    }

    /// The winner, if either pawn stands on its goal row
    pub fn check_win(&self) -> Option<PlayerId> {
        self.winner
            .or_else(|| self.players.iter().find(|p| p.has_won()).map(|p| p.id))
    }
}
