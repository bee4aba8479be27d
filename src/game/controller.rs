//! Game controller - turn sequencing, AI seats and win detection
//!
//! Owns the `BoardState`. Every command is validated by the board before it
//! is written, so the controller only has to route actions and keep the record.

use crate::ai::{Action, MoveSelector};
use crate::board::state::BoardState;
use crate::core::error::{QuoridorError, Result};
use crate::core::types::{Fence, PlayerId, Position};
use crate::game::record::GameRecord;

pub struct GameController {
    board: BoardState,
    seats: [Option<Box<dyn MoveSelector>>; 2],
    record: GameRecord,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Two human seats and a fresh board
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            seats: [None, None],
            record: GameRecord::new(),
        }
    }

    /// Start over; AI seats stay but forget the previous game
    pub fn new_game(&mut self) {
        self.board = BoardState::new();
        self.record = GameRecord::new();
        for seat in self.seats.iter_mut().flatten() {
            seat.reset();
        }
        tracing::info!("New game started");
    }

    /// Put a computer player in the seat it was built for, replacing any previous one
    pub fn set_ai(&mut self, mut selector: Box<dyn MoveSelector>) {
        selector.reset();
        let seat = selector.player();
        tracing::info!("{} is now played by '{}'", seat, selector.profile().name);
        self.seats[seat.index()] = Some(selector);
    }

    pub fn clear_ai(&mut self, player: PlayerId) {
        self.seats[player.index()] = None;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn current_player(&self) -> PlayerId {
        self.board.current_player()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.board.is_game_over() && self.seats[self.current_player().index()].is_some()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.board.check_win()
    }

    /// Move `player`'s pawn; returns the winner if the move ended the game
    pub fn submit_move(&mut self, player: PlayerId, target: Position) -> Result<Option<PlayerId>> {
        self.board.apply_move(player, target)?;
        self.record.push(player, Action::Move(target));
        Ok(self.finish_if_won())
    }

    /// Place a fence for `player`, who must be the side to move
    pub fn submit_fence(&mut self, player: PlayerId, fence: Fence) -> Result<Option<PlayerId>> {
        if self.board.is_game_over() {
            return Err(QuoridorError::GameOver);
        }
        if player != self.current_player() {
            return Err(QuoridorError::OutOfTurn(player));
        }
        self.board.apply_fence(fence)?;
        self.record.push(player, Action::PlaceFence(fence));
        Ok(None)
    }

    /// Apply any action for `player`
    ///
    /// `Action::None` forfeits: the opponent is declared the winner and
    /// `NoLegalMoves` is returned. A finished game or the wrong side is
    /// rejected first and changes nothing.
    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<Option<PlayerId>> {
        match action {
            Action::Move(target) => self.submit_move(player, target),
            Action::PlaceFence(fence) => self.submit_fence(player, fence),
            Action::None => {
                self.board.forfeit(player)?;
                tracing::error!("{} has no legal action and forfeits", player);
                self.record.push(player, Action::None);
                self.record.forfeit = true;
                self.record.winner = self.board.check_win();
                Err(QuoridorError::NoLegalMoves(player))
            }
        }
    }

    /// Let the AI in the current seat move
    ///
    /// Returns `Ok(None)` when the seat is human or the game is over.
    pub fn play_ai_turn(&mut self) -> Result<Option<Action>> {
        if self.board.is_game_over() {
            return Ok(None);
        }
        let player = self.current_player();
        let Some(selector) = self.seats[player.index()].as_mut() else {
            return Ok(None);
        };
        let action = selector.decide(&self.board);
        tracing::debug!("{} ({}) chose {}", player, selector.profile().name, action);
        self.apply_action(player, action)?;
        Ok(Some(action))
    }

    /// Run AI turns until the game ends, a human seat is reached, or `max_plies` is hit
    pub fn play_out(&mut self, max_plies: usize) -> Result<Option<PlayerId>> {
        let mut plies = 0;
        while plies < max_plies && self.is_ai_turn() {
            if self.play_ai_turn()?.is_none() {
                break;
            }
            plies += 1;
        }
        Ok(self.winner())
    }

    fn finish_if_won(&mut self) -> Option<PlayerId> {
        let winner = self.board.check_win();
        if let Some(player) = winner {
            self.record.winner = Some(player);
            tracing::info!("{} wins after {} plies", player, self.record.len());
        }
        winner
    }
}
