//! AI player - a profile plus its per-game state, bound to one seat

use crate::ai::policy::ai_decide;
use crate::ai::profile::AiProfile;
use crate::ai::state::AiState;
use crate::ai::{Action, MoveSelector};
use crate::board::state::BoardState;
use crate::core::types::PlayerId;

pub struct AiPlayer {
    profile: AiProfile,
    state: AiState,
    player: PlayerId,
}

impl AiPlayer {
    /// Create a new AI player with default seed
    pub fn new(profile: AiProfile, player: PlayerId) -> Self {
        Self {
            profile,
            state: AiState::default(),
            player,
        }
    }

    /// Create with specific RNG seed for deterministic behavior
    pub fn with_seed(profile: AiProfile, player: PlayerId, seed: u64) -> Self {
        Self {
            profile,
            state: AiState::new(seed),
            player,
        }
    }

    pub fn state(&self) -> &AiState {
        &self.state
    }
}

impl MoveSelector for AiPlayer {
    fn decide(&mut self, board: &BoardState) -> Action {
        ai_decide(board, &mut self.state, self.player, &self.profile)
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn profile(&self) -> &AiProfile {
        &self.profile
    }
}
