//! Computer opponent
//!
//! Architecture: Trait + Data hybrid
//! - MoveSelector trait defines the interface the game controller drives
//! - AiProfile holds TOML-loaded switches and thresholds for one policy
//! - AiState carries per-game memory and the seeded RNG

pub mod opening;
pub mod player;
pub mod policy;
pub mod profile;
pub mod state;

use serde::{Deserialize, Serialize};

use crate::board::state::BoardState;
use crate::core::types::{Fence, PlayerId, Position};

pub use opening::{OpeningPattern, OpeningProgress, OpeningStep, OPENING_BOOK};
pub use player::AiPlayer;
pub use policy::ai_decide;
pub use profile::{load_profile, resolve_profile, AiProfile, BotVariant};
pub use state::AiState;

/// What a player does on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Position),
    PlaceFence(Fence),
    /// Nothing legal was found
    None,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(pos) => write!(f, "{}", pos),
            Action::PlaceFence(fence) => write!(f, "{}", fence),
            Action::None => f.write_str("--"),
        }
    }
}

/// Trait for computer players
pub trait MoveSelector {
    /// Pick an action for the side this selector plays; never mutates `board`
    fn decide(&mut self, board: &BoardState) -> Action;

    /// Forget all per-game memory
    fn reset(&mut self);

    fn player(&self) -> PlayerId;

    fn profile(&self) -> &AiProfile;
}
