//! Quoridor - rules engine and computer opponent
//!
//! `board` holds the rules (move generation, fence legality, path searches),
//! `ai` the move-selection policy, and `game` the turn controller that ties
//! them together for a front-end.

pub mod ai;
pub mod board;
pub mod core;
pub mod game;

pub use ai::{ai_decide, Action, AiPlayer, AiProfile, AiState, BotVariant, MoveSelector};
pub use board::{new_game, BoardState, Player};
pub use core::error::{FenceRejection, QuoridorError, Result};
pub use core::types::{Fence, Orientation, PlayerId, Position};
pub use game::{GameController, GameRecord};
