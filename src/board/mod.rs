//! Board model and rules engine
//!
//! Geometry and state at the bottom, then pawn move generation, fence
//! legality, and the path searches both the rules and the AI depend on.

pub mod constants;
pub mod fence_set;
pub mod fences;
pub mod geometry;
pub mod movegen;
pub mod pathfinding;
pub mod state;

// Re-exports for convenient access
pub use constants::*;
pub use fence_set::FenceSet;
pub use fences::{
    all_fence_slots, check_fence_placement, fences_compatible, is_legal_fence_placement,
    legal_fence_placements,
};
pub use geometry::{chess_notation, fence_blocks, in_bounds, Direction};
pub use movegen::{is_legal_pawn_move, legal_pawn_moves};
pub use pathfinding::{
    fence_proximity_penalty, has_path_to_goal, opponent_adjacency_penalty, player_distance,
    shortest_path_from, weighted_distance,
};
pub use state::{BoardState, Player};

/// Fresh initial position
pub fn new_game() -> BoardState {
    BoardState::new()
}
