//! Board constants - all tunable values in one place

use crate::core::types::Position;

// Geometry
pub const BOARD_SIZE: i32 = 9;
/// Fence anchors range over `0..=MAX_FENCE_INDEX` on both axes
pub const MAX_FENCE_INDEX: i32 = BOARD_SIZE - 2;

// Fence budget
pub const FENCES_PER_PLAYER: u8 = 10;
pub const MAX_TOTAL_FENCES: usize = 2 * FENCES_PER_PLAYER as usize;

// Starting layout (player one moves first and heads for row 0)
pub const PLAYER_ONE_START: Position = Position::new(8, 4);
pub const PLAYER_TWO_START: Position = Position::new(0, 4);
pub const PLAYER_ONE_GOAL_ROW: i32 = 0;
pub const PLAYER_TWO_GOAL_ROW: i32 = BOARD_SIZE - 1;

// Weighted distance - every edge costs 1.0 plus these ADDITIVE penalties
pub const BASE_STEP_COST: f64 = 1.0;
/// Indexed by Manhattan distance to the nearest fence corner cell
pub const FENCE_PROXIMITY_PENALTY: [f64; 4] = [0.10, 0.05, 0.03, 0.01];
pub const OPPONENT_ADJACENCY_PENALTY: f64 = 0.10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_are_on_opposite_goal_rows() {
        assert_eq!(PLAYER_ONE_START.row, PLAYER_TWO_GOAL_ROW);
        assert_eq!(PLAYER_TWO_START.row, PLAYER_ONE_GOAL_ROW);
    }

    #[test]
    fn test_proximity_penalty_decreasing() {
        for pair in FENCE_PROXIMITY_PENALTY.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(FENCE_PROXIMITY_PENALTY[0] < BASE_STEP_COST);
    }
}
