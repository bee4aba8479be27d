//! Grid geometry: bounds, notation and fence/step intersection
//!
//! Pure functions only. A step is a move between two orthogonally adjacent
//! cells; fences are two cells long and sit on the grid lines between cells.

use serde::{Deserialize, Serialize};

use crate::board::constants::BOARD_SIZE;
use crate::core::types::{Fence, Orientation, Position};

/// The four orthogonal step directions, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta; `Up` decreases the row
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The two directions at right angles to this one
    pub fn perpendicular(&self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        }
    }

    /// Direction of travel from `from` toward `goal_row`
    pub fn toward_row(from_row: i32, goal_row: i32) -> Direction {
        if goal_row < from_row {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[inline]
pub fn in_bounds(pos: Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.row) && (0..BOARD_SIZE).contains(&pos.col)
}

/// Column letter followed by the 1-based row, e.g. (8,4) -> "e9"
pub fn chess_notation(pos: Position) -> String {
    let file = (b'a' as i32 + pos.col) as u8 as char;
    format!("{}{}", file, pos.row + 1)
}

/// True if the single orthogonal step `from -> to` crosses `fence`
///
/// Anything that is not a single orthogonal step is never blocked.
pub fn fence_blocks(fence: &Fence, from: Position, to: Position) -> bool {
    let dr = to.row - from.row;
    let dc = to.col - from.col;

    match (dr.abs(), dc.abs()) {
        // Crossing the line between two rows
        (1, 0) => {
            let upper = from.row.min(to.row);
            fence.orientation == Orientation::Horizontal
                && fence.row == upper
                && (from.col == fence.col || from.col == fence.col + 1)
        }
        // Crossing the line between two columns
        (0, 1) => {
            let left = from.col.min(to.col);
            fence.orientation == Orientation::Vertical
                && fence.col == left
                && (from.row == fence.row || from.row == fence.row + 1)
        }
        _ => false,
    }
}
