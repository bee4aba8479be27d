//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A cell on the board, 0-indexed
///
/// Row 0 is rank "1" and column 0 is file "a". Values outside `0..9` are
/// representable so that direction arithmetic can step off the board and be
/// rejected by `in_bounds` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by a (row, col) delta
    pub fn offset(&self, delta: (i32, i32)) -> Self {
        Self::new(self.row + delta.0, self.col + delta.1)
    }

    pub fn manhattan(&self, other: &Self) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    pub fn chebyshev(&self, other: &Self) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::board::geometry::chess_notation(*self))
    }
}

/// Error returned when a square or fence string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse '{0}' as board notation")]
pub struct NotationError(pub String);

impl FromStr for Position {
    type Err = NotationError;

    /// Parses algebraic notation such as `e9`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NotationError(s.to_string());
        let mut chars = s.trim().chars();
        let file = chars.next().ok_or_else(err)?.to_ascii_lowercase();
        if !('a'..='z').contains(&file) {
            return Err(err());
        }
        let rank: u8 = chars.as_str().parse().map_err(|_| err())?;
        let pos = Position::new(i32::from(rank) - 1, file as i32 - 'a' as i32);
        if crate::board::geometry::in_bounds(pos) {
            Ok(pos)
        } else {
            Err(err())
        }
    }
}

/// Fence orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Blocks movement between row r and r+1 across columns c and c+1
    Horizontal,
    /// Blocks movement between column c and c+1 across rows r and r+1
    Vertical,
}

impl Orientation {
    pub fn letter(&self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// A two-cell fence anchored at its top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fence {
    pub row: i32,
    pub col: i32,
    pub orientation: Orientation,
}

impl Fence {
    pub const fn new(row: i32, col: i32, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    pub const fn horizontal(row: i32, col: i32) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    pub const fn vertical(row: i32, col: i32) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    pub fn anchor(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// The four cells touching this fence's post, regardless of orientation
    pub fn corner_cells(&self) -> [Position; 4] {
        [
            Position::new(self.row, self.col),
            Position::new(self.row, self.col + 1),
            Position::new(self.row + 1, self.col),
            Position::new(self.row + 1, self.col + 1),
        ]
    }
}

impl fmt::Display for Fence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.anchor(), self.orientation.letter())
    }
}

impl FromStr for Fence {
    type Err = NotationError;

    /// Parses `<square><h|v>`, e.g. `e3h`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || NotationError(s.to_string());
        let (split, suffix) = trimmed.char_indices().last().ok_or_else(err)?;
        let orientation = match suffix.to_ascii_lowercase() {
            'h' => Orientation::Horizontal,
            'v' => Orientation::Vertical,
            _ => return Err(err()),
        };
        // Anchor range is checked by fence legality, not here
        let anchor: Position = trimmed[..split].parse().map_err(|_| err())?;
        Ok(Fence::new(anchor.row, anchor.col, orientation))
    }
}

/// Seat identity; player one moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Index into `BoardState::players`
    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerId::One),
            1 => Some(PlayerId::Two),
            _ => None,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
