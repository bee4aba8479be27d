//! Opening book: short scripted pawn sequences for the first decisions

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::geometry::Direction;
use crate::core::types::Position;

/// One scripted step, relative to the mover's direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningStep {
    /// Toward the goal row
    Forward,
    /// Column - 1
    Left,
    /// Column + 1
    Right,
}

impl OpeningStep {
    /// Destination of this step for a pawn at `from` heading to `goal_row`
    pub fn target(&self, from: Position, goal_row: i32) -> Position {
        let dir = match self {
            OpeningStep::Forward => Direction::toward_row(from.row, goal_row),
            OpeningStep::Left => Direction::Left,
            OpeningStep::Right => Direction::Right,
        };
        from.offset(dir.delta())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningPattern {
    pub name: &'static str,
    pub steps: &'static [OpeningStep],
    pub weight: u32,
}

use OpeningStep::{Forward, Left, Right};

pub const OPENING_BOOK: [OpeningPattern; 8] = [
    OpeningPattern { name: "advance", steps: &[Forward, Forward, Forward], weight: 2 },
    OpeningPattern { name: "sidestep-left", steps: &[Left, Forward, Forward], weight: 2 },
    OpeningPattern { name: "sidestep-right", steps: &[Right, Forward, Forward], weight: 2 },
    OpeningPattern { name: "advance-left", steps: &[Forward, Left, Forward], weight: 2 },
    OpeningPattern { name: "advance-right", steps: &[Forward, Right, Forward], weight: 2 },
    OpeningPattern { name: "zigzag", steps: &[Left, Forward, Right], weight: 2 },
    OpeningPattern { name: "lateral-left", steps: &[Left, Left, Left], weight: 1 },
    OpeningPattern { name: "lateral-right", steps: &[Right, Right, Right], weight: 1 },
];

/// Pick a pattern index in proportion to its weight
pub fn choose_pattern<R: Rng + ?Sized>(rng: &mut R) -> Option<usize> {
    let dist = WeightedIndex::new(OPENING_BOOK.iter().map(|p| p.weight)).ok()?;
    Some(dist.sample(rng))
}

/// How far the current game has got through the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpeningProgress {
    /// Book not consulted yet this game
    #[default]
    Undecided,
    /// Probability roll failed; no book this game
    Declined,
    Active { pattern: usize, step: usize },
    /// A scripted step was illegal; no book for the rest of the game
    Abandoned,
    /// All steps played
    Finished,
}

impl OpeningProgress {
    pub fn pattern(&self) -> Option<&'static OpeningPattern> {
        match self {
            OpeningProgress::Active { pattern, .. } => OPENING_BOOK.get(*pattern),
            _ => None,
        }
    }
}
