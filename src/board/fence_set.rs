//! Placed fences with constant-time step blocking
//!
//! Keeps the fences themselves (for overlap checks and proximity penalties)
//! alongside a set of blocked cell-to-cell edges for the search code.

use ahash::AHashSet;

use crate::core::types::{Fence, Orientation, Position};

/// Undirected edge between two orthogonally adjacent cells, smaller cell first
type Edge = (Position, Position);

fn edge(a: Position, b: Position) -> Edge {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The two edges a fence cuts
fn cut_edges(fence: &Fence) -> [Edge; 2] {
    let (r, c) = (fence.row, fence.col);
    match fence.orientation {
        Orientation::Horizontal => [
            edge(Position::new(r, c), Position::new(r + 1, c)),
            edge(Position::new(r, c + 1), Position::new(r + 1, c + 1)),
        ],
        Orientation::Vertical => [
            edge(Position::new(r, c), Position::new(r, c + 1)),
            edge(Position::new(r + 1, c), Position::new(r + 1, c + 1)),
        ],
    }
}

/// Collection of fences, real or hypothetical
#[derive(Debug, Clone, Default)]
pub struct FenceSet {
    fences: Vec<Fence>,
    blocked: AHashSet<Edge>,
}

impl FenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fence> {
        self.fences.iter()
    }

    pub fn contains(&self, fence: &Fence) -> bool {
        self.fences.contains(fence)
    }

    /// Add a fence without any legality check
    pub(crate) fn insert(&mut self, fence: Fence) {
        if self.contains(&fence) {
            return;
        }
        self.blocked.extend(cut_edges(&fence));
        self.fences.push(fence);
    }

    /// Copy of this set plus one more fence
    pub fn with(&self, fence: Fence) -> Self {
        let mut set = self.clone();
        set.insert(fence);
        set
    }

    /// True if any fence cuts the step between `from` and `to`
    #[inline]
    pub fn blocks(&self, from: Position, to: Position) -> bool {
        self.blocked.contains(&edge(from, to))
    }

    /// Manhattan distance from `pos` to the closest corner cell of any fence
    pub fn nearest_corner_distance(&self, pos: Position) -> Option<i32> {
        self.fences
            .iter()
            .flat_map(|f| f.corner_cells())
            .map(|cell| cell.manhattan(&pos))
            .min()
    }
}

impl FromIterator<Fence> for FenceSet {
    fn from_iter<I: IntoIterator<Item = Fence>>(iter: I) -> Self {
        let mut set = FenceSet::new();
        for fence in iter {
            set.insert(fence);
        }
        set
    }
}
