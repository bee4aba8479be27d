//! Fence placement legality
//!
//! Checks run in a fixed order and the first failure is reported. Nothing
//! here mutates the board; the path check runs against a copied fence set.

use crate::board::constants::MAX_FENCE_INDEX;
use crate::board::fence_set::FenceSet;
use crate::board::pathfinding::has_path_to_goal;
use crate::board::state::BoardState;
use crate::core::error::FenceRejection;
use crate::core::types::{Fence, Orientation, PlayerId};

/// Validate `fence` against `board`, returning the first failed check
pub fn check_fence_placement(board: &BoardState, fence: &Fence) -> Result<(), FenceRejection> {
    if !anchor_in_bounds(fence) {
        return Err(FenceRejection::OutOfBounds);
    }
    if board.fences().contains(fence) {
        return Err(FenceRejection::Duplicate);
    }
    if board.fences().iter().any(|placed| shares_post(placed, fence)) {
        return Err(FenceRejection::PostOverlap);
    }
    if board.fences().iter().any(|placed| spans_overlap(placed, fence)) {
        return Err(FenceRejection::SpanOverlap);
    }
    // Perpendicular fences can only meet at a post, which is covered above

    let hypothetical = board.fences().with(*fence);
    for id in PlayerId::ALL {
        if !has_path_to_goal(board, id, &hypothetical) {
            return Err(FenceRejection::BlocksPath(id));
        }
    }
    Ok(())
}

pub fn is_legal_fence_placement(board: &BoardState, fence: &Fence) -> bool {
    check_fence_placement(board, fence).is_ok()
}

/// Every legal placement, ordered by row, column, then horizontal before vertical
pub fn legal_fence_placements(board: &BoardState) -> Vec<Fence> {
    all_fence_slots()
        .filter(|fence| is_legal_fence_placement(board, fence))
        .collect()
}

/// All 128 anchor/orientation combinations
pub fn all_fence_slots() -> impl Iterator<Item = Fence> {
    (0..=MAX_FENCE_INDEX).flat_map(|row| {
        (0..=MAX_FENCE_INDEX).flat_map(move |col| {
            [
                Fence::new(row, col, Orientation::Horizontal),
                Fence::new(row, col, Orientation::Vertical),
            ]
        })
    })
}

fn anchor_in_bounds(fence: &Fence) -> bool {
    (0..=MAX_FENCE_INDEX).contains(&fence.row) && (0..=MAX_FENCE_INDEX).contains(&fence.col)
}

/// Both orientations are centred on the post at (2r+1, 2c+1) in doubled coordinates
fn shares_post(a: &Fence, b: &Fence) -> bool {
    a.row == b.row && a.col == b.col
}

/// Same-orientation fences on the same line whose two-cell spans touch a common cell
fn spans_overlap(a: &Fence, b: &Fence) -> bool {
    if a.orientation != b.orientation {
        return false;
    }
    match a.orientation {
        Orientation::Horizontal => a.row == b.row && !(a.col + 1 < b.col || b.col + 1 < a.col),
        Orientation::Vertical => a.col == b.col && !(a.row + 1 < b.row || b.row + 1 < a.row),
    }
}

/// True if no two fences in the set are duplicates or share a post or span
pub fn fences_compatible(fences: &FenceSet) -> bool {
    let all: Vec<&Fence> = fences.iter().collect();
    all.iter().enumerate().all(|(i, a)| {
        all[i + 1..]
            .iter()
            .all(|b| a != b && !shares_post(a, b) && !spans_overlap(a, b))
    })
}
