//! Pawn move generation with straight and diagonal jumps

use crate::board::fence_set::FenceSet;
use crate::board::geometry::{in_bounds, Direction};
use crate::board::state::BoardState;
use crate::core::types::{PlayerId, Position};

/// Legal destinations for `player` on `board`, sorted and deduplicated
pub fn legal_pawn_moves(board: &BoardState, player: PlayerId) -> Vec<Position> {
    let from = board.player(player).position;
    let blocker = board.opponent(player).position;
    pawn_moves_from(board.fences(), from, Some(blocker))
}

pub fn is_legal_pawn_move(board: &BoardState, player: PlayerId, target: Position) -> bool {
    legal_pawn_moves(board, player).contains(&target)
}

/// Destinations from `from` given the fences and the other pawn's square
///
/// Shared by move generation and the weighted search, where `from` is a
/// synthetic frontier square rather than the pawn's real position.
pub(crate) fn pawn_moves_from(
    fences: &FenceSet,
    from: Position,
    blocker: Option<Position>,
) -> Vec<Position> {
    let occupied = |pos: Position| Some(pos) == blocker;
    let open = |a: Position, b: Position| in_bounds(b) && !fences.blocks(a, b);

    let mut moves = Vec::with_capacity(5);
    for dir in Direction::ALL {
        let adjacent = from.offset(dir.delta());
        if !open(from, adjacent) {
            continue;
        }
        if !occupied(adjacent) {
            moves.push(adjacent);
            continue;
        }

        // Opponent in the way: straight jump, or diagonal if that is walled off
        let beyond = adjacent.offset(dir.delta());
        if open(adjacent, beyond) && !occupied(beyond) {
            moves.push(beyond);
            continue;
        }
        for side in dir.perpendicular() {
            let diagonal = adjacent.offset(side.delta());
            if open(adjacent, diagonal) && !occupied(diagonal) {
                moves.push(diagonal);
            }
        }
    }

    moves.sort();
    moves.dedup();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Fence;

    fn board_with(one: Position, two: Position, fences: &[Fence]) -> BoardState {
        BoardState::from_setup([one, two], fences, PlayerId::One).unwrap()
    }

    #[test]
    fn test_opening_moves() {
        let board = BoardState::new();
        let moves = legal_pawn_moves(&board, PlayerId::One);
        assert_eq!(
            moves,
            vec![Position::new(7, 4), Position::new(8, 3), Position::new(8, 5)]
        );
    }

    #[test]
    fn test_fence_removes_step() {
        let board = board_with(Position::new(8, 4), Position::new(0, 4), &[Fence::horizontal(7, 4)]);
        let moves = legal_pawn_moves(&board, PlayerId::One);
        assert!(!moves.contains(&Position::new(7, 4)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_straight_jump() {
        let board = board_with(Position::new(4, 4), Position::new(3, 4), &[]);
        let moves = legal_pawn_moves(&board, PlayerId::One);
        assert!(moves.contains(&Position::new(2, 4)));
        assert!(!moves.contains(&Position::new(3, 4)));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_diagonal_jump_when_fence_behind_opponent() {
        let board = board_with(Position::new(4, 4), Position::new(3, 4), &[Fence::horizontal(2, 4)]);
        let moves = legal_pawn_moves(&board, PlayerId::One);
        assert!(!moves.contains(&Position::new(2, 4)));
        assert!(moves.contains(&Position::new(3, 3)));
        assert!(moves.contains(&Position::new(3, 5)));
    }

    #[test]
    fn test_diagonal_jump_at_board_edge() {
        // Jumping up over a pawn on row 0 would leave the board
        let board = board_with(Position::new(1, 0), Position::new(0, 0), &[]);
        let moves = legal_pawn_moves(&board, PlayerId::One);
        assert_eq!(
            moves,
            vec![Position::new(0, 1), Position::new(1, 1), Position::new(2, 0)]
        );

        // The same pair seen from player two is an ordinary straight jump
        let moves = legal_pawn_moves(&board, PlayerId::Two);
        assert!(moves.contains(&Position::new(2, 0)));
        assert!(moves.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_diagonal_blocked_by_side_fence() {
        let fences = [Fence::horizontal(2, 4), Fence::vertical(3, 4)];
        let board = board_with(Position::new(4, 4), Position::new(3, 4), &fences);
        let moves = legal_pawn_moves(&board, PlayerId::One);
        assert!(moves.contains(&Position::new(3, 3)));
        assert!(!moves.contains(&Position::new(3, 5)));
    }

    #[test]
    fn test_is_legal_pawn_move() {
        let board = BoardState::new();
        assert!(is_legal_pawn_move(&board, PlayerId::One, Position::new(7, 4)));
        assert!(!is_legal_pawn_move(&board, PlayerId::One, Position::new(7, 3)));
    }
}
