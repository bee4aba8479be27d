//! Rules engine integration tests

use quoridor::board::*;
use quoridor::{BoardState, Fence, FenceRejection, PlayerId, Position, QuoridorError};

fn setup(one: Position, two: Position, fences: &[Fence], to_move: PlayerId) -> BoardState {
    BoardState::from_setup([one, two], fences, to_move).unwrap()
}

#[test]
fn test_fresh_game_matches_initial_layout() {
    let board = new_game();
    assert_eq!(board.player(PlayerId::One).position, Position::new(8, 4));
    assert_eq!(board.player(PlayerId::Two).position, Position::new(0, 4));
    assert_eq!(board.current_player(), PlayerId::One);
    assert_eq!(legal_fence_placements(&board).len(), 128);
    assert_eq!(
        legal_pawn_moves(&board, PlayerId::One),
        vec![Position::new(7, 4), Position::new(8, 3), Position::new(8, 5)]
    );
}

#[test]
fn test_fence_at_last_column_is_out_of_bounds() {
    let mut board = new_game();
    assert!(!is_legal_fence_placement(&board, &Fence::horizontal(4, 8)));
    assert!(is_legal_fence_placement(&board, &Fence::horizontal(4, 7)));
    for i in 0..=MAX_FENCE_INDEX {
        assert!(!is_legal_fence_placement(&board, &Fence::horizontal(i, 8)));
        assert!(!is_legal_fence_placement(&board, &Fence::horizontal(8, i)));
        assert!(!is_legal_fence_placement(&board, &Fence::vertical(i, 8)));
        assert!(!is_legal_fence_placement(&board, &Fence::vertical(8, i)));
    }

    let err = board.apply_fence(Fence::horizontal(4, 8)).unwrap_err();
    assert!(matches!(
        err,
        QuoridorError::IllegalFence {
            reason: FenceRejection::OutOfBounds,
            ..
        }
    ));
    assert_eq!(board.player(PlayerId::One).fences_remaining, 10);
    assert!(board.fences().is_empty());
    assert_eq!(board.current_player(), PlayerId::One);
}

#[test]
fn test_wall_across_row_six_cannot_be_closed() {
    let mut board = new_game();
    for col in [0, 2, 4, 6] {
        board.apply_fence(Fence::horizontal(6, col)).unwrap();
    }
    // Last gap is column 8; wall it off at the side, then try the lid
    board.apply_fence(Fence::vertical(5, 7)).unwrap();
    assert_eq!(board.fences().len(), 5);
    assert_eq!(board.player(PlayerId::One).fences_remaining, 7);
    assert_eq!(board.player(PlayerId::Two).fences_remaining, 8);
    assert_eq!(board.current_player(), PlayerId::Two);

    let lid = Fence::horizontal(4, 7);
    assert_eq!(
        check_fence_placement(&board, &lid),
        Err(FenceRejection::BlocksPath(PlayerId::One))
    );
    assert!(board.apply_fence(lid).is_err());
    assert_eq!(board.fences().len(), 5);
    assert!(has_path_to_goal(&board, PlayerId::One, board.fences()));
    assert!(has_path_to_goal(&board, PlayerId::Two, board.fences()));

    // The row-six wall itself can't grow into the gap either
    assert_eq!(
        check_fence_placement(&board, &Fence::horizontal(6, 7)),
        Err(FenceRejection::SpanOverlap)
    );
}

#[test]
fn test_straight_jump_then_diagonal_when_walled() {
    let board = setup(Position::new(4, 4), Position::new(3, 4), &[], PlayerId::One);
    let moves = legal_pawn_moves(&board, PlayerId::One);
    assert!(moves.contains(&Position::new(2, 4)));
    assert!(!moves.contains(&Position::new(3, 4)));

    let walled = setup(
        Position::new(4, 4),
        Position::new(3, 4),
        &[Fence::horizontal(2, 4)],
        PlayerId::One,
    );
    let moves = legal_pawn_moves(&walled, PlayerId::One);
    assert!(!moves.contains(&Position::new(2, 4)));
    assert!(moves.contains(&Position::new(3, 3)));
    assert!(moves.contains(&Position::new(3, 5)));
    assert!(is_legal_pawn_move(&walled, PlayerId::One, Position::new(3, 5)));
}

#[test]
fn test_illegal_move_leaves_board_unchanged() {
    let mut board = new_game();
    let err = board.apply_move(PlayerId::One, Position::new(6, 4)).unwrap_err();
    assert!(matches!(err, QuoridorError::IllegalMove { player: PlayerId::One, .. }));
    assert_eq!(board.player(PlayerId::One).position, Position::new(8, 4));
    assert_eq!(board.current_player(), PlayerId::One);
}

#[test]
fn test_reaching_goal_row_wins() {
    let mut board = setup(Position::new(1, 4), Position::new(6, 0), &[], PlayerId::One);
    assert_eq!(board.check_win(), None);
    board.apply_move(PlayerId::One, Position::new(0, 4)).unwrap();
    assert_eq!(board.check_win(), Some(PlayerId::One));
    assert!(board.is_game_over());
    assert!(matches!(
        board.apply_move(PlayerId::Two, Position::new(7, 0)),
        Err(QuoridorError::GameOver)
    ));
}

#[test]
fn test_weighted_distance_on_empty_board() {
    let board = setup(Position::new(8, 4), Position::new(0, 0), &[], PlayerId::One);
    let d = weighted_distance(&board, Position::new(8, 4), 0);
    assert!((d - 8.0).abs() < 1e-9);

    let path = shortest_path_from(&board, PlayerId::One);
    assert_eq!(path.len(), 9);
    assert_eq!(path[0], Position::new(8, 4));
    assert_eq!(path[8].row, 0);
}

#[test]
fn test_weighted_distance_grows_near_fences() {
    let board = setup(
        Position::new(8, 4),
        Position::new(0, 0),
        &[Fence::vertical(4, 0)],
        PlayerId::One,
    );
    let d = player_distance(&board, PlayerId::One);
    assert!(d > 8.0);
    assert!(d < 9.0);
}

#[test]
fn test_sealed_player_is_unreachable() {
    // Weighted distance on a board that bypasses legality
    let board = new_game()
        .with_fence(Fence::horizontal(6, 0))
        .with_fence(Fence::horizontal(6, 2))
        .with_fence(Fence::horizontal(6, 4))
        .with_fence(Fence::horizontal(6, 6))
        .with_fence(Fence::vertical(5, 7))
        .with_fence(Fence::horizontal(4, 7));
    assert!(player_distance(&board, PlayerId::One).is_infinite());
    assert!(shortest_path_from(&board, PlayerId::One).is_empty());
}

#[test]
fn test_notation() {
    assert_eq!(chess_notation(Position::new(0, 0)), "a1");
    assert_eq!(chess_notation(Position::new(8, 4)), "e9");
    assert_eq!("e9".parse::<Position>().unwrap(), Position::new(8, 4));
    assert_eq!(Fence::horizontal(2, 4).to_string(), "e3h");
    assert_eq!("e3h".parse::<Fence>().unwrap(), Fence::horizontal(2, 4));
    assert!("z9".parse::<Position>().is_err());
}

mod invariants {
    use super::*;
    use proptest::prelude::*;

    /// Play a random sequence where each choice is either a fence slot or a move index
    fn play(choices: &[(bool, usize)]) -> Vec<BoardState> {
        let slots: Vec<Fence> = all_fence_slots().collect();
        let mut board = new_game();
        let mut history = vec![board.clone()];
        for &(fence, pick) in choices {
            if board.is_game_over() {
                break;
            }
            let player = board.current_player();
            let placed = fence
                && board.player(player).fences_remaining > 0
                && board.apply_fence(slots[pick % slots.len()]).is_ok();
            if !placed {
                let moves = legal_pawn_moves(&board, player);
                board.apply_move(player, moves[pick % moves.len()]).unwrap();
            }
            history.push(board.clone());
        }
        history
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_side_to_move_always_has_a_move(
            choices in prop::collection::vec((any::<bool>(), 0usize..512), 0..80)
        ) {
            for board in play(&choices) {
                prop_assert_ne!(
                    board.player(PlayerId::One).position,
                    board.player(PlayerId::Two).position
                );
                if board.is_game_over() {
                    continue;
                }
                for id in PlayerId::ALL {
                    prop_assert!(!legal_pawn_moves(&board, id).is_empty());
                }
            }
        }

        #[test]
        fn prop_placed_fences_keep_both_paths(
            choices in prop::collection::vec((any::<bool>(), 0usize..512), 0..80)
        ) {
            for board in play(&choices) {
                for id in PlayerId::ALL {
                    prop_assert!(has_path_to_goal(&board, id, board.fences()));
                }
                prop_assert!(fences_compatible(board.fences()));
                let spent: usize = PlayerId::ALL
                    .iter()
                    .map(|id| (FENCES_PER_PLAYER - board.player(*id).fences_remaining) as usize)
                    .sum();
                prop_assert_eq!(spent, board.fences().len());
            }
        }

        #[test]
        fn prop_legal_placements_agree_with_check(
            choices in prop::collection::vec((any::<bool>(), 0usize..512), 0..30)
        ) {
            let history = play(&choices);
            let board = &history[history.len() - 1];
            let legal = legal_fence_placements(board);
            for fence in all_fence_slots() {
                prop_assert_eq!(
                    legal.contains(&fence),
                    check_fence_placement(board, &fence).is_ok()
                );
            }
        }
    }
}
