//! Computer opponent integration tests

use quoridor::ai::{resolve_profile, OpeningProgress};
use quoridor::board::{is_legal_fence_placement, legal_pawn_moves};
use quoridor::{
    ai_decide, Action, AiPlayer, AiProfile, AiState, BotVariant, BoardState, Fence,
    GameController, PlayerId, Position, QuoridorError,
};

fn bot_game(one: AiProfile, two: AiProfile, seed: u64) -> GameController {
    let mut game = GameController::new();
    game.set_ai(Box::new(AiPlayer::with_seed(one, PlayerId::One, seed)));
    game.set_ai(Box::new(AiPlayer::with_seed(two, PlayerId::Two, seed + 1)));
    game
}

#[test]
fn test_same_seeds_replay_the_same_game() {
    let mut first = bot_game(AiProfile::default(), BotVariant::Intermediate.profile(), 21);
    let mut second = bot_game(AiProfile::default(), BotVariant::Intermediate.profile(), 21);
    first.play_out(300).unwrap();
    second.play_out(300).unwrap();
    assert!(!first.record().is_empty());
    assert_eq!(first.record(), second.record());
}

#[test]
fn test_new_game_replays_from_the_same_seed() {
    let mut game = bot_game(AiProfile::default(), AiProfile::default(), 8);
    game.play_out(300).unwrap();
    let earlier = game.record().clone();

    game.new_game();
    game.play_out(300).unwrap();
    assert_eq!(game.record(), &earlier);
}

#[test]
fn test_every_bot_action_is_accepted() {
    for (one, two) in [
        (BotVariant::Advanced, BotVariant::Intermediate),
        (BotVariant::Intermediate, BotVariant::Basic),
        (BotVariant::Basic, BotVariant::Advanced),
    ] {
        let mut game = bot_game(one.profile(), two.profile(), 3);
        // Any illegal action would surface as an error here
        game.play_out(400).unwrap();
        assert!(!game.record().forfeit);
        assert!(game.record().len() <= 400);
        for id in PlayerId::ALL {
            assert!(game.record().fences_placed_by(id) <= 10);
        }
    }
}

#[test]
fn test_decide_leaves_board_untouched() {
    let board = BoardState::from_setup(
        [Position::new(5, 4), Position::new(2, 4)],
        &[Fence::horizontal(3, 3), Fence::vertical(5, 5)],
        PlayerId::One,
    )
    .unwrap();
    let snapshot = board.clone();
    let mut state = AiState::new(17);
    state.move_count = 4;

    let action = ai_decide(&board, &mut state, PlayerId::One, &AiProfile::default());
    assert_eq!(board.players(), snapshot.players());
    assert_eq!(board.fences().len(), snapshot.fences().len());
    assert_eq!(board.current_player(), snapshot.current_player());

    match action {
        Action::Move(target) => assert!(legal_pawn_moves(&board, PlayerId::One).contains(&target)),
        Action::PlaceFence(fence) => assert!(is_legal_fence_placement(&board, &fence)),
        Action::None => panic!("a legal action exists"),
    }
}

#[test]
fn test_intermediate_never_consults_the_book() {
    let board = BoardState::new();
    let profile = BotVariant::Intermediate.profile();
    let mut state = AiState::new(2);
    for _ in 0..2 {
        ai_decide(&board, &mut state, PlayerId::One, &profile);
    }
    assert_eq!(state.opening, OpeningProgress::Undecided);
    assert_eq!(state.move_count, 2);
}

#[test]
fn test_advanced_settles_the_book_on_first_decision() {
    let board = BoardState::new();
    let mut state = AiState::new(2);
    ai_decide(&board, &mut state, PlayerId::One, &AiProfile::default());
    assert_ne!(state.opening, OpeningProgress::Undecided);
}

#[test]
fn test_profiles_resolve_by_name() {
    assert_eq!(resolve_profile("bot1").unwrap(), BotVariant::Intermediate.profile());
    assert_eq!(resolve_profile("Advanced").unwrap(), BotVariant::Advanced.profile());

    let aggressive = resolve_profile("aggressive").unwrap();
    assert_eq!(aggressive.name, "aggressive");
    assert!(!aggressive.opening.enabled);
    assert_eq!(aggressive.fences.aggressive_threshold, 2.0);

    let missing = resolve_profile("no_such_profile").unwrap_err();
    assert!(matches!(missing, QuoridorError::IoError(_)));
}

mod determinism {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_seed_fixes_the_decision(seed in any::<u64>(), decisions in 1usize..4) {
            let board = BoardState::from_setup(
                [Position::new(6, 4), Position::new(2, 4)],
                &[Fence::horizontal(4, 3)],
                PlayerId::One,
            )
            .unwrap();
            let profile = BotVariant::Intermediate.profile();
            let mut a = AiState::new(seed);
            let mut b = AiState::new(seed);
            for _ in 0..decisions {
                prop_assert_eq!(
                    ai_decide(&board, &mut a, PlayerId::One, &profile),
                    ai_decide(&board, &mut b, PlayerId::One, &profile)
                );
            }
        }
    }
}
