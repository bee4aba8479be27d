//! Headless Self-Play Runner
//!
//! Plays bot vs bot games and prints one JSON result per game, for
//! comparing profiles and tuning thresholds.

use clap::Parser;
use quoridor::ai::{resolve_profile, AiPlayer, AiProfile};
use quoridor::{GameController, GameRecord, PlayerId, QuoridorError};
use serde::Serialize;

/// Headless Self-Play Runner - bot vs bot games
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play bot vs bot Quoridor games and output results as JSON")]
struct Args {
    /// Bot for Player One: basic, intermediate, advanced, or a profile in data/ai_profiles/
    #[arg(long, default_value = "advanced")]
    bot1: String,

    /// Bot for Player Two
    #[arg(long, default_value = "advanced")]
    bot2: String,

    /// Random seed for the first game; later games use seed + game index
    #[arg(long)]
    seed: Option<u64>,

    /// Plies before a game is abandoned as a draw
    #[arg(long, default_value_t = 400)]
    max_plies: usize,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Include the full move record in the output
    #[arg(long)]
    record: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct GameResult {
    game: u32,
    seed: u64,
    outcome: String,
    winner: Option<PlayerId>,
    plies: usize,
    fences_used: [usize; 2],
    forfeit: bool,
    bot1: String,
    bot2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<GameRecord>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quoridor=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let bot1 = load_or_default(&args.bot1);
    let bot2 = load_or_default(&args.bot2);

    let mut wins = [0u32; 2];
    let mut draws = 0u32;

    for game in 0..args.games {
        let game_seed = seed.wrapping_add(game as u64);
        let result = play_game(&args, game, game_seed, &bot1, &bot2);
        match result.winner {
            Some(player) => wins[player.index()] += 1,
            None => draws += 1,
        }
        print_result(&args.format, &result);
    }

    if args.games > 1 {
        eprintln!(
            "{} games: {} {} wins, {} {} wins, {} draws",
            args.games, bot1.name, wins[0], bot2.name, wins[1], draws
        );
    }
}

fn load_or_default(name: &str) -> AiProfile {
    resolve_profile(name).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load bot '{}': {}", name, e);
        eprintln!("Using the advanced bot");
        AiProfile::default()
    })
}

fn play_game(args: &Args, game: u32, seed: u64, bot1: &AiProfile, bot2: &AiProfile) -> GameResult {
    let mut controller = GameController::new();
    controller.set_ai(Box::new(AiPlayer::with_seed(bot1.clone(), PlayerId::One, seed)));
    controller.set_ai(Box::new(AiPlayer::with_seed(
        bot2.clone(),
        PlayerId::Two,
        seed.wrapping_add(1),
    )));

    let winner = match controller.play_out(args.max_plies) {
        Ok(winner) => winner,
        Err(QuoridorError::NoLegalMoves(player)) => {
            tracing::warn!("Game {}: {} had nothing to play", game, player);
            controller.winner()
        }
        Err(e) => {
            tracing::error!("Game {} aborted: {}", game, e);
            controller.winner()
        }
    };

    let record = controller.record();
    let outcome = match winner {
        Some(PlayerId::One) => "PlayerOneWins",
        Some(PlayerId::Two) => "PlayerTwoWins",
        None => "Draw",
    };

    GameResult {
        game,
        seed,
        outcome: outcome.to_string(),
        winner,
        plies: record.len(),
        fences_used: [
            record.fences_placed_by(PlayerId::One),
            record.fences_placed_by(PlayerId::Two),
        ],
        forfeit: record.forfeit,
        bot1: bot1.name.clone(),
        bot2: bot2.name.clone(),
        record: args.record.then(|| record.clone()),
    }
}

fn print_result(format: &str, result: &GameResult) {
    match format {
        "text" => {
            println!("Game {} (seed {})", result.game, result.seed);
            println!("=============");
            println!("Outcome: {}", result.outcome);
            println!("Plies: {}", result.plies);
            println!(
                "Fences used: {} / {}",
                result.fences_used[0], result.fences_used[1]
            );
            println!("Bots: {} vs {}", result.bot1, result.bot2);
            if let Some(record) = &result.record {
                println!("Record: {}", record.to_notation());
            }
            println!();
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            match serde_json::to_string(result) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to serialize result: {}", e),
            }
        }
    }
}
