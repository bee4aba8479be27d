//! Quoridor - Entry Point
//!
//! Console game: you play the pawn starting on e9 against a computer
//! opponent starting on e1.

use std::io::{self, Write};

use clap::Parser;
use quoridor::ai::{resolve_profile, AiPlayer, AiProfile};
use quoridor::board::{legal_pawn_moves, player_distance, BoardState, BOARD_SIZE};
use quoridor::core::error::Result;
use quoridor::{Fence, GameController, PlayerId, Position};

/// Play Quoridor against the computer
#[derive(Parser, Debug)]
#[command(name = "quoridor")]
struct Args {
    /// Opponent: basic, intermediate, advanced, or a profile in data/ai_profiles/
    #[arg(long, default_value = "advanced")]
    bot: String,

    /// Random seed for the opponent
    #[arg(long)]
    seed: Option<u64>,
}

const HUMAN: PlayerId = PlayerId::One;
const COMPUTER: PlayerId = PlayerId::Two;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quoridor=warn")),
        )
        .init();

    let args = Args::parse();
    let profile = resolve_profile(&args.bot).unwrap_or_else(|e| {
        eprintln!("Warning: could not load bot '{}': {}", args.bot, e);
        eprintln!("Using the advanced bot");
        AiProfile::default()
    });
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut game = GameController::new();
    game.set_ai(Box::new(AiPlayer::with_seed(profile, COMPUTER, seed)));

    println!("\n=== QUORIDOR ===");
    println!("You are pawn 1 (starting e9). Reach rank 1 before the computer reaches rank 9.");
    println!();
    println!("Commands:");
    println!("  move <sq> / m <sq>     - Move your pawn, e.g. 'move e8'");
    println!("  fence <sq><h|v> / f    - Place a fence by its top-left square, e.g. 'fence e3h'");
    println!("  moves                  - List your legal pawn moves");
    println!("  board / b              - Redraw the board");
    println!("  new                    - Start a new game");
    println!("  quit / q               - Exit");
    println!();

    print_board(game.board());

    loop {
        if let Some(winner) = game.winner() {
            if winner == HUMAN {
                println!("You win!");
            } else {
                println!("The computer wins.");
            }
            println!("Game record: {}", game.record().to_notation());
            println!("Type 'new' to play again or 'quit' to exit.");
        }

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, argument) = input.split_once(' ').unwrap_or((input, ""));
        let outcome = match command {
            "quit" | "q" => break,
            "board" | "b" => {
                print_board(game.board());
                continue;
            }
            "moves" => {
                let moves: Vec<String> = legal_pawn_moves(game.board(), HUMAN)
                    .iter()
                    .map(Position::to_string)
                    .collect();
                println!("Legal moves: {}", moves.join(" "));
                continue;
            }
            "new" => {
                game.new_game();
                print_board(game.board());
                continue;
            }
            "move" | "m" => match argument.trim().parse::<Position>() {
                Ok(target) => game.submit_move(HUMAN, target),
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
            "fence" | "f" => match argument.trim().parse::<Fence>() {
                Ok(fence) => game.submit_fence(HUMAN, fence),
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
            _ => {
                println!("Unknown command. Available: move, fence, moves, board, new, quit");
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("{}", e);
            continue;
        }

        match game.play_ai_turn() {
            Ok(Some(action)) => println!("Computer plays {}", action),
            Ok(None) => {}
            Err(e) => println!("Computer turn failed: {}", e),
        }
        print_board(game.board());
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Draw the board with rank 1 at the top, fences as '-' and '|'
fn print_board(board: &BoardState) {
    let fences = board.fences();
    println!();
    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("{} ", (b'a' + col as u8) as char);
    }
    println!();

    for row in 0..BOARD_SIZE {
        let mut line = format!("{:>2}  ", row + 1);
        for col in 0..BOARD_SIZE {
            let here = Position::new(row, col);
            line.push(match board.occupant(here) {
                Some(PlayerId::One) => '1',
                Some(PlayerId::Two) => '2',
                None => '.',
            });
            if col + 1 < BOARD_SIZE {
                line.push(if fences.blocks(here, Position::new(row, col + 1)) {
                    '|'
                } else {
                    ' '
                });
            }
        }
        println!("{}", line);

        if row + 1 < BOARD_SIZE {
            let mut gap = String::from("    ");
            for col in 0..BOARD_SIZE {
                let blocked = fences.blocks(Position::new(row, col), Position::new(row + 1, col));
                gap.push(if blocked { '-' } else { ' ' });
                gap.push(' ');
            }
            println!("{}", gap.trim_end());
        }
    }

    for id in [HUMAN, COMPUTER] {
        let player = board.player(id);
        println!(
            "{}: {} | fences left {} | distance {:.2}",
            if id == HUMAN { "You     " } else { "Computer" },
            player.position,
            player.fences_remaining,
            player_distance(board, id)
        );
    }
    println!();
}
