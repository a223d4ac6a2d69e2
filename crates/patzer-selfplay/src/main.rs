//! Plays both sides of a game with the reduced-rules random mover and
//! logs every ply. Handy for eyeballing engine behavior from a shell.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use patzer_core::MoveError;
use patzer_engine::{is_checkmate_reduced, play_random_move, GameState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Random-vs-random playout for the patzer engine")]
struct Args {
    /// Seed for the move generator; drawn at random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies when no result is reached.
    #[arg(long, default_value = "300")]
    max_plies: u32,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("playing out with seed {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new();

    for ply in 1..=args.max_plies {
        let mover = state.turn();
        match play_random_move(&mut state, &mut rng) {
            Ok(played) => {
                match played.captured {
                    Some(taken) => tracing::info!(
                        "ply {}: {} plays {} to {}, taking {}",
                        ply,
                        mover,
                        played.from,
                        played.to,
                        taken
                    ),
                    None => tracing::info!(
                        "ply {}: {} plays {} to {}",
                        ply,
                        mover,
                        played.from,
                        played.to
                    ),
                }
                if let Some(kind) = played.promoted {
                    tracing::info!("ply {}: {} promotes to {}", ply, mover, kind);
                }
                if is_checkmate_reduced(&state) {
                    tracing::info!("{} wins by checkmate after {} plies", mover, ply);
                    break;
                }
            }
            Err(MoveError::NoLegalMoves) => {
                if state.in_check() {
                    tracing::info!(
                        "{} wins by checkmate after {} plies",
                        mover.opposite(),
                        ply
                    );
                } else {
                    tracing::info!("stalemate after {} plies", ply);
                }
                break;
            }
            Err(error) => {
                tracing::error!("playout stopped: {}", error);
                break;
            }
        }
    }

    println!("{}", state.board().render());
}
