//! The patzer rules engine: full-rules validation for the player's
//! side, a reduced-rules random opponent, and checkmate detection for
//! both.
//!
//! # Architecture
//!
//! - [`board`]: piece storage plus the text layout format
//! - [`state`]: the position, king cache, and turn bookkeeping
//! - [`check`]: attack probes and the check test
//! - [`validate`]: the full validator the player answers to
//! - [`opponent`]: the reduced-rules random mover
//! - [`mate`]: checkmate scans for either rulebook
//! - [`game`]: one human side against the opponent, with results
//! - [`session`]: a thread-safe handle to a running game
//!
//! # Example
//!
//! ```
//! use patzer_core::{Color, Coord, MoveRequest, Piece, PieceKind};
//! use patzer_engine::Game;
//!
//! let mut game = Game::new(Color::White);
//! let pawn = Piece::new(Color::White, PieceKind::Pawn);
//! let request = MoveRequest::new(
//!     pawn,
//!     Coord::from_algebraic("e2").unwrap(),
//!     Coord::from_algebraic("e4").unwrap(),
//! );
//!
//! let report = game.submit_move(&request).unwrap();
//! assert!(!report.in_check);
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub mod board;
pub mod check;
pub mod game;
pub mod mate;
pub mod opponent;
pub mod session;
pub mod state;
pub mod validate;

mod path;

pub use board::{Board, ParseBoardError};
pub use check::{in_check, square_attacked};
pub use game::{Game, GameResult, MoveReport, OpponentReport};
pub use mate::{is_checkmate, is_checkmate_reduced};
pub use opponent::{play_random_move, PlayedMove};
pub use session::GameSession;
pub use state::{GameState, SetupError, VettedMove};
pub use validate::validate_move;
