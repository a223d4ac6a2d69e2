//! Core types shared across the patzer workspace.
//!
//! This crate defines the vocabulary of the game with no rules logic
//! attached:
//!
//! - [`Color`]: the two sides, with rank and direction helpers
//! - [`PieceKind`] and [`Piece`]: piece identities and their encodings
//! - [`Coord`]: board squares with algebraic notation
//! - [`MoveRequest`] and [`Claim`]: a move as a player submits it
//! - [`MoveError`]: every way a move can be rejected

mod color;
mod coord;
mod error;
mod piece;
mod request;

pub use color::Color;
pub use coord::Coord;
pub use error::MoveError;
pub use piece::{Piece, PieceKind};
pub use request::{Claim, MoveRequest};
