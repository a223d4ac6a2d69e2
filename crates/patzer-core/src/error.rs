//! Errors reported when a move is rejected.

use thiserror::Error;

use crate::coord::Coord;
use crate::piece::{Piece, PieceKind};

/// Why a submitted move was rejected or could not be played.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square does not hold the piece named in the request.
    #[error("no {piece} on {at} to move")]
    PieceMismatch { piece: Piece, at: Coord },

    /// The request moves a piece of the side not to move.
    #[error("not this side's turn")]
    OutOfTurn,

    /// The piece cannot travel from origin to destination at all.
    #[error("a {kind} cannot move from {from} to {to}")]
    InvalidShape {
        kind: PieceKind,
        from: Coord,
        to: Coord,
    },

    /// A piece stands on the path between origin and destination.
    #[error("path blocked at {0}")]
    BlockedPath(Coord),

    /// A destination assertion disagrees with the board.
    #[error("directive mismatch: {0}")]
    DirectiveMismatch(String),

    /// The move would leave the mover's own king attacked.
    #[error("move would leave own king in check")]
    SelfCheck,

    /// The side to move has no legal move available.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// The game has already ended.
    #[error("game is over")]
    GameOver,
}
