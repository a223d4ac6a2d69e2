//! Move requests as submitted by a player.
//!
//! A request states which piece moves, from where, to where, and what
//! the player asserts about the destination. The assertions mirror the
//! directive tokens of the wire protocol: a capture claim names the
//! exact piece expected on the destination square, and a promotion
//! names the piece a pawn becomes on reaching the far rank. The rules
//! engine checks every assertion against the board and rejects the
//! move when they disagree.

use std::fmt;

use crate::coord::Coord;
use crate::piece::Piece;

/// What the player asserts about the destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Claim {
    /// The destination holds exactly this enemy piece, to be captured.
    Capture(Piece),
    /// The move is asserted not to capture. The validator rejects the
    /// token outright; it exists so a frontend can still carry it.
    Quiet,
}

/// A move as requested, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// The piece the player claims to be moving.
    pub piece: Piece,
    /// Origin square.
    pub from: Coord,
    /// Destination square.
    pub to: Coord,
    /// Destination assertion, if any.
    pub claim: Option<Claim>,
    /// Promotion target for a pawn reaching the far rank.
    pub promotion: Option<Piece>,
}

impl MoveRequest {
    /// A plain move with no destination assertion and no promotion.
    pub const fn new(piece: Piece, from: Coord, to: Coord) -> Self {
        MoveRequest {
            piece,
            from,
            to,
            claim: None,
            promotion: None,
        }
    }

    /// A move declaring the capture of `target` on the destination.
    pub const fn capture(piece: Piece, from: Coord, to: Coord, target: Piece) -> Self {
        MoveRequest {
            piece,
            from,
            to,
            claim: Some(Claim::Capture(target)),
            promotion: None,
        }
    }

    /// Adds a promotion target to this request.
    pub fn promoting(self, target: Piece) -> Self {
        MoveRequest {
            promotion: Some(target),
            ..self
        }
    }

    /// Adds a quiet-destination assertion to this request.
    pub fn quiet(self) -> Self {
        MoveRequest {
            claim: Some(Claim::Quiet),
            ..self
        }
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.piece.label(), self.from, self.to)
    }
}
