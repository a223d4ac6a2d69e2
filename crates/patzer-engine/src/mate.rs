//! Checkmate detection for both rulebooks.
//!
//! A side is checkmated when it stands in check and no move under its
//! own rulebook escapes. The human side answers to the full validator,
//! so its scan synthesizes fully-asserted requests; the opponent side
//! answers to the reduced rulebook and reuses its candidate
//! generation. Both scans probe scratch copies only and never disturb
//! the live position.

use patzer_core::{Claim, Coord, MoveRequest, Piece, PieceKind};

use crate::check;
use crate::opponent;
use crate::state::GameState;
use crate::validate;

/// Whether the side to move is checkmated under the full rulebook.
pub fn is_checkmate(state: &GameState) -> bool {
    let mover = state.turn();
    // Recomputed from the board rather than read from the cached flag.
    if !check::in_check(state, mover) {
        return false;
    }
    for (from, piece) in state.board().pieces() {
        if piece.color != mover {
            continue;
        }
        for to in Coord::all() {
            let request = escape_request(state, piece, from, to);
            if validate::validate_move(state, &request).is_ok() {
                tracing::trace!("{} escapes check with {}", mover, request);
                return false;
            }
        }
    }
    tracing::debug!("{} is checkmated", mover);
    true
}

/// Whether the side to move is checkmated under the reduced rulebook.
pub fn is_checkmate_reduced(state: &GameState) -> bool {
    if !check::in_check(state, state.turn()) {
        return false;
    }
    let mated = opponent::candidate_moves(state).is_empty();
    if mated {
        tracing::debug!("{} is checkmated", state.turn());
    }
    mated
}

/// Builds the request the full validator would accept for this square
/// pair, asserting a capture when the destination holds an enemy and a
/// queen promotion when a pawn reaches its far rank. The placed kind
/// cannot affect whether the mover's king stays attacked, so probing
/// the queen alone covers every promotion choice.
fn escape_request(state: &GameState, piece: Piece, from: Coord, to: Coord) -> MoveRequest {
    let claim = state
        .board()
        .get(to)
        .filter(|occupant| occupant.color != piece.color)
        .map(Claim::Capture);
    let promotion = (piece.kind == PieceKind::Pawn && to.row() == piece.color.far_rank())
        .then_some(Piece::new(piece.color, PieceKind::Queen));
    MoveRequest {
        piece,
        from,
        to,
        claim,
        promotion,
    }
}
