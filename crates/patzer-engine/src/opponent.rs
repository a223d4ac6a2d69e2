//! The reduced-rules random opponent.
//!
//! The opponent plays by a deliberately smaller rulebook than the full
//! validator: it asserts nothing about destinations, its pawns may
//! capture straight ahead, and its promotions are drawn uniformly from
//! the promotable kinds. It still refuses to leave its own king in
//! check. All legal candidates are collected and one is chosen
//! uniformly at random.

use rand::seq::IndexedRandom;
use rand::Rng;

use patzer_core::{Coord, MoveError, Piece, PieceKind};

use crate::board::Board;
use crate::path::{self, Line};
use crate::state::{GameState, VettedMove};
use crate::validate;

/// A reduced-rules candidate move for the side to move.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    from: Coord,
    to: Coord,
    piece: Piece,
}

/// What the opponent actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub from: Coord,
    pub to: Coord,
    /// The kind a promoting pawn became, if the move promoted.
    pub promoted: Option<PieceKind>,
    pub captured: Option<Piece>,
}

/// Collects every reduced-rules candidate for the side to move.
pub(crate) fn candidate_moves(state: &GameState) -> Vec<Candidate> {
    let mover = state.turn();
    let mut candidates = Vec::new();
    for (from, piece) in state.board().pieces() {
        if piece.color != mover {
            continue;
        }
        for to in Coord::all() {
            if reduced_legal(state, piece, from, to) {
                candidates.push(Candidate { from, to, piece });
            }
        }
    }
    candidates
}

/// Picks one reduced-rules candidate uniformly at random and plays it.
/// Fails with [`MoveError::NoLegalMoves`] when no candidate exists.
pub fn play_random_move<R: Rng + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<PlayedMove, MoveError> {
    let candidates = candidate_moves(state);
    tracing::debug!(
        "{} reduced-rule candidates for {}",
        candidates.len(),
        state.turn()
    );

    let chosen = match candidates.choose(rng) {
        Some(&candidate) => candidate,
        None => {
            tracing::debug!("{} has no legal moves", state.turn());
            return Err(MoveError::NoLegalMoves);
        }
    };

    let placed = promotion_placement(&chosen, rng);
    let captured = state.execute(&VettedMove {
        from: chosen.from,
        to: chosen.to,
        placed,
    });
    Ok(PlayedMove {
        from: chosen.from,
        to: chosen.to,
        promoted: (placed.kind != chosen.piece.kind).then_some(placed.kind),
        captured,
    })
}

/// A pawn landing on its far rank becomes a uniformly drawn promotable
/// piece; every other move places the piece that moved.
fn promotion_placement<R: Rng + ?Sized>(candidate: &Candidate, rng: &mut R) -> Piece {
    if candidate.piece.kind == PieceKind::Pawn
        && candidate.to.row() == candidate.piece.color.far_rank()
    {
        let kind = PieceKind::PROMOTABLE
            .choose(rng)
            .copied()
            .unwrap_or(PieceKind::Queen);
        return Piece::new(candidate.piece.color, kind);
    }
    candidate.piece
}

/// The reduced rulebook: own-color destinations are off limits, the
/// move must fit the piece's shape with a clear path, and the mover's
/// king must not be left attacked. No destination assertions exist
/// here, so any capturable occupant is fair game.
fn reduced_legal(state: &GameState, piece: Piece, from: Coord, to: Coord) -> bool {
    // Also rules out from == to, which holds the mover itself.
    if state
        .board()
        .get(to)
        .is_some_and(|occupant| occupant.color == piece.color)
    {
        return false;
    }

    let shape_ok = match piece.kind {
        PieceKind::Pawn => reduced_pawn(state.board(), piece, from, to),
        PieceKind::Knight => path::knight_jump(from, to),
        PieceKind::Bishop => slider_clear(state.board(), from, to, &[Line::Diagonal]),
        PieceKind::Rook => slider_clear(state.board(), from, to, &[Line::Row, Line::Column]),
        PieceKind::Queen => slider_clear(
            state.board(),
            from,
            to,
            &[Line::Row, Line::Column, Line::Diagonal],
        ),
        PieceKind::King => path::king_step(from, to),
    };
    if !shape_ok {
        return false;
    }

    validate::guard_self_check(
        state,
        &VettedMove {
            from,
            to,
            placed: piece,
        },
    )
    .is_ok()
}

fn slider_clear(board: &Board, from: Coord, to: Coord, allowed: &[Line]) -> bool {
    match path::line_between(from, to) {
        Some(line) if allowed.contains(&line) => {}
        _ => return false,
    }
    path::scan_path(board, from, to, true).is_ok()
}

/// Pawn shapes under the reduced rulebook. The forward arms apply the
/// uniform destination rule like every other piece, so a reduced pawn
/// may capture straight ahead; only the diagonal insists on an enemy
/// occupant.
fn reduced_pawn(board: &Board, piece: Piece, from: Coord, to: Coord) -> bool {
    let direction = piece.color.pawn_direction();
    let (d_row, d_col) = from.deltas(to);

    if d_col == 0 && d_row == direction {
        return true;
    }
    if d_col == 0 && d_row == 2 * direction && from.row() == piece.color.pawn_rank() {
        return path::scan_path(board, from, to, true).is_ok();
    }
    if d_col.abs() == 1 && d_row == direction {
        return board
            .get(to)
            .is_some_and(|occupant| occupant.color != piece.color);
    }
    false
}
