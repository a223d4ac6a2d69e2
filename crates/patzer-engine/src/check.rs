//! Attack detection and the check test.

use patzer_core::{Color, Coord, Piece, PieceKind};

use crate::board::Board;
use crate::state::GameState;

/// The eight ray directions, straight lines first.
const RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Whether any piece of color `by` attacks `target` on this board.
pub fn square_attacked(board: &Board, target: Coord, by: Color) -> bool {
    // An attacking pawn stands one row behind the target along its own
    // direction of travel, one column to either side.
    let pawn_row = -by.pawn_direction();
    for d_col in [-1, 1] {
        if let Some(from) = target.offset(pawn_row, d_col) {
            if board.get(from) == Some(Piece::new(by, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KNIGHT_JUMPS {
        if let Some(from) = target.offset(d_row, d_col) {
            if board.get(from) == Some(Piece::new(by, PieceKind::Knight)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in RAYS {
        if let Some(from) = target.offset(d_row, d_col) {
            if board.get(from) == Some(Piece::new(by, PieceKind::King)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in RAYS {
        let diagonal = d_row != 0 && d_col != 0;
        let mut cursor = target;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if let Some(piece) = board.get(next) {
                if piece.color == by {
                    let reaches = match piece.kind {
                        PieceKind::Queen => true,
                        PieceKind::Rook => !diagonal,
                        PieceKind::Bishop => diagonal,
                        _ => false,
                    };
                    if reaches {
                        return true;
                    }
                }
                break;
            }
            cursor = next;
        }
    }

    false
}

/// Whether `color`'s king is attacked in this position.
pub fn in_check(state: &GameState, color: Color) -> bool {
    square_attacked(state.board(), state.king(color), color.opposite())
}
