//! Shared move geometry: lines, path scanning, and step shapes.

use patzer_core::Coord;

use crate::board::Board;

/// The line a sliding move travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Row,
    Column,
    Diagonal,
}

/// Classifies the line from `from` to `to`, or `None` when the two
/// squares do not share a row, column, or diagonal (or are equal).
pub(crate) fn line_between(from: Coord, to: Coord) -> Option<Line> {
    let (d_row, d_col) = from.deltas(to);
    match (d_row, d_col) {
        (0, 0) => None,
        (0, _) => Some(Line::Row),
        (_, 0) => Some(Line::Column),
        _ if d_row.abs() == d_col.abs() => Some(Line::Diagonal),
        _ => None,
    }
}

/// Why a scanned path is not traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathError {
    /// A piece stands on an intermediate square.
    Blocked(Coord),
    /// The destination is occupied and no capture was asserted.
    OccupiedDestination,
}

/// Walks the squares strictly between `from` and `to` along their
/// shared line and then applies the destination rule: an occupied
/// destination is traversable only when `capture_asserted` is true.
/// The caller must have established that a line exists.
pub(crate) fn scan_path(
    board: &Board,
    from: Coord,
    to: Coord,
    capture_asserted: bool,
) -> Result<(), PathError> {
    let (d_row, d_col) = from.deltas(to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut cursor = from;
    while let Some(next) = cursor.offset(step_row, step_col) {
        if next == to {
            break;
        }
        if board.get(next).is_some() {
            return Err(PathError::Blocked(next));
        }
        cursor = next;
    }

    if board.get(to).is_some() && !capture_asserted {
        return Err(PathError::OccupiedDestination);
    }
    Ok(())
}

/// Whether `from` to `to` is a knight's jump.
pub(crate) fn knight_jump(from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.deltas(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

/// Whether `from` to `to` is a single king step.
pub(crate) fn king_step(from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.deltas(to);
    (d_row != 0 || d_col != 0) && d_row.abs() <= 1 && d_col.abs() <= 1
}
