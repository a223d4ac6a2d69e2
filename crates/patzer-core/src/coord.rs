//! Board coordinates.

use std::fmt;

/// A square on the 8×8 board, packed as `row * 8 + col`.
///
/// Row 0 is White's back rank and column 0 the queenside edge. In
/// algebraic notation column 0 is file 'a' and row 0 is rank '1', so
/// "e2" is row 1, column 4.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    // Back-rank squares, named for setup code and tests.
    pub const A1: Coord = Coord(0);
    pub const B1: Coord = Coord(1);
    pub const C1: Coord = Coord(2);
    pub const D1: Coord = Coord(3);
    pub const E1: Coord = Coord(4);
    pub const F1: Coord = Coord(5);
    pub const G1: Coord = Coord(6);
    pub const H1: Coord = Coord(7);
    pub const A8: Coord = Coord(56);
    pub const B8: Coord = Coord(57);
    pub const C8: Coord = Coord(58);
    pub const D8: Coord = Coord(59);
    pub const E8: Coord = Coord(60);
    pub const F8: Coord = Coord(61);
    pub const G8: Coord = Coord(62);
    pub const H8: Coord = Coord(63);

    /// Creates a coordinate from row and column, both 0 through 7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Coord(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a coordinate from a packed index (0 through 63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Coord(index))
        } else {
            None
        }
    }

    /// Parses algebraic notation, e.g. "e2".
    pub const fn from_algebraic(square: &str) -> Option<Self> {
        let bytes = square.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return None,
        };
        let row = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return None,
        };
        Coord::new(row, col)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Returns the packed index (0 through 63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0 through 7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 through 7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Offsets this square by signed row and column deltas; `None` when
    /// the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i16 + d_row as i16;
        let col = self.col() as i16 + d_col as i16;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Coord((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Returns the (row, column) deltas from this square to `to`.
    #[inline]
    pub const fn deltas(self, to: Coord) -> (i8, i8) {
        (
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// Iterates all 64 squares in row-major order, row 0 first.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..64).map(Coord)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'1' + self.row()) as char
        )
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_checks_bounds() {
        assert_eq!(Coord::new(0, 0), Some(Coord::A1));
        assert_eq!(Coord::new(7, 7), Some(Coord::H8));
        assert_eq!(Coord::new(8, 0), None);
        assert_eq!(Coord::new(0, 8), None);
    }

    #[test]
    fn from_index_checks_bounds() {
        assert_eq!(Coord::from_index(0), Some(Coord::A1));
        assert_eq!(Coord::from_index(63), Some(Coord::H8));
        assert_eq!(Coord::from_index(64), None);
    }

    #[test]
    fn algebraic_parsing() {
        assert_eq!(Coord::from_algebraic("a1"), Some(Coord::A1));
        assert_eq!(Coord::from_algebraic("e2"), Coord::new(1, 4));
        assert_eq!(Coord::from_algebraic("h8"), Some(Coord::H8));
        assert_eq!(Coord::from_algebraic("i1"), None);
        assert_eq!(Coord::from_algebraic("a9"), None);
        assert_eq!(Coord::from_algebraic("a"), None);
        assert_eq!(Coord::from_algebraic("a11"), None);
        assert_eq!(Coord::from_algebraic("E2"), None);
    }

    #[test]
    fn rows_and_columns() {
        let e2 = Coord::from_algebraic("e2").unwrap();
        assert_eq!(e2.row(), 1);
        assert_eq!(e2.col(), 4);
        assert_eq!(e2.index(), 12);
    }

    #[test]
    fn offsets_stay_on_board() {
        let e2 = Coord::from_algebraic("e2").unwrap();
        assert_eq!(e2.offset(1, 0), Coord::from_algebraic("e3"));
        assert_eq!(e2.offset(-1, -1), Coord::from_algebraic("d1"));
        assert_eq!(Coord::A1.offset(-1, 0), None);
        assert_eq!(Coord::H8.offset(0, 1), None);
        assert_eq!(Coord::A1.offset(i8::MAX, i8::MAX), None);
    }

    #[test]
    fn deltas_between_squares() {
        let e2 = Coord::from_algebraic("e2").unwrap();
        let c5 = Coord::from_algebraic("c5").unwrap();
        assert_eq!(e2.deltas(c5), (3, -2));
        assert_eq!(c5.deltas(e2), (-3, 2));
        assert_eq!(e2.deltas(e2), (0, 0));
    }

    #[test]
    fn all_covers_the_board_in_order() {
        let squares: Vec<Coord> = Coord::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Coord::A1);
        assert_eq!(squares[12], Coord::from_algebraic("e2").unwrap());
        assert_eq!(squares[63], Coord::H8);
    }

    #[test]
    fn display_and_debug() {
        let e4 = Coord::from_algebraic("e4").unwrap();
        assert_eq!(format!("{}", e4), "e4");
        assert_eq!(format!("{:?}", e4), "Coord(e4)");
    }

    proptest! {
        #[test]
        fn algebraic_round_trips(row in 0u8..8, col in 0u8..8) {
            let coord = Coord::new(row, col).unwrap();
            prop_assert_eq!(Coord::from_algebraic(&coord.to_algebraic()), Some(coord));
        }
    }
}
