//! Board storage and the text layout format.

use std::fmt;

use patzer_core::{Color, Coord, Piece, PieceKind};
use thiserror::Error;

/// Why a text layout could not be parsed into a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {got} squares, expected 8")]
    SquareCount { row: usize, got: usize },

    #[error("unrecognized square '{0}'")]
    BadSquare(String),
}

/// An 8×8 board of optional pieces, indexed by [`Coord`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting position. White occupies rows 0 and 1,
    /// Black rows 6 and 7, with the queens on column 3.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for coord in Coord::all() {
            let piece = match coord.row() {
                0 => Some(Piece::new(Color::White, BACK_RANK[coord.col() as usize])),
                1 => Some(Piece::new(Color::White, PieceKind::Pawn)),
                6 => Some(Piece::new(Color::Black, PieceKind::Pawn)),
                7 => Some(Piece::new(Color::Black, BACK_RANK[coord.col() as usize])),
                _ => None,
            };
            board.squares[coord.index()] = piece;
        }
        board
    }

    /// Returns the piece on `at`, if any.
    #[inline]
    pub const fn get(&self, at: Coord) -> Option<Piece> {
        self.squares[at.index()]
    }

    /// Places `piece` on `at`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        self.squares[at.index()] = piece;
    }

    /// Iterates every occupied square with its piece, row 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self.get(coord).map(|piece| (coord, piece)))
    }

    /// Renders the board as text, one row per line starting with row 0.
    /// Each square is a two-letter piece label or `**` for empty,
    /// followed by a space.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 * 3 + 8);
        for row in 0..8 {
            for col in 0..8 {
                match self.squares[row * 8 + col] {
                    Some(piece) => out.push_str(&piece.label()),
                    None => out.push_str("**"),
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Parses the text layout produced by [`Board::render`]. Blank
    /// lines are ignored; every other line must hold 8 squares.
    pub fn parse(text: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != 8 {
                return Err(ParseBoardError::SquareCount {
                    row,
                    got: cells.len(),
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                let piece = if *cell == "**" {
                    None
                } else {
                    match Piece::from_label(cell) {
                        Some(piece) => Some(piece),
                        None => return Err(ParseBoardError::BadSquare(cell.to_string())),
                    }
                };
                board.squares[row * 8 + col] = piece;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for line in self.render().lines() {
            writeln!(f, "    {}", line)?;
        }
        write!(f, "}}")
    }
}
