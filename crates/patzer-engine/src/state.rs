//! Game state: the board plus whose turn it is.

use patzer_core::{Color, Coord, Piece, PieceKind};
use thiserror::Error;

use crate::board::{Board, ParseBoardError};
use crate::check;

/// Why a board could not be adopted as a playable position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("expected exactly one {color} king, found {found}")]
    KingCount { color: Color, found: usize },

    #[error(transparent)]
    Board(#[from] ParseBoardError),
}

/// A move that has passed validation and is ready to apply. `placed`
/// is the piece that ends up on the destination, which differs from
/// the moved piece only on promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VettedMove {
    pub from: Coord,
    pub to: Coord,
    pub placed: Piece,
}

/// The full position: board, cached king squares, side to move, and
/// whether that side currently stands in check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    kings: [Coord; 2],
    turn: Color,
    in_check: bool,
}

impl GameState {
    /// The standard starting position with White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            kings: [Coord::E1, Coord::E8],
            turn: Color::White,
            in_check: false,
        }
    }

    /// Adopts an arbitrary board. Both sides must have exactly one
    /// king; the check flag is computed for the side to move.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, SetupError> {
        let kings = [
            lone_king(&board, Color::White)?,
            lone_king(&board, Color::Black)?,
        ];
        let mut state = GameState {
            board,
            kings,
            turn,
            in_check: false,
        };
        state.in_check = check::in_check(&state, turn);
        Ok(state)
    }

    /// Parses a text layout and adopts it via [`GameState::from_board`].
    pub fn from_layout(text: &str, turn: Color) -> Result<Self, SetupError> {
        let board = Board::parse(text)?;
        GameState::from_board(board, turn)
    }

    /// The current board.
    #[inline]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the side to move is currently in check.
    #[inline]
    pub const fn in_check(&self) -> bool {
        self.in_check
    }

    /// The square of `color`'s king.
    #[inline]
    pub const fn king(&self, color: Color) -> Coord {
        self.kings[color.index()]
    }

    /// Applies a vetted move: moves the piece, captures the occupant,
    /// refreshes the king cache, flips the turn, and recomputes the
    /// check flag for the new side to move. Returns the captured piece.
    pub(crate) fn execute(&mut self, mv: &VettedMove) -> Option<Piece> {
        let captured = self.board.get(mv.to);
        self.board.set(mv.to, Some(mv.placed));
        self.board.set(mv.from, None);
        if mv.placed.kind == PieceKind::King {
            self.kings[mv.placed.color.index()] = mv.to;
        }
        self.turn = self.turn.opposite();
        self.in_check = check::in_check(self, self.turn);

        match captured {
            Some(taken) => tracing::debug!(
                "{} {} takes {} on {}",
                mv.placed.color,
                mv.from,
                taken,
                mv.to
            ),
            None => tracing::debug!("{} {} to {}", mv.placed.color, mv.from, mv.to),
        }
        if self.in_check {
            tracing::debug!("{} is in check", self.turn);
        }
        captured
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

fn lone_king(board: &Board, color: Color) -> Result<Coord, SetupError> {
    let mut found = None;
    let mut count = 0;
    for (coord, piece) in board.pieces() {
        if piece == Piece::new(color, PieceKind::King) {
            found = Some(coord);
            count += 1;
        }
    }
    match (found, count) {
        (Some(coord), 1) => Ok(coord),
        _ => Err(SetupError::KingCount { color, found: count }),
    }
}
