//! Piece kinds, colored pieces, and the signed square encoding.

use crate::Color;

/// The six piece kinds.
///
/// Discriminants are the magnitudes of the signed square encoding, so
/// `kind as i8` is the code of the White piece of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All kinds in encoding order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// The kinds a pawn may promote to.
    pub const PROMOTABLE: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Returns the encoding magnitude (1 through 6).
    #[inline]
    pub const fn magnitude(self) -> i8 {
        self as i8
    }

    /// Creates a kind from an encoding magnitude.
    pub const fn from_magnitude(magnitude: i8) -> Option<Self> {
        match magnitude {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns the kind letter used in piece labels.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses a kind letter as it appears in piece labels.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true for pieces that move along unobstructed lines
    /// (bishop, rook, queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Returns the signed square code: the sign carries the color, the
    /// magnitude the kind. Zero means empty and no piece encodes to it.
    #[inline]
    pub const fn code(self) -> i8 {
        self.color.sign() * self.kind.magnitude()
    }

    /// Decodes a signed square code. Zero (empty) and out-of-range
    /// magnitudes give `None`.
    pub const fn from_code(code: i8) -> Option<Self> {
        let (color, magnitude) = if code > 0 {
            (Color::White, code)
        } else if code >= -6 && code < 0 {
            (Color::Black, -code)
        } else {
            return None;
        };
        match PieceKind::from_magnitude(magnitude) {
            Some(kind) => Some(Piece::new(color, kind)),
            None => None,
        }
    }

    /// Returns the two-character label used in board text, e.g. "WP" or
    /// "BK".
    pub fn label(self) -> String {
        let mut label = String::with_capacity(2);
        label.push(self.color.letter());
        label.push(self.kind.letter());
        label
    }

    /// Parses a two-character label.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let color = Color::from_letter(chars.next()?)?;
        let kind = PieceKind::from_letter(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Piece::new(color, kind))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
