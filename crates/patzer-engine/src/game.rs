//! A full game: one human side against the random opponent.

use std::fmt;

use rand::Rng;

use patzer_core::{Color, Coord, MoveError, MoveRequest, Piece, PieceKind};

use crate::mate;
use crate::opponent;
use crate::state::GameState;
use crate::validate;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameResult::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// The outcome of an accepted player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether the opponent now stands in check.
    pub in_check: bool,
    /// Whether the opponent is checkmated, ending the game.
    pub checkmate: bool,
    /// The piece the move captured, if any.
    pub captured: Option<Piece>,
}

/// The outcome of an opponent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentReport {
    pub from: Coord,
    pub to: Coord,
    /// The kind a promoting pawn became, if the move promoted.
    pub promoted: Option<PieceKind>,
    pub captured: Option<Piece>,
    /// Whether the player now stands in check.
    pub in_check: bool,
    /// Whether the player is checkmated, ending the game.
    pub checkmate: bool,
}

/// A game between the player's side and the built-in random opponent.
///
/// The player's moves go through the full validator; the opponent
/// plays by its reduced rulebook. The game records a result once
/// either side is mated or the opponent runs out of moves, after which
/// both entry points refuse to play on.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    player: Color,
    over: Option<GameResult>,
}

impl Game {
    /// A fresh game from the standard position. White moves first, so
    /// a player choosing Black waits for the opponent's first move.
    pub fn new(player: Color) -> Self {
        tracing::info!("new game, player takes {}", player);
        Game {
            state: GameState::new(),
            player,
            over: None,
        }
    }

    /// Adopts an arbitrary position mid-game.
    pub fn from_state(state: GameState, player: Color) -> Self {
        Game {
            state,
            player,
            over: None,
        }
    }

    /// Abandons the current game and starts over.
    pub fn reset(&mut self, player: Color) {
        *self = Game::new(player);
    }

    /// The side the player controls.
    #[inline]
    pub const fn player(&self) -> Color {
        self.player
    }

    /// The side the opponent controls.
    #[inline]
    pub const fn opponent(&self) -> Color {
        self.player.opposite()
    }

    /// The side to move.
    #[inline]
    pub const fn turn(&self) -> Color {
        self.state.turn()
    }

    /// Whether the side to move stands in check.
    #[inline]
    pub const fn in_check(&self) -> bool {
        self.state.in_check()
    }

    /// The recorded result, once the game has ended.
    #[inline]
    pub const fn result(&self) -> Option<GameResult> {
        self.over
    }

    #[inline]
    pub const fn is_game_over(&self) -> bool {
        self.over.is_some()
    }

    /// The current position.
    #[inline]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The current board as its text layout.
    pub fn render_board(&self) -> String {
        self.state.board().render()
    }

    /// Plays a move for the player's side. The request must name a
    /// piece of the player's own color and pass the full validator.
    pub fn submit_move(&mut self, request: &MoveRequest) -> Result<MoveReport, MoveError> {
        if self.over.is_some() {
            return Err(MoveError::GameOver);
        }
        if request.piece.color != self.player {
            return Err(MoveError::OutOfTurn);
        }

        let vetted = validate::validate_move(&self.state, request)?;
        let captured = self.state.execute(&vetted);

        let in_check = self.state.in_check();
        let checkmate = mate::is_checkmate_reduced(&self.state);
        if checkmate {
            self.over = Some(GameResult::Checkmate {
                winner: self.player,
            });
            tracing::info!("{} wins by checkmate", self.player);
        }
        Ok(MoveReport {
            in_check,
            checkmate,
            captured,
        })
    }

    /// Plays the opponent's move with a caller-supplied generator.
    ///
    /// When the opponent has no legal move the game ends on the spot:
    /// checkmate for the player if the opponent stands in check,
    /// stalemate otherwise. The error still surfaces so callers notice
    /// no move was made.
    pub fn opponent_move_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<OpponentReport, MoveError> {
        if self.over.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.state.turn() == self.player {
            return Err(MoveError::OutOfTurn);
        }

        let played = match opponent::play_random_move(&mut self.state, rng) {
            Ok(played) => played,
            Err(MoveError::NoLegalMoves) => {
                let result = if self.state.in_check() {
                    GameResult::Checkmate {
                        winner: self.player,
                    }
                } else {
                    GameResult::Stalemate
                };
                tracing::info!("opponent has no moves: {}", result);
                self.over = Some(result);
                return Err(MoveError::NoLegalMoves);
            }
            Err(other) => return Err(other),
        };

        let in_check = self.state.in_check();
        let checkmate = mate::is_checkmate(&self.state);
        if checkmate {
            self.over = Some(GameResult::Checkmate {
                winner: self.opponent(),
            });
            tracing::info!("{} wins by checkmate", self.opponent());
        }
        Ok(OpponentReport {
            from: played.from,
            to: played.to,
            promoted: played.promoted,
            captured: played.captured,
            in_check,
            checkmate,
        })
    }

    /// Plays the opponent's move with the thread-local generator.
    pub fn opponent_move(&mut self) -> Result<OpponentReport, MoveError> {
        self.opponent_move_with(&mut rand::rng())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Color::White)
    }
}
