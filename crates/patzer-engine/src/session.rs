//! A shared, thread-safe handle to a running game.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;

use patzer_core::{Color, MoveError, MoveRequest};

use crate::game::{Game, GameResult, MoveReport, OpponentReport};
use crate::state::GameState;

/// A [`Game`] behind a mutex, for callers that drive one game from
/// several threads. Every entry point takes the lock for the whole
/// move, so turn order cannot interleave.
#[derive(Debug)]
pub struct GameSession {
    inner: Mutex<Game>,
}

impl GameSession {
    pub fn new(player: Color) -> Self {
        GameSession {
            inner: Mutex::new(Game::new(player)),
        }
    }

    pub fn from_game(game: Game) -> Self {
        GameSession {
            inner: Mutex::new(game),
        }
    }

    /// Poisoned locks are recovered: a holder that panicked cannot
    /// have left a half-applied move behind, since moves apply in one
    /// step after validation.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn submit_move(&self, request: &MoveRequest) -> Result<MoveReport, MoveError> {
        self.lock().submit_move(request)
    }

    pub fn opponent_move(&self) -> Result<OpponentReport, MoveError> {
        self.lock().opponent_move()
    }

    pub fn opponent_move_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<OpponentReport, MoveError> {
        self.lock().opponent_move_with(rng)
    }

    pub fn reset(&self, player: Color) {
        self.lock().reset(player);
    }

    pub fn render_board(&self) -> String {
        self.lock().render_board()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.lock().result()
    }

    pub fn is_game_over(&self) -> bool {
        self.lock().is_game_over()
    }

    pub fn in_check(&self) -> bool {
        self.lock().in_check()
    }

    pub fn turn(&self) -> Color {
        self.lock().turn()
    }

    pub fn player(&self) -> Color {
        self.lock().player()
    }

    /// A copy of the position at this moment.
    pub fn snapshot(&self) -> GameState {
        self.lock().state().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patzer_core::{Coord, Piece, PieceKind};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn only_one_racing_move_wins_the_turn() {
        let session = Arc::new(GameSession::new(Color::White));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let session = Arc::clone(&session);
            handles.push(thread::spawn(move || {
                let request = MoveRequest::new(
                    Piece::new(Color::White, PieceKind::Pawn),
                    Coord::from_algebraic("e2").unwrap(),
                    Coord::from_algebraic("e4").unwrap(),
                );
                session.submit_move(&request).is_ok()
            }));
        }

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|accepted| *accepted)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(session.turn(), Color::Black);
    }

    #[test]
    fn snapshot_is_detached_from_the_live_game() {
        let session = GameSession::new(Color::White);
        let snapshot = session.snapshot();

        let request = MoveRequest::new(
            Piece::new(Color::White, PieceKind::Pawn),
            Coord::from_algebraic("d2").unwrap(),
            Coord::from_algebraic("d4").unwrap(),
        );
        session.submit_move(&request).unwrap();

        assert_eq!(snapshot.turn(), Color::White);
        assert!(snapshot
            .board()
            .get(Coord::from_algebraic("d2").unwrap())
            .is_some());
        assert!(session
            .snapshot()
            .board()
            .get(Coord::from_algebraic("d2").unwrap())
            .is_none());
    }
}
