//! Full-rules move validation.
//!
//! [`validate_move`] turns a [`MoveRequest`] into a [`VettedMove`] or
//! explains why it cannot be played. Every destination assertion the
//! request carries is checked against the board, the path is walked
//! for sliding pieces, and the move is finally rejected if it would
//! leave the mover's own king attacked. Validation never mutates the
//! position; the self-check probe works on a scratch copy.

use patzer_core::{Claim, Coord, MoveError, MoveRequest, Piece, PieceKind};

use crate::check;
use crate::path::{self, Line, PathError};
use crate::state::{GameState, VettedMove};

/// Validates `request` against the position, returning the move ready
/// to apply.
pub fn validate_move(state: &GameState, request: &MoveRequest) -> Result<VettedMove, MoveError> {
    if request.piece.color != state.turn() {
        return Err(MoveError::OutOfTurn);
    }
    if state.board().get(request.from) != Some(request.piece) {
        return Err(MoveError::PieceMismatch {
            piece: request.piece,
            at: request.from,
        });
    }
    if request.from == request.to {
        return Err(shape_error(request));
    }

    let vetted = match request.piece.kind {
        PieceKind::Pawn => validate_pawn(state, request)?,
        PieceKind::Knight => validate_knight(state, request)?,
        PieceKind::Bishop => validate_slider(state, request, &[Line::Diagonal])?,
        PieceKind::Rook => validate_slider(state, request, &[Line::Row, Line::Column])?,
        PieceKind::Queen => {
            validate_slider(state, request, &[Line::Row, Line::Column, Line::Diagonal])?
        }
        PieceKind::King => validate_king(state, request)?,
    };

    guard_self_check(state, &vetted)?;
    Ok(vetted)
}

/// Rejects the move when it would leave the mover's king attacked,
/// probing a scratch copy of the board with the move applied.
pub(crate) fn guard_self_check(state: &GameState, mv: &VettedMove) -> Result<(), MoveError> {
    let mover = mv.placed.color;
    let mut scratch = state.board().clone();
    scratch.set(mv.to, Some(mv.placed));
    scratch.set(mv.from, None);

    let king = if mv.placed.kind == PieceKind::King {
        mv.to
    } else {
        state.king(mover)
    };
    if check::square_attacked(&scratch, king, mover.opposite()) {
        return Err(MoveError::SelfCheck);
    }
    Ok(())
}

fn shape_error(request: &MoveRequest) -> MoveError {
    MoveError::InvalidShape {
        kind: request.piece.kind,
        from: request.from,
        to: request.to,
    }
}

fn plain_vetted(request: &MoveRequest) -> VettedMove {
    VettedMove {
        from: request.from,
        to: request.to,
        placed: request.piece,
    }
}

/// Walks the path for a sliding move and applies the destination rule.
fn scan(state: &GameState, request: &MoveRequest) -> Result<(), MoveError> {
    let capture_asserted = matches!(request.claim, Some(Claim::Capture(_)));
    path::scan_path(state.board(), request.from, request.to, capture_asserted).map_err(
        |error| match error {
            PathError::Blocked(at) => MoveError::BlockedPath(at),
            PathError::OccupiedDestination => occupied_destination(request.to),
        },
    )
}

fn occupied_destination(to: Coord) -> MoveError {
    MoveError::DirectiveMismatch(format!("{} is occupied and no capture was declared", to))
}

/// Checks the request's destination assertion against the board.
fn verify_claim(state: &GameState, request: &MoveRequest) -> Result<(), MoveError> {
    match request.claim {
        None => Ok(()),
        Some(Claim::Quiet) => Err(MoveError::DirectiveMismatch(
            "unexpected quiet assertion".into(),
        )),
        Some(Claim::Capture(target)) => verify_capture_target(state, request, target),
    }
}

fn verify_capture_target(
    state: &GameState,
    request: &MoveRequest,
    target: Piece,
) -> Result<(), MoveError> {
    if target.color == request.piece.color {
        return Err(MoveError::DirectiveMismatch(format!(
            "declared capture of own-color {}",
            target
        )));
    }
    match state.board().get(request.to) {
        Some(occupant) if occupant == target => Ok(()),
        Some(occupant) => Err(MoveError::DirectiveMismatch(format!(
            "declared capture of {} but {} holds {}",
            target, request.to, occupant
        ))),
        None => Err(MoveError::DirectiveMismatch(format!(
            "declared capture of {} but {} is empty",
            target, request.to
        ))),
    }
}

fn reject_promotion_token(request: &MoveRequest) -> Result<(), MoveError> {
    if request.promotion.is_some() {
        return Err(MoveError::DirectiveMismatch(
            "promotion applies only to a pawn reaching the far rank".into(),
        ));
    }
    Ok(())
}

/// Destination rule for single-step pieces that do not walk a path.
fn destination_rule(state: &GameState, request: &MoveRequest) -> Result<(), MoveError> {
    let capture_asserted = matches!(request.claim, Some(Claim::Capture(_)));
    if state.board().get(request.to).is_some() && !capture_asserted {
        return Err(occupied_destination(request.to));
    }
    Ok(())
}

/// Resolves the promotion token against whether the pawn actually
/// reaches its far rank. On promotion the vetted move places the named
/// piece instead of the pawn.
fn resolve_promotion(request: &MoveRequest, at_far_rank: bool) -> Result<VettedMove, MoveError> {
    match (at_far_rank, request.promotion) {
        (true, Some(target)) => {
            if target.color != request.piece.color {
                return Err(MoveError::DirectiveMismatch(format!(
                    "promotion names a {} piece for a {} pawn",
                    target.color, request.piece.color
                )));
            }
            if !target.kind.is_promotable() {
                return Err(MoveError::DirectiveMismatch(format!(
                    "a pawn cannot promote to a {}",
                    target.kind
                )));
            }
            Ok(VettedMove {
                from: request.from,
                to: request.to,
                placed: target,
            })
        }
        (true, None) => Err(MoveError::DirectiveMismatch(
            "a pawn reaching the far rank must name a promotion target".into(),
        )),
        (false, Some(_)) => Err(MoveError::DirectiveMismatch(
            "promotion applies only to a pawn reaching the far rank".into(),
        )),
        (false, None) => Ok(plain_vetted(request)),
    }
}

fn validate_slider(
    state: &GameState,
    request: &MoveRequest,
    allowed: &[Line],
) -> Result<VettedMove, MoveError> {
    match path::line_between(request.from, request.to) {
        Some(line) if allowed.contains(&line) => {}
        _ => return Err(shape_error(request)),
    }
    scan(state, request)?;
    verify_claim(state, request)?;
    reject_promotion_token(request)?;
    Ok(plain_vetted(request))
}

fn validate_knight(state: &GameState, request: &MoveRequest) -> Result<VettedMove, MoveError> {
    if !path::knight_jump(request.from, request.to) {
        return Err(shape_error(request));
    }
    destination_rule(state, request)?;
    verify_claim(state, request)?;
    reject_promotion_token(request)?;
    Ok(plain_vetted(request))
}

fn validate_king(state: &GameState, request: &MoveRequest) -> Result<VettedMove, MoveError> {
    if !path::king_step(request.from, request.to) {
        return Err(shape_error(request));
    }
    destination_rule(state, request)?;
    verify_claim(state, request)?;
    reject_promotion_token(request)?;
    Ok(plain_vetted(request))
}

fn validate_pawn(state: &GameState, request: &MoveRequest) -> Result<VettedMove, MoveError> {
    let color = request.piece.color;
    let direction = color.pawn_direction();
    let (d_row, d_col) = request.from.deltas(request.to);
    let at_far_rank = request.to.row() == color.far_rank();

    if d_col == 0 && d_row == direction {
        // Single step forward. The lane must be empty and the step
        // carries no destination assertion.
        if state.board().get(request.to).is_some() {
            return Err(MoveError::BlockedPath(request.to));
        }
        if request.claim.is_some() {
            return Err(MoveError::DirectiveMismatch(
                "a forward pawn step carries no capture or quiet assertion".into(),
            ));
        }
        return resolve_promotion(request, at_far_rank);
    }

    if d_col == 0 && d_row == 2 * direction && request.from.row() == color.pawn_rank() {
        path::scan_path(state.board(), request.from, request.to, false).map_err(|error| {
            match error {
                PathError::Blocked(at) => MoveError::BlockedPath(at),
                PathError::OccupiedDestination => MoveError::BlockedPath(request.to),
            }
        })?;
        if request.claim.is_some() {
            return Err(MoveError::DirectiveMismatch(
                "a forward pawn step carries no capture or quiet assertion".into(),
            ));
        }
        return resolve_promotion(request, at_far_rank);
    }

    if d_col.abs() == 1 && d_row == direction {
        match request.claim {
            Some(Claim::Capture(target)) => verify_capture_target(state, request, target)?,
            Some(Claim::Quiet) => {
                return Err(MoveError::DirectiveMismatch(
                    "unexpected quiet assertion".into(),
                ))
            }
            None => {
                return Err(MoveError::DirectiveMismatch(
                    "a diagonal pawn step must declare its capture".into(),
                ))
            }
        }
        return resolve_promotion(request, at_far_rank);
    }

    Err(shape_error(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use patzer_core::Color;

    fn at(square: &str) -> Coord {
        Coord::from_algebraic(square).unwrap()
    }

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    fn bare_kings() -> Board {
        let mut board = Board::empty();
        board.set(at("e1"), Some(piece(Color::White, PieceKind::King)));
        board.set(at("e8"), Some(piece(Color::Black, PieceKind::King)));
        board
    }

    fn state_with(board: Board, turn: Color) -> GameState {
        GameState::from_board(board, turn).unwrap()
    }

    #[test]
    fn rejects_moves_out_of_turn() {
        let state = GameState::new();
        let request = MoveRequest::new(
            piece(Color::Black, PieceKind::Pawn),
            at("e7"),
            at("e5"),
        );
        assert_eq!(validate_move(&state, &request), Err(MoveError::OutOfTurn));
    }

    #[test]
    fn rejects_a_piece_the_square_does_not_hold() {
        let state = GameState::new();
        let request = MoveRequest::new(
            piece(Color::White, PieceKind::Queen),
            at("e2"),
            at("e4"),
        );
        assert_eq!(
            validate_move(&state, &request),
            Err(MoveError::PieceMismatch {
                piece: piece(Color::White, PieceKind::Queen),
                at: at("e2"),
            })
        );

        let empty_square = MoveRequest::new(
            piece(Color::White, PieceKind::Queen),
            at("e4"),
            at("e5"),
        );
        assert!(matches!(
            validate_move(&state, &empty_square),
            Err(MoveError::PieceMismatch { .. })
        ));
    }

    #[test]
    fn rejects_a_move_to_its_own_square() {
        let state = GameState::new();
        let request = MoveRequest::new(
            piece(Color::White, PieceKind::Knight),
            at("g1"),
            at("g1"),
        );
        assert!(matches!(
            validate_move(&state, &request),
            Err(MoveError::InvalidShape { .. })
        ));
    }

    #[test]
    fn pawn_single_step() {
        let state = GameState::new();
        let request = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e2"), at("e3"));
        assert_eq!(
            validate_move(&state, &request),
            Ok(VettedMove {
                from: at("e2"),
                to: at("e3"),
                placed: piece(Color::White, PieceKind::Pawn),
            })
        );
    }

    #[test]
    fn pawn_forward_is_blocked_by_any_occupant() {
        let mut board = bare_kings();
        board.set(at("e2"), Some(piece(Color::White, PieceKind::Pawn)));
        board.set(at("e3"), Some(piece(Color::Black, PieceKind::Rook)));
        let state = state_with(board, Color::White);

        let single =
            MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e2"), at("e3"));
        assert_eq!(
            validate_move(&state, &single),
            Err(MoveError::BlockedPath(at("e3")))
        );

        // A capture declared straight ahead does not unblock the lane.
        let with_claim = MoveRequest::capture(
            piece(Color::White, PieceKind::Pawn),
            at("e2"),
            at("e3"),
            piece(Color::Black, PieceKind::Rook),
        );
        assert_eq!(
            validate_move(&state, &with_claim),
            Err(MoveError::BlockedPath(at("e3")))
        );
    }

    #[test]
    fn pawn_double_step_only_from_its_home_row() {
        let state = GameState::new();
        let request = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e2"), at("e4"));
        assert!(validate_move(&state, &request).is_ok());

        let mut board = bare_kings();
        board.set(at("e3"), Some(piece(Color::White, PieceKind::Pawn)));
        let state = state_with(board, Color::White);
        let request = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e3"), at("e5"));
        assert!(matches!(
            validate_move(&state, &request),
            Err(MoveError::InvalidShape { .. })
        ));
    }

    #[test]
    fn pawn_double_step_blocked_midway_or_at_the_destination() {
        let mut board = bare_kings();
        board.set(at("e2"), Some(piece(Color::White, PieceKind::Pawn)));
        board.set(at("e3"), Some(piece(Color::Black, PieceKind::Knight)));
        let state = state_with(board, Color::White);
        let request = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e2"), at("e4"));
        assert_eq!(
            validate_move(&state, &request),
            Err(MoveError::BlockedPath(at("e3")))
        );

        let mut board = bare_kings();
        board.set(at("e2"), Some(piece(Color::White, PieceKind::Pawn)));
        board.set(at("e4"), Some(piece(Color::Black, PieceKind::Knight)));
        let state = state_with(board, Color::White);
        assert_eq!(
            validate_move(&state, &request),
            Err(MoveError::BlockedPath(at("e4")))
        );
    }

    #[test]
    fn pawn_diagonal_requires_a_matching_capture_claim() {
        let mut board = bare_kings();
        board.set(at("e4"), Some(piece(Color::White, PieceKind::Pawn)));
        board.set(at("d5"), Some(piece(Color::Black, PieceKind::Knight)));
        let state = state_with(board, Color::White);

        let correct = MoveRequest::capture(
            piece(Color::White, PieceKind::Pawn),
            at("e4"),
            at("d5"),
            piece(Color::Black, PieceKind::Knight),
        );
        assert!(validate_move(&state, &correct).is_ok());

        let wrong_kind = MoveRequest::capture(
            piece(Color::White, PieceKind::Pawn),
            at("e4"),
            at("d5"),
            piece(Color::Black, PieceKind::Bishop),
        );
        assert!(matches!(
            validate_move(&state, &wrong_kind),
            Err(MoveError::DirectiveMismatch(_))
        ));

        let undeclared =
            MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e4"), at("d5"));
        assert!(matches!(
            validate_move(&state, &undeclared),
            Err(MoveError::DirectiveMismatch(_))
        ));

        // Diagonal to an empty square fails even with a claim.
        let into_thin_air = MoveRequest::capture(
            piece(Color::White, PieceKind::Pawn),
            at("e4"),
            at("f5"),
            piece(Color::Black, PieceKind::Knight),
        );
        assert!(matches!(
            validate_move(&state, &into_thin_air),
            Err(MoveError::DirectiveMismatch(_))
        ));
    }

    #[test]
    fn pawn_forward_step_rejects_any_claim() {
        let state = GameState::new();
        let request = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e2"), at("e3"))
            .quiet();
        assert!(matches!(
            validate_move(&state, &request),
            Err(MoveError::DirectiveMismatch(_))
        ));
    }

    #[test]
    fn promotion_places_the_named_piece() {
        let mut board = bare_kings();
        board.set(at("a7"), Some(piece(Color::White, PieceKind::Pawn)));
        let state = state_with(board, Color::White);

        let request = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("a7"), at("a8"))
            .promoting(piece(Color::White, PieceKind::Queen));
        assert_eq!(
            validate_move(&state, &request),
            Ok(VettedMove {
                from: at("a7"),
                to: at("a8"),
                placed: piece(Color::White, PieceKind::Queen),
            })
        );
    }

    #[test]
    fn promotion_token_is_checked_against_the_far_rank() {
        let mut board = bare_kings();
        board.set(at("a7"), Some(piece(Color::White, PieceKind::Pawn)));
        board.set(at("b2"), Some(piece(Color::White, PieceKind::Pawn)));
        let state = state_with(board, Color::White);
        let pawn = piece(Color::White, PieceKind::Pawn);

        // Reaching the far rank without a token.
        let missing = MoveRequest::new(pawn, at("a7"), at("a8"));
        assert!(matches!(
            validate_move(&state, &missing),
            Err(MoveError::DirectiveMismatch(_))
        ));

        // Token naming the enemy's color.
        let wrong_color = MoveRequest::new(pawn, at("a7"), at("a8"))
            .promoting(piece(Color::Black, PieceKind::Queen));
        assert!(matches!(
            validate_move(&state, &wrong_color),
            Err(MoveError::DirectiveMismatch(_))
        ));

        // Token naming a king or a pawn.
        let to_king =
            MoveRequest::new(pawn, at("a7"), at("a8")).promoting(piece(Color::White, PieceKind::King));
        assert!(matches!(
            validate_move(&state, &to_king),
            Err(MoveError::DirectiveMismatch(_))
        ));
        let to_pawn =
            MoveRequest::new(pawn, at("a7"), at("a8")).promoting(piece(Color::White, PieceKind::Pawn));
        assert!(matches!(
            validate_move(&state, &to_pawn),
            Err(MoveError::DirectiveMismatch(_))
        ));

        // Token on a step that never reaches the far rank.
        let midboard =
            MoveRequest::new(pawn, at("b2"), at("b3")).promoting(piece(Color::White, PieceKind::Queen));
        assert!(matches!(
            validate_move(&state, &midboard),
            Err(MoveError::DirectiveMismatch(_))
        ));
    }

    #[test]
    fn knight_jumps_over_the_wall() {
        let state = GameState::new();
        let jump = MoveRequest::new(piece(Color::White, PieceKind::Knight), at("g1"), at("f3"));
        assert!(validate_move(&state, &jump).is_ok());

        let slide = MoveRequest::new(piece(Color::White, PieceKind::Knight), at("g1"), at("g3"));
        assert!(matches!(
            validate_move(&state, &slide),
            Err(MoveError::InvalidShape { .. })
        ));
    }

    #[test]
    fn knight_needs_a_claim_for_an_occupied_destination() {
        let mut board = bare_kings();
        board.set(at("f3"), Some(piece(Color::White, PieceKind::Knight)));
        board.set(at("e5"), Some(piece(Color::Black, PieceKind::Pawn)));
        let state = state_with(board, Color::White);

        let undeclared =
            MoveRequest::new(piece(Color::White, PieceKind::Knight), at("f3"), at("e5"));
        assert!(matches!(
            validate_move(&state, &undeclared),
            Err(MoveError::DirectiveMismatch(_))
        ));

        let declared = MoveRequest::capture(
            piece(Color::White, PieceKind::Knight),
            at("f3"),
            at("e5"),
            piece(Color::Black, PieceKind::Pawn),
        );
        assert!(validate_move(&state, &declared).is_ok());
    }

    #[test]
    fn sliders_respect_their_lines() {
        let mut board = bare_kings();
        board.set(at("d4"), Some(piece(Color::White, PieceKind::Rook)));
        board.set(at("c4"), Some(piece(Color::White, PieceKind::Bishop)));
        let state = state_with(board, Color::White);

        let rook = piece(Color::White, PieceKind::Rook);
        assert!(validate_move(&state, &MoveRequest::new(rook, at("d4"), at("d8"))).is_ok());
        assert!(validate_move(&state, &MoveRequest::new(rook, at("d4"), at("h4"))).is_ok());
        assert!(matches!(
            validate_move(&state, &MoveRequest::new(rook, at("d4"), at("f6"))),
            Err(MoveError::InvalidShape { .. })
        ));

        let bishop = piece(Color::White, PieceKind::Bishop);
        assert!(validate_move(&state, &MoveRequest::new(bishop, at("c4"), at("f7"))).is_ok());
        assert!(matches!(
            validate_move(&state, &MoveRequest::new(bishop, at("c4"), at("c7"))),
            Err(MoveError::InvalidShape { .. })
        ));
    }

    #[test]
    fn queen_reports_the_first_blocker() {
        let state = GameState::new();
        let request = MoveRequest::new(piece(Color::White, PieceKind::Queen), at("d1"), at("d4"));
        assert_eq!(
            validate_move(&state, &request),
            Err(MoveError::BlockedPath(at("d2")))
        );
    }

    #[test]
    fn capture_claims_are_checked_for_sliders() {
        let mut board = bare_kings();
        board.set(at("d1"), Some(piece(Color::White, PieceKind::Queen)));
        board.set(at("d7"), Some(piece(Color::Black, PieceKind::Rook)));
        let state = state_with(board, Color::White);
        let queen = piece(Color::White, PieceKind::Queen);

        let correct = MoveRequest::capture(
            queen,
            at("d1"),
            at("d7"),
            piece(Color::Black, PieceKind::Rook),
        );
        assert!(validate_move(&state, &correct).is_ok());

        let undeclared = MoveRequest::new(queen, at("d1"), at("d7"));
        assert!(matches!(
            validate_move(&state, &undeclared),
            Err(MoveError::DirectiveMismatch(_))
        ));

        let wrong_target = MoveRequest::capture(
            queen,
            at("d1"),
            at("d7"),
            piece(Color::Black, PieceKind::Queen),
        );
        assert!(matches!(
            validate_move(&state, &wrong_target),
            Err(MoveError::DirectiveMismatch(_))
        ));

        let own_color = MoveRequest::capture(
            queen,
            at("d1"),
            at("d7"),
            piece(Color::White, PieceKind::Rook),
        );
        assert!(matches!(
            validate_move(&state, &own_color),
            Err(MoveError::DirectiveMismatch(_))
        ));

        let empty_square = MoveRequest::capture(
            queen,
            at("d1"),
            at("d5"),
            piece(Color::Black, PieceKind::Rook),
        );
        assert!(matches!(
            validate_move(&state, &empty_square),
            Err(MoveError::DirectiveMismatch(_))
        ));
    }

    #[test]
    fn quiet_claims_are_never_accepted() {
        let state = GameState::new();
        let request = MoveRequest::new(piece(Color::White, PieceKind::Knight), at("g1"), at("f3"))
            .quiet();
        assert_eq!(
            validate_move(&state, &request),
            Err(MoveError::DirectiveMismatch(
                "unexpected quiet assertion".into()
            ))
        );
    }

    #[test]
    fn king_moves_a_single_step() {
        let mut board = bare_kings();
        let state = state_with(board.clone(), Color::White);
        let king = piece(Color::White, PieceKind::King);

        assert!(validate_move(&state, &MoveRequest::new(king, at("e1"), at("d2"))).is_ok());
        assert!(matches!(
            validate_move(&state, &MoveRequest::new(king, at("e1"), at("e3"))),
            Err(MoveError::InvalidShape { .. })
        ));

        board.set(at("d2"), Some(piece(Color::Black, PieceKind::Pawn)));
        let state = state_with(board, Color::White);
        let declared = MoveRequest::capture(
            king,
            at("e1"),
            at("d2"),
            piece(Color::Black, PieceKind::Pawn),
        );
        assert!(validate_move(&state, &declared).is_ok());
    }

    #[test]
    fn king_cannot_step_into_an_attacked_square() {
        let mut board = bare_kings();
        board.set(at("a2"), Some(piece(Color::Black, PieceKind::Rook)));
        let state = state_with(board, Color::White);
        let king = piece(Color::White, PieceKind::King);

        assert_eq!(
            validate_move(&state, &MoveRequest::new(king, at("e1"), at("e2"))),
            Err(MoveError::SelfCheck)
        );
        assert!(validate_move(&state, &MoveRequest::new(king, at("e1"), at("f1"))).is_ok());
    }

    #[test]
    fn king_captures_into_a_defended_square_are_rejected() {
        let mut board = bare_kings();
        board.set(at("d2"), Some(piece(Color::Black, PieceKind::Knight)));
        board.set(at("d8"), Some(piece(Color::Black, PieceKind::Rook)));
        let state = state_with(board, Color::White);

        let request = MoveRequest::capture(
            piece(Color::White, PieceKind::King),
            at("e1"),
            at("d2"),
            piece(Color::Black, PieceKind::Knight),
        );
        assert_eq!(validate_move(&state, &request), Err(MoveError::SelfCheck));
    }

    #[test]
    fn pinned_pieces_stay_put() {
        let mut board = bare_kings();
        board.set(at("e2"), Some(piece(Color::White, PieceKind::Knight)));
        board.set(at("e7"), Some(piece(Color::Black, PieceKind::Rook)));
        let state = state_with(board, Color::White);

        let request = MoveRequest::new(piece(Color::White, PieceKind::Knight), at("e2"), at("c3"));
        assert_eq!(validate_move(&state, &request), Err(MoveError::SelfCheck));
    }

    #[test]
    fn validation_leaves_the_position_untouched() {
        let state = GameState::new();
        let before = state.clone();

        let good = MoveRequest::new(piece(Color::White, PieceKind::Pawn), at("e2"), at("e4"));
        let bad = MoveRequest::new(piece(Color::White, PieceKind::Queen), at("d1"), at("d4"));
        let _ = validate_move(&state, &good);
        let _ = validate_move(&state, &bad);
        assert_eq!(state, before);
    }
}
