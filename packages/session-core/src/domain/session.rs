//! Session state: player slots, the mark bijection, the turn marker, and
//! the game status, plus the mutating operations the orchestrator drives.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, Cell, Mark, MoveResolution};
use crate::domain::rules::FIRST_MARK;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, ValidationKind};

/// Host-issued user identity. Opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-issued room identity. Opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join-order slots. Slot two stays empty until the opponent arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlots {
    pub first: UserId,
    pub second: Option<UserId>,
}

/// The mark-to-player bijection, fixed once for the session's lifetime.
///
/// Two named fields rather than an open table: exactly two players and
/// exactly two marks, structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkAssignment {
    pub x: UserId,
    pub o: UserId,
}

impl MarkAssignment {
    /// Assign marks by unbiased coin flip. This decides who plays X, not who
    /// moves first: X always opens.
    pub fn coin_flip<R: Rng>(rng: &mut R, first: UserId, second: UserId) -> Self {
        if rng.random_bool(0.5) {
            Self {
                x: first,
                o: second,
            }
        } else {
            Self {
                x: second,
                o: first,
            }
        }
    }

    pub fn holder(&self, mark: Mark) -> &UserId {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    pub fn mark_of(&self, user: &UserId) -> Option<Mark> {
        if self.x == *user {
            Some(Mark::X)
        } else if self.o == *user {
            Some(Mark::O)
        } else {
            None
        }
    }
}

/// Game progression status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Room exists; waiting for the opponent to join.
    Created,
    /// Both seats filled, marks assigned, moves accepted.
    InProgress,
    /// Terminal. The board and turn marker are frozen.
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// Per-room game session, persisted as room metadata between hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub players: PlayerSlots,
    /// Set once, when the second player joins.
    pub marks: Option<MarkAssignment>,
    /// The mark whose holder must move next.
    pub turn: Mark,
    pub board: Board,
    pub status: Status,
}

impl GameSession {
    /// Fresh session for a newly created room; the creator takes slot one.
    pub fn new(creator: UserId) -> Self {
        Self {
            players: PlayerSlots {
                first: creator,
                second: None,
            },
            marks: None,
            turn: FIRST_MARK,
            board: Board::empty(),
            status: Status::Created,
        }
    }

    /// Seat the second joiner. A third join, a join after the game started,
    /// or the creator taking both slots breaks the two-slot bijection and is
    /// rejected.
    pub fn seat_opponent(&mut self, user: UserId) -> Result<(), DomainError> {
        if self.status != Status::Created || self.players.second.is_some() {
            return Err(DomainError::conflict(
                ConflictKind::SeatTaken,
                "room already has two players",
            ));
        }
        if self.players.first == user {
            return Err(DomainError::conflict(
                ConflictKind::SeatTaken,
                "user already holds the first slot",
            ));
        }
        self.players.second = Some(user);
        Ok(())
    }

    /// Move to InProgress with a fixed mark bijection. X opens.
    pub fn begin(&mut self, marks: MarkAssignment) {
        self.marks = Some(marks);
        self.turn = FIRST_MARK;
        self.status = Status::InProgress;
    }

    /// The mark bijection. An in-progress session without one is corrupt
    /// persisted state, not a user error.
    pub fn require_marks(&self) -> Result<&MarkAssignment, DomainError> {
        self.marks.as_ref().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                "mark assignment missing on a started session",
            )
        })
    }

    /// Validate that `user` may submit the next move and return their mark.
    ///
    /// The sole gate against premature, out-of-turn, and post-termination
    /// submissions; it never mutates anything.
    pub fn mover_mark(&self, user: &UserId) -> Result<Mark, DomainError> {
        match self.status {
            Status::Created => Err(DomainError::validation(
                ValidationKind::GameNotStarted,
                "game not started yet",
            )),
            Status::Finished(_) => Err(DomainError::validation(
                ValidationKind::GameFinished,
                "game is already over",
            )),
            Status::InProgress => {
                let marks = self.require_marks()?;
                if marks.mark_of(user) == Some(self.turn) {
                    Ok(self.turn)
                } else {
                    Err(DomainError::validation(
                        ValidationKind::OutOfTurn,
                        "it is not your turn",
                    ))
                }
            }
        }
    }

    /// Apply a move for the current turn holder: place the mark, resolve the
    /// consequence, then flip the turn or freeze at the terminal status.
    pub fn record_move(&mut self, row: usize, col: usize) -> Result<MoveResolution, DomainError> {
        match self.status {
            Status::InProgress => {}
            Status::Created => {
                return Err(DomainError::validation(
                    ValidationKind::GameNotStarted,
                    "game not started yet",
                ))
            }
            Status::Finished(_) => {
                return Err(DomainError::validation(
                    ValidationKind::GameFinished,
                    "game is already over",
                ))
            }
        }

        if self.board.cell(row, col) != Cell::Empty {
            return Err(DomainError::validation(
                ValidationKind::CellOccupied,
                format!("cell ({row}, {col}) is already taken"),
            ));
        }

        let resolution = self.board.apply_move(row, col, self.turn);
        match resolution {
            MoveResolution::Continue => self.turn = self.turn.other(),
            MoveResolution::Win(mark) => self.status = Status::Finished(Outcome::Win(mark)),
            MoveResolution::Draw => self.status = Status::Finished(Outcome::Draw),
        }
        Ok(resolution)
    }
}
