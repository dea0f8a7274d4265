//! Error codes surfaced to the hosting room server.
//!
//! This module defines all error codes used throughout the core.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! the host forwards to clients alongside a rejection reason.

use core::fmt;

/// Centralized error codes for the session core.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move validation
    /// Move submitted before both players are seated
    GameNotStarted,
    /// Move submitted after the game reached a terminal state
    GameFinished,
    /// Submitter does not hold the turn marker
    OutOfTurn,
    /// Target cell already carries a mark
    CellOccupied,
    /// Flat cell index outside the board
    CellOutOfRange,
    /// General validation error
    ValidationError,

    // Join conflicts
    /// Both player slots are already taken
    SeatTaken,
    /// General conflict error
    Conflict,

    // Host/core protocol violations
    /// Game session metadata absent for a room the host committed
    SessionNotFound,
    /// General not found error
    NotFound,
    /// Metadata store operation failed
    MetadataStore,
    /// Member message delivery failed
    Messaging,
    /// Persisted session metadata failed to decode
    DataCorruption,
    /// General internal error
    InternalError,
}

impl ErrorCode {
    /// Canonical string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GameNotStarted => "GAME_NOT_STARTED",
            ErrorCode::GameFinished => "GAME_FINISHED",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::CellOccupied => "CELL_OCCUPIED",
            ErrorCode::CellOutOfRange => "CELL_OUT_OF_RANGE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::SeatTaken => "SEAT_TAKEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MetadataStore => "METADATA_STORE",
            ErrorCode::Messaging => "MESSAGING",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
