use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

/// Host-facing outcome of a failed hook.
///
/// `Rejected` vetoes the pending room operation: the host must not commit it
/// and is expected to report the reason back to the offending client. No game
/// state was mutated. `Internal` marks a host/core protocol violation (e.g.
/// session metadata absent for a room the host already committed); it is
/// fatal to this request only and must not corrupt other rooms.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("rejected: {reason}")]
    Rejected { code: ErrorCode, reason: String },
    #[error("internal inconsistency: {detail}")]
    Internal { code: ErrorCode, detail: String },
}

impl HookError {
    /// The canonical error code for any variant
    pub fn code(&self) -> ErrorCode {
        match self {
            HookError::Rejected { code, .. } => *code,
            HookError::Internal { code, .. } => *code,
        }
    }

    /// True for expected, user-triggered rejections (as opposed to
    /// host/core protocol violations).
    pub fn is_rejection(&self) -> bool {
        matches!(self, HookError::Rejected { .. })
    }
}

impl From<DomainError> for HookError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, reason) => HookError::Rejected {
                code: validation_code(&kind),
                reason,
            },
            DomainError::Conflict(kind, reason) => HookError::Rejected {
                code: conflict_code(&kind),
                reason,
            },
            DomainError::NotFound(kind, detail) => HookError::Internal {
                code: not_found_code(&kind),
                detail,
            },
            DomainError::Infra(kind, detail) => HookError::Internal {
                code: infra_code(&kind),
                detail,
            },
        }
    }
}

fn validation_code(kind: &ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::GameNotStarted => ErrorCode::GameNotStarted,
        ValidationKind::GameFinished => ErrorCode::GameFinished,
        ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
        ValidationKind::CellOccupied => ErrorCode::CellOccupied,
        ValidationKind::CellOutOfRange => ErrorCode::CellOutOfRange,
        ValidationKind::Other(_) => ErrorCode::ValidationError,
    }
}

fn conflict_code(kind: &ConflictKind) -> ErrorCode {
    match kind {
        ConflictKind::SeatTaken => ErrorCode::SeatTaken,
        ConflictKind::Other(_) => ErrorCode::Conflict,
    }
}

fn not_found_code(kind: &NotFoundKind) -> ErrorCode {
    match kind {
        NotFoundKind::Session => ErrorCode::SessionNotFound,
        NotFoundKind::Other(_) => ErrorCode::NotFound,
    }
}

fn infra_code(kind: &InfraErrorKind) -> ErrorCode {
    match kind {
        InfraErrorKind::MetadataStore => ErrorCode::MetadataStore,
        InfraErrorKind::Messaging => ErrorCode::Messaging,
        InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
        InfraErrorKind::Other(_) => ErrorCode::InternalError,
    }
}
