// Unit tests for error mapping - pure domain errors to the host-facing hook error
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{ErrorCode, HookError};

#[test]
fn maps_validation_to_rejection() {
    let de = DomainError::validation(ValidationKind::OutOfTurn, "it is not your turn");
    let hook: HookError = de.into();
    assert!(hook.is_rejection());
    assert_eq!(hook.code(), ErrorCode::OutOfTurn);
    assert_eq!(hook.code().as_str(), "OUT_OF_TURN");

    let de = DomainError::validation(ValidationKind::GameNotStarted, "game not started yet");
    let hook: HookError = de.into();
    assert!(hook.is_rejection());
    assert_eq!(hook.code(), ErrorCode::GameNotStarted);

    let de = DomainError::validation(ValidationKind::GameFinished, "game is already over");
    let hook: HookError = de.into();
    assert!(hook.is_rejection());
    assert_eq!(hook.code(), ErrorCode::GameFinished);

    // Generic validation fallback
    let de = DomainError::validation(ValidationKind::Other("SOMETHING".into()), "bad field");
    let hook: HookError = de.into();
    assert_eq!(hook.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_cell_validation() {
    let occupied = DomainError::validation(ValidationKind::CellOccupied, "cell taken");
    let hook: HookError = occupied.into();
    assert_eq!(hook.code().as_str(), "CELL_OCCUPIED");

    let range = DomainError::validation(ValidationKind::CellOutOfRange, "index 9");
    let hook: HookError = range.into();
    assert_eq!(hook.code().as_str(), "CELL_OUT_OF_RANGE");
}

#[test]
fn maps_conflicts_to_rejection() {
    let seat = DomainError::conflict(ConflictKind::SeatTaken, "seat taken");
    let hook: HookError = seat.into();
    assert!(hook.is_rejection());
    assert_eq!(hook.code().as_str(), "SEAT_TAKEN");

    let other = DomainError::conflict(ConflictKind::Other("some conflict".to_string()), "generic");
    let hook: HookError = other.into();
    assert_eq!(hook.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found_to_internal() {
    let nf = DomainError::not_found(NotFoundKind::Session, "no session metadata");
    let hook: HookError = nf.into();
    assert!(!hook.is_rejection());
    assert!(matches!(hook, HookError::Internal { .. }));
    assert_eq!(hook.code().as_str(), "SESSION_NOT_FOUND");
}

#[test]
fn maps_infra_to_internal() {
    let store = DomainError::infra(InfraErrorKind::MetadataStore, "store down");
    let hook: HookError = store.into();
    assert!(matches!(hook, HookError::Internal { .. }));
    assert_eq!(hook.code().as_str(), "METADATA_STORE");

    let msg = DomainError::infra(InfraErrorKind::Messaging, "send failed");
    let hook: HookError = msg.into();
    assert_eq!(hook.code().as_str(), "MESSAGING");

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad board value");
    let hook: HookError = corr.into();
    assert_eq!(hook.code().as_str(), "DATA_CORRUPTION");

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let hook: HookError = other.into();
    assert_eq!(hook.code().as_str(), "INTERNAL_ERROR");
}

#[test]
fn rejection_keeps_human_readable_reason() {
    let de = DomainError::validation(ValidationKind::OutOfTurn, "it is not your turn");
    let hook: HookError = de.into();
    match hook {
        HookError::Rejected { reason, .. } => assert_eq!(reason, "it is not your turn"),
        other => panic!("expected rejection, got: {other:?}"),
    }
}
