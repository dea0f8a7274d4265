//! Load/store the per-room [`GameSession`] through the host metadata
//! contract.
//!
//! The layout is flat key/value pairs, one key per field. A room's metadata
//! map may carry unrelated host keys alongside these; staging and commits
//! never touch keys the core does not own.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::domain::board::{Board, Mark};
use crate::domain::session::{
    GameSession, MarkAssignment, PlayerSlots, RoomId, Status, UserId,
};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::host::{MetadataMap, RoomHost};

/// Metadata keys owned by this core.
pub mod keys {
    pub const PLAYER_ONE: &str = "player-1";
    pub const PLAYER_TWO: &str = "player-2";
    pub const MARK_X: &str = "mark-x";
    pub const MARK_O: &str = "mark-o";
    pub const NEXT_MARK: &str = "next-mark";
    pub const BOARD: &str = "board";
    pub const STATUS: &str = "status";
}

/// Stage the initial session fields into a creation request's metadata map.
///
/// Merges into the map: unrelated caller-supplied keys are preserved. This
/// cannot fail; every staged value is a fixed literal or the creator id.
pub fn stage_new_session(meta: &mut MetadataMap, creator: &UserId) {
    meta.insert(keys::PLAYER_ONE.into(), json!(creator.as_str()));
    meta.insert(keys::PLAYER_TWO.into(), Value::Null);
    meta.insert(keys::NEXT_MARK.into(), json!(Mark::X.as_str()));
    meta.insert(keys::BOARD.into(), empty_board_value());
    meta.insert(keys::STATUS.into(), json!("created"));
}

fn empty_board_value() -> Value {
    json!([["-", "-", "-"], ["-", "-", "-"], ["-", "-", "-"]])
}

/// Read a room's session, or `None` when the room is absent or carries no
/// session fields.
pub async fn load<H: RoomHost>(
    host: &H,
    room_id: &RoomId,
) -> Result<Option<GameSession>, DomainError> {
    let Some(meta) = host.room_metadata(room_id).await? else {
        return Ok(None);
    };
    if !meta.contains_key(keys::PLAYER_ONE) {
        return Ok(None);
    }
    decode_session(&meta).map(Some)
}

/// Read a session that a prior committed hook must have created.
///
/// Absence here is a host/core protocol violation, not a user error; it is
/// logged distinctly from ordinary rejections.
pub async fn require<H: RoomHost>(host: &H, room_id: &RoomId) -> Result<GameSession, DomainError> {
    load(host, room_id).await?.ok_or_else(|| {
        error!(room_id = %room_id, "game session metadata missing for a committed room");
        DomainError::not_found(
            NotFoundKind::Session,
            format!("no game session metadata for room {room_id}"),
        )
    })
}

/// Persist the fields that change when the opponent is seated and the game
/// begins: slot two, the mark bijection, the turn marker, and the status.
pub async fn commit_start<H: RoomHost>(
    host: &H,
    room_id: &RoomId,
    session: &GameSession,
) -> Result<(), DomainError> {
    let marks = session.require_marks()?;
    let second = session.players.second.as_ref().ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            "starting session has no second player",
        )
    })?;

    host.set_room_metadata(room_id, keys::PLAYER_TWO, encode(keys::PLAYER_TWO, second)?)
        .await?;
    host.set_room_metadata(room_id, keys::MARK_X, encode(keys::MARK_X, &marks.x)?)
        .await?;
    host.set_room_metadata(room_id, keys::MARK_O, encode(keys::MARK_O, &marks.o)?)
        .await?;
    host.set_room_metadata(
        room_id,
        keys::NEXT_MARK,
        encode(keys::NEXT_MARK, &session.turn)?,
    )
    .await?;
    host.set_room_metadata(room_id, keys::STATUS, encode(keys::STATUS, &session.status)?)
        .await?;
    Ok(())
}

/// Persist the fields a committed move can change: always the board, plus
/// the flipped turn marker while the game continues, or the terminal status.
pub async fn commit_move<H: RoomHost>(
    host: &H,
    room_id: &RoomId,
    session: &GameSession,
) -> Result<(), DomainError> {
    host.set_room_metadata(room_id, keys::BOARD, encode(keys::BOARD, &session.board)?)
        .await?;

    match session.status {
        Status::InProgress => {
            host.set_room_metadata(
                room_id,
                keys::NEXT_MARK,
                encode(keys::NEXT_MARK, &session.turn)?,
            )
            .await?;
        }
        Status::Finished(_) => {
            host.set_room_metadata(room_id, keys::STATUS, encode(keys::STATUS, &session.status)?)
                .await?;
        }
        Status::Created => {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                "move committed on an unstarted session",
            ));
        }
    }
    Ok(())
}

fn decode_session(meta: &MetadataMap) -> Result<GameSession, DomainError> {
    let first: UserId = field(meta, keys::PLAYER_ONE)?;
    let second: Option<UserId> = optional_field(meta, keys::PLAYER_TWO)?;
    let turn: Mark = field(meta, keys::NEXT_MARK)?;
    let board: Board = field(meta, keys::BOARD)?;
    let status: Status = field(meta, keys::STATUS)?;

    let marks = match (
        optional_field::<UserId>(meta, keys::MARK_X)?,
        optional_field::<UserId>(meta, keys::MARK_O)?,
    ) {
        (Some(x), Some(o)) => Some(MarkAssignment { x, o }),
        (None, None) => None,
        _ => return Err(corrupt("one mark owner present without the other")),
    };

    Ok(GameSession {
        players: PlayerSlots { first, second },
        marks,
        turn,
        board,
        status,
    })
}

fn field<T: DeserializeOwned>(meta: &MetadataMap, key: &str) -> Result<T, DomainError> {
    let value = meta
        .get(key)
        .ok_or_else(|| corrupt(format!("missing session key {key}")))?;
    serde_json::from_value(value.clone()).map_err(|e| corrupt(format!("session key {key}: {e}")))
}

fn optional_field<T: DeserializeOwned>(
    meta: &MetadataMap,
    key: &str,
) -> Result<Option<T>, DomainError> {
    match meta.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| corrupt(format!("session key {key}: {e}"))),
    }
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("encode".into()),
            format!("session key {key}: {e}"),
        )
    })
}

fn corrupt(detail: impl Into<String>) -> DomainError {
    DomainError::infra(InfraErrorKind::DataCorruption, detail)
}
