//! The contract this core consumes from the hosting room server.
//!
//! The host owns identity, membership, storage, and transport; the core sees
//! it only through this trait. The host is expected to serialize events per
//! room (at most one in-flight read-modify-persist cycle per room); the core
//! performs no locking of its own. Calls are treated as synchronous
//! request/response operations: failure is returned, never retried here.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::session::{RoomId, UserId};
use crate::errors::domain::DomainError;

/// Room metadata as stored by the host: schemaless string-to-JSON pairs.
/// The map may carry host-owned keys alongside the session fields.
pub type MetadataMap = Map<String, Value>;

/// Host-provided room services.
///
/// Implementations report operational failures as [`DomainError::Infra`]
/// with the matching kind (`MetadataStore` or `Messaging`).
#[async_trait]
pub trait RoomHost: Send + Sync {
    /// Full metadata map for a room, or `None` if the host has no room
    /// under this id.
    async fn room_metadata(&self, room_id: &RoomId) -> Result<Option<MetadataMap>, DomainError>;

    /// Write a single metadata field on an existing room.
    async fn set_room_metadata(
        &self,
        room_id: &RoomId,
        key: &str,
        value: Value,
    ) -> Result<(), DomainError>;

    /// Point-to-point delivery of a payload to one room member.
    async fn send_to_member(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
        payload: Value,
    ) -> Result<(), DomainError>;
}
