//! In-memory host fake for exercising hooks without a room server.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::domain::session::{RoomId, UserId};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::host::{MetadataMap, RoomHost};
use crate::services::session_flow::CreateRoomRequest;

/// Strict in-memory [`RoomHost`]: records every metadata write and outbound
/// message, and fails loudly on writes to rooms that were never committed.
#[derive(Default)]
pub struct MemoryRoomHost {
    rooms: Mutex<HashMap<RoomId, MetadataMap>>,
    outbox: Mutex<Vec<(RoomId, UserId, Value)>>,
}

impl MemoryRoomHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a prepared creation request the way the host would: the room
    /// comes into existence carrying the request's metadata.
    pub fn commit_create(&self, req: &CreateRoomRequest) {
        self.rooms
            .lock()
            .insert(req.room_id.clone(), req.metadata.clone());
    }

    /// Register a room with arbitrary metadata (for protocol-violation
    /// scenarios: a room the host committed without the create hook).
    pub fn insert_room(&self, room_id: RoomId, meta: MetadataMap) {
        self.rooms.lock().insert(room_id, meta);
    }

    pub fn metadata(&self, room_id: &RoomId) -> Option<MetadataMap> {
        self.rooms.lock().get(room_id).cloned()
    }

    /// All payloads delivered to one user, in send order.
    pub fn messages_for(&self, user_id: &UserId) -> Vec<Value> {
        self.outbox
            .lock()
            .iter()
            .filter(|(_, user, _)| user == user_id)
            .map(|(_, _, payload)| payload.clone())
            .collect()
    }

    pub fn clear_outbox(&self) {
        self.outbox.lock().clear();
    }
}

#[async_trait]
impl RoomHost for MemoryRoomHost {
    async fn room_metadata(&self, room_id: &RoomId) -> Result<Option<MetadataMap>, DomainError> {
        Ok(self.rooms.lock().get(room_id).cloned())
    }

    async fn set_room_metadata(
        &self,
        room_id: &RoomId,
        key: &str,
        value: Value,
    ) -> Result<(), DomainError> {
        let mut rooms = self.rooms.lock();
        match rooms.get_mut(room_id) {
            Some(meta) => {
                meta.insert(key.to_string(), value);
                Ok(())
            }
            None => Err(DomainError::infra(
                InfraErrorKind::MetadataStore,
                format!("no such room {room_id}"),
            )),
        }
    }

    async fn send_to_member(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
        payload: Value,
    ) -> Result<(), DomainError> {
        self.outbox
            .lock()
            .push((room_id.clone(), user_id.clone(), payload));
        Ok(())
    }
}
