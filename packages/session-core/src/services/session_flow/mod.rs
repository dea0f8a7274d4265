//! Session flow orchestration - reacts to the host's room lifecycle events.
//!
//! The host calls a pre hook before committing an operation and the matching
//! post hook after. Pre hooks veto the pending operation by returning
//! [`HookError::Rejected`](crate::error::HookError); post hooks run only for
//! events the host actually committed and perform the state mutation and
//! notifications.

mod lifecycle;
mod player_actions;


use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::session::{RoomId, UserId};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::host::{MetadataMap, RoomHost};
use crate::protocol::GameMsg;

/// A room-creation request, mutable by the pre-create hook before the host
/// commits it.
#[derive(Debug, Clone)]
pub struct CreateRoomRequest {
    pub room_id: RoomId,
    /// The creating user; takes player slot one.
    pub user_id: UserId,
    /// Occupancy cap the host will enforce; the pre-create hook pins it.
    pub max_members: Option<u32>,
    /// Metadata the host will attach to the room on commit.
    pub metadata: MetadataMap,
}

impl CreateRoomRequest {
    pub fn new(room_id: RoomId, user_id: UserId) -> Self {
        Self {
            room_id,
            user_id,
            max_members: None,
            metadata: MetadataMap::new(),
        }
    }
}

/// Session flow service. Stateless apart from the mark-assignment RNG; all
/// game state lives in the host's per-room metadata.
pub struct SessionFlowService {
    rng: Mutex<ChaCha8Rng>,
}

impl SessionFlowService {
    /// Service with an OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_os_rng()),
        }
    }

    /// Service with a fixed RNG seed, for deterministic mark assignment.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for SessionFlowService {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize and deliver one notification payload.
async fn send<H: RoomHost>(
    host: &H,
    room_id: &RoomId,
    user_id: &UserId,
    msg: &GameMsg,
) -> Result<(), DomainError> {
    let payload = serde_json::to_value(msg).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("encode".into()),
            format!("notification payload: {e}"),
        )
    })?;
    host.send_to_member(room_id, user_id, payload).await
}
