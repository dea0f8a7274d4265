//! Session-logic core for two-player tic-tac-toe rooms.
//!
//! The hosting room server owns identity, membership, matchmaking, and
//! message transport. It drives this crate through the pre/post lifecycle
//! hooks on [`SessionFlowService`] and implements the [`RoomHost`] contract
//! for room metadata and member messaging. All game state lives in the
//! host's per-room metadata; the core itself is stateless apart from the
//! mark-assignment RNG.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod errors;
pub mod host;
pub mod protocol;
pub mod repos;
pub mod services;

#[cfg(test)]
pub mod test_support;

// Re-exports for public API
pub use domain::board::{Board, Cell, Mark, MoveResolution};
pub use domain::session::{GameSession, Outcome, RoomId, Status, UserId};
pub use error::HookError;
pub use errors::domain::DomainError;
pub use errors::error_code::ErrorCode;
pub use host::{MetadataMap, RoomHost};
pub use protocol::GameMsg;
pub use services::session_flow::{CreateRoomRequest, SessionFlowService};
