//! Repository layer: the persisted metadata layout for a room's session.

pub mod sessions;
