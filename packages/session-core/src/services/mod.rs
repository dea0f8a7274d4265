//! Service layer: bridges the pure game domain with the host's room
//! lifecycle hooks.

pub mod session_flow;
