//! Domain layer: pure game logic types and helpers.

pub mod board;
mod board_serde;
pub mod rules;
pub mod session;

#[cfg(test)]
mod tests_props_board;

// Re-exports for ergonomics
pub use board::{Board, Cell, Mark, MoveResolution};
pub use rules::{decode_cell, CELLS, FIRST_MARK, GRID};
pub use session::{GameSession, MarkAssignment, Outcome, PlayerSlots, Status};
