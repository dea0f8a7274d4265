use crate::domain::board::Mark;
use crate::errors::domain::{DomainError, ValidationKind};

/// Board side length.
pub const GRID: usize = 3;
/// Total cell count; flat move indices are 0..CELLS.
pub const CELLS: usize = GRID * GRID;
/// The mark that opens every game, regardless of who holds it.
pub const FIRST_MARK: Mark = Mark::X;

/// Decode the flat single-integer move payload into (row, col).
///
/// The submission wire format is one integer in 0..=8, row-major.
pub fn decode_cell(index: u8) -> Result<(usize, usize), DomainError> {
    let idx = usize::from(index);
    if idx >= CELLS {
        return Err(DomainError::validation(
            ValidationKind::CellOutOfRange,
            format!("cell index {index} is outside 0..{CELLS}"),
        ));
    }
    Ok((idx / GRID, idx % GRID))
}
