//! Serialization and deserialization for board and status types.
//!
//! The wire strings match the persisted metadata layout: cells are `"-"`,
//! `"X"`, `"O"`; the status is a single short string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::{Board, Cell, Mark};
use super::rules::GRID;
use super::session::{Outcome, Status};

// Mark serde
impl Serialize for Mark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            _ => Err(serde::de::Error::custom(format!("Invalid mark: {s}"))),
        }
    }
}

// Cell serde
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Cell::Empty => "-",
            Cell::Taken(mark) => mark.as_str(),
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "-" => Ok(Cell::Empty),
            "X" => Ok(Cell::Taken(Mark::X)),
            "O" => Ok(Cell::Taken(Mark::O)),
            _ => Err(serde::de::Error::custom(format!("Invalid cell: {s}"))),
        }
    }
}

// Board serde: a bare 3x3 array of cell strings, no wrapping object
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.cells.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells = <[[Cell; GRID]; GRID]>::deserialize(deserializer)?;
        Ok(Board::from_cells(cells))
    }
}

// Status serde
impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Status::Created => "created",
            Status::InProgress => "in-progress",
            Status::Finished(Outcome::Win(Mark::X)) => "won-x",
            Status::Finished(Outcome::Win(Mark::O)) => "won-o",
            Status::Finished(Outcome::Draw) => "draw",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "created" => Ok(Status::Created),
            "in-progress" => Ok(Status::InProgress),
            "won-x" => Ok(Status::Finished(Outcome::Win(Mark::X))),
            "won-o" => Ok(Status::Finished(Outcome::Win(Mark::O))),
            "draw" => Ok(Status::Finished(Outcome::Draw)),
            _ => Err(serde::de::Error::custom(format!("Invalid status: {s}"))),
        }
    }
}
