//! Outbound notification payloads.
//!
//! Logical schema only; the host owns the actual wire protocol and delivers
//! these to individual room members.

use serde::{Deserialize, Serialize};

use crate::domain::board::Mark;

/// Private notifications sent to individual players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameMsg {
    /// Both seats are filled and the game has begun. Carries the recipient's
    /// own mark and the mark that opens.
    #[serde(rename_all = "camelCase")]
    GameStart { your_mark: Mark, first_mark: Mark },

    /// The recipient now holds the turn marker.
    YourTurn,

    Win,

    Lose,

    Draw,
}
