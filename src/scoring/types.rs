use serde::Serialize;

use crate::domain::Shot;

/// Which seat is at the table. Tracking the seat rather than the raw
/// identifier keeps scoring well-defined when the second seat is a guest
/// placeholder with no registered id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// One row of a frame's shot-by-shot history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub shot: Shot,
    pub player1_score: u32,
    pub player2_score: u32,
    /// Size of the unbroken break as of this shot. For a break-ending
    /// shot this is the value before the reset takes effect.
    pub break_size: u32,
    /// Identifier of the player at the table when the shot occurred;
    /// empty for a guest seat.
    pub at_table: String,
}

/// Per-frame summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    pub player1_highest_break: u32,
    pub player2_highest_break: u32,
    pub duration_ms: i64,
}
