use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ball::Ball;

/// One recorded action within a frame.
///
/// Shots are append-only; an undo in the client simply truncates the log
/// and replays it, so nothing here is ever mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub player_id: String,
    /// For FOUL this is the penalty awarded to the opponent of the
    /// player who committed it.
    pub points: u32,
    pub kind: ShotKind,
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotKind {
    Potted,
    Foul,
    Miss,
    Safety,
    FreeBallPottedAsRed,
    FreeBallPottedAsColor,
    EndBreak,
}

impl ShotKind {
    /// Scoring shot: points go to the striker and extend the break.
    pub fn is_pot(self) -> bool {
        matches!(
            self,
            ShotKind::Potted | ShotKind::FreeBallPottedAsRed | ShotKind::FreeBallPottedAsColor
        )
    }

    /// Ends the current break. END_BREAK is the explicit annotation for
    /// breaks that end without a physical foul or miss.
    pub fn ends_break(self) -> bool {
        matches!(
            self,
            ShotKind::Foul | ShotKind::Miss | ShotKind::Safety | ShotKind::EndBreak
        )
    }

    /// Sends the opponent to the table for the next shot.
    pub fn changes_turn(self) -> bool {
        matches!(self, ShotKind::Foul | ShotKind::Miss | ShotKind::Safety)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShotKind::Potted => "POTTED",
            ShotKind::Foul => "FOUL",
            ShotKind::Miss => "MISS",
            ShotKind::Safety => "SAFETY",
            ShotKind::FreeBallPottedAsRed => "FREE_BALL_POTTED_AS_RED",
            ShotKind::FreeBallPottedAsColor => "FREE_BALL_POTTED_AS_COLOR",
            ShotKind::EndBreak => "END_BREAK",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "POTTED" => Some(ShotKind::Potted),
            "FOUL" => Some(ShotKind::Foul),
            "MISS" => Some(ShotKind::Miss),
            "SAFETY" => Some(ShotKind::Safety),
            "FREE_BALL_POTTED_AS_RED" => Some(ShotKind::FreeBallPottedAsRed),
            "FREE_BALL_POTTED_AS_COLOR" => Some(ShotKind::FreeBallPottedAsColor),
            "END_BREAK" => Some(ShotKind::EndBreak),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillKind {
    LineUp,
    RedBlack,
}

impl DrillKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DrillKind::LineUp => "line_up",
            DrillKind::RedBlack => "red_black",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "line_up" => Some(DrillKind::LineUp),
            "red_black" => Some(DrillKind::RedBlack),
            _ => None,
        }
    }
}

/// Summary of one completed or interrupted training run. Written once
/// when the run concludes; never a log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingAttempt {
    pub drill: DrillKind,
    pub score: u32,
    pub duration_secs: u64,
    pub potted: Vec<Ball>,
    pub missed: Vec<Ball>,
    pub completed: bool,
    pub recorded_at: DateTime<Utc>,
}

// --- Import document structures ---

/// Raw match document exported from the upstream store: the ownership
/// container for an ordered list of frames plus the two player ids (the
/// second may be replaced by a guest name).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDocument {
    pub id: String,
    pub player1_id: String,
    pub player2_id: Option<String>,
    pub guest_name: Option<String>,
    pub frames: Vec<FrameDocument>,
}

/// Raw frame document exported from the upstream store. The cached point
/// totals must equal the values recomputed by replaying the shot log
/// from empty state; `process` enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDocument {
    pub number: u32,
    /// Cached totals as the client last wrote them; absent for frames
    /// the client never finalized.
    pub player1_points: Option<u32>,
    pub player2_points: Option<u32>,
    #[serde(default)]
    pub shots: Vec<Shot>,
}
