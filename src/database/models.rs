use chrono::{DateTime, NaiveDateTime, Utc};

#[derive(Debug, Clone)]
pub struct MatchRow {
    pub id: i64,
    pub external_id: String,
    pub player1_id: String,
    pub player2_id: Option<String>,
    pub guest_name: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl MatchRow {
    /// Display name for the second seat, empty for solo play.
    pub fn opponent_label(&self) -> &str {
        self.player2_id
            .as_deref()
            .or(self.guest_name.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct FrameRow {
    pub id: i64,
    pub match_id: i64,
    pub number: u32,
    pub player1_points: u32,
    pub player2_points: u32,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct ShotRow {
    pub id: i64,
    pub frame_id: i64,
    pub seq: u32,
    pub player_id: String,
    pub points: u32,
    pub kind: String,
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone)]
pub struct FrameStatsRow {
    pub frame_id: i64,
    pub player1_highest_break: u32,
    pub player2_highest_break: u32,
    pub duration_ms: i64,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AttemptRow {
    pub id: i64,
    pub drill: String,
    pub score: u32,
    pub duration_secs: i64,
    /// JSON arrays of ball names, as the attempt recorded them.
    pub potted: String,
    pub missed: String,
    pub completed: bool,
    pub recorded_at: DateTime<Utc>,
}
