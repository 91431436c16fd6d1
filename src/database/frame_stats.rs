use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::FrameStatsRow;
use crate::scoring::FrameStats;

/// Write (or overwrite) the derived statistics for one frame.
pub fn upsert_stats(conn: &mut DbConn, frame_id: i64, stats: &FrameStats) -> Result<()> {
    let sql = "INSERT INTO frame_stats (frame_id, player1_highest_break, player2_highest_break, duration_ms, calculated_at) VALUES (?1, ?2, ?3, ?4, ?5) ON CONFLICT(frame_id) DO UPDATE SET player1_highest_break = ?2, player2_highest_break = ?3, duration_ms = ?4, calculated_at = ?5";

    conn.execute(
        sql,
        params![
            frame_id,
            stats.player1_highest_break,
            stats.player2_highest_break,
            stats.duration_ms,
            Utc::now()
        ],
    )
    .context("Failed to upsert frame stats")
    .map(|_| ())
}

pub fn get_for_frame(conn: &mut DbConn, frame_id: i64) -> Result<Option<FrameStatsRow>> {
    let sql = "SELECT frame_id, player1_highest_break, player2_highest_break, duration_ms, calculated_at FROM frame_stats WHERE frame_id = ?1";

    conn.query_row(sql, params![frame_id], parse_stats_row)
        .optional()
        .context("Failed to query frame stats")
}

fn parse_stats_row(row: &rusqlite::Row) -> rusqlite::Result<FrameStatsRow> {
    Ok(FrameStatsRow {
        frame_id: row.get(0)?,
        player1_highest_break: row.get(1)?,
        player2_highest_break: row.get(2)?,
        duration_ms: row.get(3)?,
        calculated_at: row.get(4)?,
    })
}
