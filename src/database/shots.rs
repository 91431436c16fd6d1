use anyhow::{anyhow, Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::ShotRow;
use crate::domain::{Shot, ShotKind};

pub fn insert_shot(conn: &mut DbConn, frame_id: i64, seq: u32, shot: &Shot) -> Result<()> {
    let sql = "INSERT INTO shots (frame_id, seq, player_id, points, kind, timestamp_ms) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            frame_id,
            seq,
            shot.player_id,
            shot.points,
            shot.kind.as_str(),
            shot.timestamp_ms
        ],
    )
    .context("Failed to insert shot")
    .map(|_| ())
}

/// Load a frame's shot log in append order.
pub fn list_by_frame(conn: &mut DbConn, frame_id: i64) -> Result<Vec<Shot>> {
    let sql = "SELECT id, frame_id, seq, player_id, points, kind, timestamp_ms FROM shots WHERE frame_id = ?1 ORDER BY seq";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![frame_id], parse_shot_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.into_iter().map(row_to_shot).collect()
}

fn parse_shot_row(row: &rusqlite::Row) -> rusqlite::Result<ShotRow> {
    Ok(ShotRow {
        id: row.get(0)?,
        frame_id: row.get(1)?,
        seq: row.get(2)?,
        player_id: row.get(3)?,
        points: row.get(4)?,
        kind: row.get(5)?,
        timestamp_ms: row.get(6)?,
    })
}

fn row_to_shot(row: ShotRow) -> Result<Shot> {
    let kind = ShotKind::parse(&row.kind)
        .ok_or_else(|| anyhow!("Unrecognized shot kind in shot {}: {}", row.id, row.kind))?;

    Ok(Shot {
        player_id: row.player_id,
        points: row.points,
        kind,
        timestamp_ms: row.timestamp_ms,
    })
}
