use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::FrameRow;

pub fn insert_frame(
    conn: &mut DbConn,
    match_id: i64,
    number: u32,
    player1_points: u32,
    player2_points: u32,
) -> Result<FrameRow> {
    let sql = "INSERT INTO frames (match_id, number, player1_points, player2_points) VALUES (?1, ?2, ?3, ?4) RETURNING id, match_id, number, player1_points, player2_points, created_at";

    conn.query_row(
        sql,
        params![match_id, number, player1_points, player2_points],
        parse_frame_row,
    )
    .context("Failed to insert frame")
}

fn parse_frame_row(row: &rusqlite::Row) -> rusqlite::Result<FrameRow> {
    Ok(FrameRow {
        id: row.get(0)?,
        match_id: row.get(1)?,
        number: row.get(2)?,
        player1_points: row.get(3)?,
        player2_points: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn list_by_match(conn: &mut DbConn, match_id: i64) -> Result<Vec<FrameRow>> {
    let sql = "SELECT id, match_id, number, player1_points, player2_points, created_at FROM frames WHERE match_id = ?1 ORDER BY number";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![match_id], parse_frame_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<FrameRow>> {
    let sql = "SELECT id, match_id, number, player1_points, player2_points, created_at FROM frames ORDER BY match_id, number";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_frame_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Overwrite the cached totals with recomputed values.
pub fn update_points(
    conn: &mut DbConn,
    frame_id: i64,
    player1_points: u32,
    player2_points: u32,
) -> Result<()> {
    let sql = "UPDATE frames SET player1_points = ?1, player2_points = ?2 WHERE id = ?3";

    conn.execute(sql, params![player1_points, player2_points, frame_id])
        .context("Failed to update frame points")
        .map(|_| ())
}
