use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::MatchRow;

/// Insert a match or return the existing row for its external id.
pub fn upsert_match(
    conn: &mut DbConn,
    external_id: &str,
    player1_id: &str,
    player2_id: Option<&str>,
    guest_name: Option<&str>,
) -> Result<MatchRow> {
    if let Some(existing) = find_by_external_id(conn, external_id)? {
        return Ok(existing);
    }

    insert_new_match(conn, external_id, player1_id, player2_id, guest_name)
}

fn find_by_external_id(conn: &mut DbConn, external_id: &str) -> Result<Option<MatchRow>> {
    let sql = "SELECT id, external_id, player1_id, player2_id, guest_name, created_at FROM matches WHERE external_id = ?1";

    conn.query_row(sql, params![external_id], parse_match_row)
        .optional()
        .context("Failed to query match by external id")
}

fn insert_new_match(
    conn: &mut DbConn,
    external_id: &str,
    player1_id: &str,
    player2_id: Option<&str>,
    guest_name: Option<&str>,
) -> Result<MatchRow> {
    let sql = "INSERT INTO matches (external_id, player1_id, player2_id, guest_name) VALUES (?1, ?2, ?3, ?4) RETURNING id, external_id, player1_id, player2_id, guest_name, created_at";

    conn.query_row(
        sql,
        params![external_id, player1_id, player2_id, guest_name],
        parse_match_row,
    )
    .context("Failed to insert new match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRow> {
    Ok(MatchRow {
        id: row.get(0)?,
        external_id: row.get(1)?,
        player1_id: row.get(2)?,
        player2_id: row.get(3)?,
        guest_name: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<MatchRow>> {
    let sql = "SELECT id, external_id, player1_id, player2_id, guest_name, created_at FROM matches WHERE id = ?1";

    conn.query_row(sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchRow>> {
    let sql = "SELECT id, external_id, player1_id, player2_id, guest_name, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
