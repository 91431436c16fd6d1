use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use super::connection::DbConn;

/// Create the schema when the database is brand new; leave existing data
/// alone otherwise.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    if schema_exists(conn)? {
        return Ok(());
    }
    reset_database(conn)
}

fn schema_exists(conn: &mut DbConn) -> Result<bool> {
    let sql = "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'matches'";
    let found: Option<String> = conn
        .query_row(sql, [], |row| row.get(0))
        .optional()
        .context("Failed to inspect database schema")?;
    Ok(found.is_some())
}

/// Drop and recreate every table from the bundled schema.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    for (idx, statement) in split_sql_statements(schema_sql).iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::info!("Database schema reset");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &mut DbConn, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
