use anyhow::{anyhow, Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::AttemptRow;
use crate::domain::{Ball, DrillKind, TrainingAttempt};

pub fn insert_attempt(conn: &mut DbConn, attempt: &TrainingAttempt) -> Result<AttemptRow> {
    let potted = serde_json::to_string(&attempt.potted)
        .context("Failed to serialize potted ball list")?;
    let missed = serde_json::to_string(&attempt.missed)
        .context("Failed to serialize missed ball list")?;

    let sql = "INSERT INTO training_attempts (drill, score, duration_secs, potted, missed, completed, recorded_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id, drill, score, duration_secs, potted, missed, completed, recorded_at";

    conn.query_row(
        sql,
        params![
            attempt.drill.as_str(),
            attempt.score,
            attempt.duration_secs as i64,
            potted,
            missed,
            attempt.completed,
            attempt.recorded_at
        ],
        parse_attempt_row,
    )
    .context("Failed to insert training attempt")
}

fn parse_attempt_row(row: &rusqlite::Row) -> rusqlite::Result<AttemptRow> {
    Ok(AttemptRow {
        id: row.get(0)?,
        drill: row.get(1)?,
        score: row.get(2)?,
        duration_secs: row.get(3)?,
        potted: row.get(4)?,
        missed: row.get(5)?,
        completed: row.get(6)?,
        recorded_at: row.get(7)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<AttemptRow>> {
    let sql = "SELECT id, drill, score, duration_secs, potted, missed, completed, recorded_at FROM training_attempts ORDER BY recorded_at";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_attempt_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// The highest-scoring attempt for a drill; ties go to the faster run.
pub fn best_for_drill(conn: &mut DbConn, drill: DrillKind) -> Result<Option<AttemptRow>> {
    let sql = "SELECT id, drill, score, duration_secs, potted, missed, completed, recorded_at FROM training_attempts WHERE drill = ?1 ORDER BY score DESC, duration_secs ASC LIMIT 1";

    conn.query_row(sql, params![drill.as_str()], parse_attempt_row)
        .optional()
        .context("Failed to query best attempt for drill")
}

/// Rehydrate a stored row into the domain attempt.
pub fn row_to_attempt(row: &AttemptRow) -> Result<TrainingAttempt> {
    let drill = DrillKind::parse(&row.drill)
        .ok_or_else(|| anyhow!("Unrecognized drill in attempt {}: {}", row.id, row.drill))?;
    let potted: Vec<Ball> = serde_json::from_str(&row.potted)
        .context("Failed to parse potted ball list")?;
    let missed: Vec<Ball> = serde_json::from_str(&row.missed)
        .context("Failed to parse missed ball list")?;

    Ok(TrainingAttempt {
        drill,
        score: row.score,
        duration_secs: row.duration_secs.max(0) as u64,
        potted,
        missed,
        completed: row.completed,
        recorded_at: row.recorded_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection, setup};
    use chrono::Utc;

    fn attempt(drill: DrillKind, score: u32, duration_secs: u64) -> TrainingAttempt {
        TrainingAttempt {
            drill,
            score,
            duration_secs,
            potted: vec![Ball::Red, Ball::Black],
            missed: vec![Ball::Pink],
            completed: false,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_attempt_roundtrip() {
        let pool = connection::create_test_pool();
        let mut conn = pool.get().unwrap();
        setup::reset_database(&mut conn).unwrap();

        let saved = insert_attempt(&mut conn, &attempt(DrillKind::LineUp, 34, 120)).unwrap();
        assert_eq!(saved.drill, "line_up");

        let restored = row_to_attempt(&saved).unwrap();
        assert_eq!(restored.drill, DrillKind::LineUp);
        assert_eq!(restored.score, 34);
        assert_eq!(restored.duration_secs, 120);
        assert_eq!(restored.potted, vec![Ball::Red, Ball::Black]);
        assert_eq!(restored.missed, vec![Ball::Pink]);
    }

    #[test]
    fn test_best_for_drill_prefers_score_then_speed() {
        let pool = connection::create_test_pool();
        let mut conn = pool.get().unwrap();
        setup::reset_database(&mut conn).unwrap();

        insert_attempt(&mut conn, &attempt(DrillKind::RedBlack, 4, 90)).unwrap();
        insert_attempt(&mut conn, &attempt(DrillKind::RedBlack, 9, 200)).unwrap();
        insert_attempt(&mut conn, &attempt(DrillKind::RedBlack, 9, 150)).unwrap();
        insert_attempt(&mut conn, &attempt(DrillKind::LineUp, 50, 300)).unwrap();

        let best = best_for_drill(&mut conn, DrillKind::RedBlack)
            .unwrap()
            .unwrap();
        assert_eq!(best.score, 9);
        assert_eq!(best.duration_secs, 150);

        assert!(best_for_drill(&mut conn, DrillKind::LineUp)
            .unwrap()
            .is_some());
    }
}
