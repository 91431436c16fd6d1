use anyhow::Result;
use log::{info, warn};

use crate::config::settings;
use crate::database::{self, DbConn, DbPool, FrameRow};
use crate::scoring;

/// Replays every stored frame and derives its statistics.
pub struct ProcessingService {
    pool: DbPool,
}

impl ProcessingService {
    pub fn new() -> Result<Self> {
        let pool = database::create_pool(&settings::database_path())?;
        Ok(Self { pool })
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Starting Frame Processing ===\n");

        let mut conn = database::get_connection(&self.pool)?;
        let frames = database::frames::list_all(&mut conn)?;
        info!("  → Loaded {} frame(s)\n", frames.len());

        let mut corrected = 0usize;
        for frame in &frames {
            if self.process_frame(&mut conn, frame)? {
                corrected += 1;
            }
        }

        if corrected > 0 {
            warn!("Corrected cached totals on {corrected} frame(s)");
        }
        info!("=== Processing Complete ({} frames) ===", frames.len());
        Ok(())
    }

    /// Replay one frame, correct its cached totals if they drifted from
    /// the log, and store its derived statistics. Returns whether a
    /// correction was needed.
    fn process_frame(&self, conn: &mut DbConn, frame: &FrameRow) -> Result<bool> {
        let shots = database::shots::list_by_frame(conn, frame.id)?;

        let (player1_points, player2_points) = scoring::frame_totals(&shots);
        let mismatch =
            player1_points != frame.player1_points || player2_points != frame.player2_points;
        if mismatch {
            warn!(
                "Frame {} cached totals {}–{} disagree with replay {}–{}; correcting",
                frame.id,
                frame.player1_points,
                frame.player2_points,
                player1_points,
                player2_points
            );
            database::frames::update_points(conn, frame.id, player1_points, player2_points)?;
        }

        let stats = scoring::aggregate_frame(&shots);
        database::frame_stats::upsert_stats(conn, frame.id, &stats)?;

        Ok(mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection;
    use crate::domain::{Shot, ShotKind};

    fn shot(player_id: &str, points: u32, kind: ShotKind, timestamp_ms: i64) -> Shot {
        Shot {
            player_id: player_id.to_string(),
            points,
            kind,
            timestamp_ms,
        }
    }

    #[test]
    fn test_process_frame_corrects_totals_and_stores_stats() {
        let pool = connection::create_test_pool();
        let service = ProcessingService { pool };
        let mut conn = service.pool.get().unwrap();
        database::setup::reset_database(&mut conn).unwrap();

        let match_row =
            database::matches::upsert_match(&mut conn, "m-1", "alice", Some("bob"), None).unwrap();
        // Cached totals are deliberately wrong.
        let frame = database::frames::insert_frame(&mut conn, match_row.id, 1, 99, 99).unwrap();

        let shots = vec![
            shot("alice", 5, ShotKind::Potted, 0),
            shot("alice", 4, ShotKind::Foul, 30_000),
            shot("bob", 6, ShotKind::Potted, 60_000),
        ];
        for (seq, s) in shots.iter().enumerate() {
            database::shots::insert_shot(&mut conn, frame.id, seq as u32, s).unwrap();
        }

        let corrected = service.process_frame(&mut conn, &frame).unwrap();
        assert!(corrected);

        let frames = database::frames::list_by_match(&mut conn, match_row.id).unwrap();
        assert_eq!(frames[0].player1_points, 5);
        assert_eq!(frames[0].player2_points, 10);

        let stats = database::frame_stats::get_for_frame(&mut conn, frame.id)
            .unwrap()
            .unwrap();
        assert_eq!(stats.player1_highest_break, 5);
        assert_eq!(stats.player2_highest_break, 6);
        assert_eq!(stats.duration_ms, 60_000);
    }

    #[test]
    fn test_process_frame_leaves_consistent_totals_alone() {
        let pool = connection::create_test_pool();
        let service = ProcessingService { pool };
        let mut conn = service.pool.get().unwrap();
        database::setup::reset_database(&mut conn).unwrap();

        let match_row =
            database::matches::upsert_match(&mut conn, "m-2", "alice", None, None).unwrap();
        let frame = database::frames::insert_frame(&mut conn, match_row.id, 1, 0, 0).unwrap();

        let corrected = service.process_frame(&mut conn, &frame).unwrap();
        assert!(!corrected);

        let stats = database::frame_stats::get_for_frame(&mut conn, frame.id)
            .unwrap()
            .unwrap();
        assert_eq!(stats.duration_ms, 0);
    }
}
