use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{error, info};

use crate::config::{settings, AppConfig};
use crate::database::{self, DbConn, DbPool};
use crate::domain::DrillKind;
use crate::training::{
    parse_events, DrillEvent, DrillOutcome, DrillSnapshot, LineUpDrill, RedBlackDrill,
};

/// Drives a drill state machine through a scripted event sequence,
/// persisting one attempt per terminal transition.
pub struct TrainingService {
    pool: DbPool,
    config: AppConfig,
}

#[derive(Default)]
struct DrillRunSummary {
    attempts: usize,
    persisted: usize,
    best_score: u32,
}

impl TrainingService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&settings::database_path())?;
        Ok(Self { pool, config })
    }

    pub fn run_drill(&self, drill: DrillKind, script: &Path) -> Result<()> {
        info!("=== Starting {} Drill ===\n", drill.as_str());

        let events = self.load_events(script)?;
        info!("  → {} event(s) in script\n", events.len());

        let mut conn = database::get_connection(&self.pool)?;
        database::setup::ensure_schema(&mut conn)?;

        let summary = match drill {
            DrillKind::LineUp => self.drive_lineup(&mut conn, &events),
            DrillKind::RedBlack => self.drive_red_black(&mut conn, &events),
        };

        info!(
            "=== Drill Complete ({} attempt(s), best score {}, {} persisted) ===",
            summary.attempts, summary.best_score, summary.persisted
        );
        if summary.persisted < summary.attempts {
            bail!(
                "{} training attempt(s) could not be persisted",
                summary.attempts - summary.persisted
            );
        }
        Ok(())
    }

    fn load_events(&self, script: &Path) -> Result<Vec<DrillEvent>> {
        let text = fs::read_to_string(script)
            .with_context(|| format!("Failed to read event script {}", script.display()))?;
        Ok(parse_events(&text))
    }

    fn drive_lineup(&self, conn: &mut DbConn, events: &[DrillEvent]) -> DrillRunSummary {
        let mut drill = LineUpDrill::new(&self.config.training);
        let mut summary = DrillRunSummary::default();

        for event in events {
            let outcome = match event {
                DrillEvent::Pot(ball) => drill.pot(*ball),
                DrillEvent::Miss => drill.miss(),
            };
            self.handle_outcome(conn, outcome, &mut summary);
        }

        log_open_run(&drill.snapshot());
        summary
    }

    fn drive_red_black(&self, conn: &mut DbConn, events: &[DrillEvent]) -> DrillRunSummary {
        let mut drill = RedBlackDrill::new();
        let mut summary = DrillRunSummary::default();

        for event in events {
            let outcome = match event {
                DrillEvent::Pot(ball) => drill.pot(*ball),
                DrillEvent::Miss => drill.miss(),
            };
            self.handle_outcome(conn, outcome, &mut summary);
        }

        info!("  → Best streak this session: {}", drill.best_streak());
        log_open_run(&drill.snapshot());
        summary
    }

    fn handle_outcome(&self, conn: &mut DbConn, outcome: DrillOutcome, summary: &mut DrillRunSummary) {
        let attempt = match outcome {
            DrillOutcome::Continue | DrillOutcome::Reset => return,
            DrillOutcome::Finished(attempt) | DrillOutcome::Failed(attempt) => attempt,
        };

        summary.attempts += 1;
        summary.best_score = summary.best_score.max(attempt.score);
        info!(
            "  → Attempt ended: score {} in {}s{}",
            attempt.score,
            attempt.duration_secs,
            if attempt.completed { " (completed)" } else { "" }
        );

        // Fire-and-forget: the drill has already reset or finished; a
        // failed write is reported, never rolled back into the run.
        match database::attempts::insert_attempt(conn, &attempt) {
            Ok(_) => summary.persisted += 1,
            Err(e) => error!("Failed to persist training attempt: {e:#}"),
        }
    }
}

fn log_open_run(snapshot: &DrillSnapshot) {
    if !snapshot.finished && snapshot.score > 0 {
        info!(
            "  → Run still open at end of script (score {}); nothing persisted for it",
            snapshot.score
        );
    }
}
