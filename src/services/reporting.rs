use anyhow::{anyhow, Result};
use colored::{ColoredString, Colorize};

use crate::config::settings;
use crate::database::{self, DbConn, DbPool, FrameRow, MatchRow};
use crate::domain::DrillKind;
use crate::scoring::{self, HistoryEntry};

/// Threshold above which a break is highlighted in the history table.
const NOTABLE_BREAK: u32 = 50;

/// Renders match histories and training bests to stdout.
pub struct ReportService {
    pool: DbPool,
}

impl ReportService {
    pub fn new() -> Result<Self> {
        let pool = database::create_pool(&settings::database_path())?;
        Ok(Self { pool })
    }

    pub fn show_match(&self, match_id: i64) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;

        let match_row = database::matches::find_by_id(&mut conn, match_id)?
            .ok_or_else(|| anyhow!("No match with id {match_id}"))?;
        print_match_header(&match_row);

        let frames = database::frames::list_by_match(&mut conn, match_id)?;
        if frames.is_empty() {
            println!("  (no frames recorded)");
            return Ok(());
        }

        for frame in &frames {
            self.show_frame(&mut conn, &match_row, frame)?;
        }
        Ok(())
    }

    fn show_frame(&self, conn: &mut DbConn, match_row: &MatchRow, frame: &FrameRow) -> Result<()> {
        let shots = database::shots::list_by_frame(conn, frame.id)?;
        let history = scoring::replay_frame(
            &shots,
            &match_row.player1_id,
            match_row.player2_id.as_deref(),
        );

        println!();
        println!(
            "{} {}   {} – {}",
            "Frame".bold(),
            frame.number,
            frame.player1_points,
            frame.player2_points
        );
        for (idx, entry) in history.iter().enumerate() {
            print_history_line(idx, entry, match_row);
        }

        if let Some(stats) = database::frame_stats::get_for_frame(conn, frame.id)? {
            println!(
                "  highest breaks: {} / {}   duration: {}s",
                stats.player1_highest_break,
                stats.player2_highest_break,
                stats.duration_ms / 1_000
            );
        }
        Ok(())
    }

    pub fn show_best(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::setup::ensure_schema(&mut conn)?;

        for drill in [DrillKind::LineUp, DrillKind::RedBlack] {
            match database::attempts::best_for_drill(&mut conn, drill)? {
                Some(row) => {
                    let attempt = database::attempts::row_to_attempt(&row)?;
                    let score = attempt.score.to_string().bold().green();
                    println!(
                        "{:>9}  best {}  in {}s  ({} potted{})",
                        drill.as_str(),
                        score,
                        attempt.duration_secs,
                        attempt.potted.len(),
                        if attempt.completed { ", completed" } else { "" }
                    );
                }
                None => println!("{:>9}  no attempts recorded", drill.as_str()),
            }
        }
        Ok(())
    }
}

fn print_match_header(match_row: &MatchRow) {
    let opponent = match_row.opponent_label();
    println!(
        "{} {}: {} vs {}",
        "Match".bold(),
        match_row.external_id,
        match_row.player1_id.as_str().cyan(),
        if opponent.is_empty() {
            "(solo)".dimmed()
        } else {
            opponent.yellow()
        }
    );
}

fn print_history_line(idx: usize, entry: &HistoryEntry, match_row: &MatchRow) {
    let striker = display_striker(entry, match_row);
    let break_display = display_break(entry.break_size);
    println!(
        "  {:>3}. {:<20} {:<26} {:>3}–{:<3}  break {}",
        idx + 1,
        striker,
        entry.shot.kind.as_str(),
        entry.player1_score,
        entry.player2_score,
        break_display
    );
}

fn display_striker(entry: &HistoryEntry, match_row: &MatchRow) -> ColoredString {
    if entry.at_table == match_row.player1_id {
        entry.at_table.as_str().cyan()
    } else if entry.at_table.is_empty() {
        // Guest seat: fall back to the display label.
        match_row.opponent_label().yellow()
    } else {
        entry.at_table.as_str().yellow()
    }
}

fn display_break(break_size: u32) -> ColoredString {
    let text = break_size.to_string();
    if break_size >= NOTABLE_BREAK {
        text.bold().green()
    } else {
        text.normal()
    }
}
