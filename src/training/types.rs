use std::time::Duration;

use log::warn;

use crate::domain::{Ball, TrainingAttempt};

/// Result of feeding one event to a drill.
#[derive(Debug, Clone)]
pub enum DrillOutcome {
    /// The run continues.
    Continue,
    /// The full sequence was completed; the attempt is final.
    Finished(TrainingAttempt),
    /// The run ended on a miss with at least one pot to save.
    Failed(TrainingAttempt),
    /// A miss with nothing recorded; state was reset silently.
    Reset,
}

/// Continuously-observable drill state for rendering.
#[derive(Debug, Clone)]
pub struct DrillSnapshot {
    pub score: u32,
    /// The ball(s) a correct next pot may target.
    pub expected: Vec<Ball>,
    pub elapsed: Duration,
    pub finished: bool,
}

/// One scripted drill event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillEvent {
    Pot(Ball),
    Miss,
}

/// Parse an event script: one ball name or "miss" per line. Blank lines
/// and `#` comments are ignored; unrecognized names are skipped with a
/// warning instead of failing the run.
pub fn parse_events(script: &str) -> Vec<DrillEvent> {
    let mut events = Vec::new();
    for (line_no, raw) in script.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("miss") {
            events.push(DrillEvent::Miss);
            continue;
        }
        match Ball::from_name(line) {
            Some(ball) => events.push(DrillEvent::Pot(ball)),
            None => warn!(
                "Skipping unrecognized event on line {}: {}",
                line_no + 1,
                line
            ),
        }
    }
    events
}
