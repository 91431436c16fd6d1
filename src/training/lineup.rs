use chrono::Utc;

use crate::config::TrainingSettings;
use crate::domain::{Ball, DrillKind, TrainingAttempt, CLEARANCE_ORDER};

use super::stopwatch::Stopwatch;
use super::types::{DrillOutcome, DrillSnapshot};

/// Where a Line-Up run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpPhase {
    PottingRed,
    PottingColor,
    FinalSequence(Ball),
    Finished,
}

/// Line-Up drill: reds alternated with colors while reds remain, then
/// the clearance in fixed order. Any wrong pot or miss ends the run.
pub struct LineUpDrill {
    phase: LineUpPhase,
    reds_remaining: u32,
    initial_reds: u32,
    score: u32,
    potted: Vec<Ball>,
    missed: Vec<Ball>,
    stopwatch: Stopwatch,
}

impl LineUpDrill {
    pub fn new(settings: &TrainingSettings) -> Self {
        Self {
            phase: LineUpPhase::PottingRed,
            reds_remaining: settings.lineup_reds,
            initial_reds: settings.lineup_reds,
            score: 0,
            potted: Vec::new(),
            missed: Vec::new(),
            stopwatch: Stopwatch::new(),
        }
    }

    pub fn pot(&mut self, ball: Ball) -> DrillOutcome {
        match self.phase {
            LineUpPhase::PottingRed if ball == Ball::Red => {
                self.apply_pot(ball);
                self.reds_remaining -= 1;
                self.phase = LineUpPhase::PottingColor;
                DrillOutcome::Continue
            }
            LineUpPhase::PottingColor if ball != Ball::Red => {
                self.apply_pot(ball);
                self.phase = if self.reds_remaining > 0 {
                    LineUpPhase::PottingRed
                } else {
                    LineUpPhase::FinalSequence(Ball::Yellow)
                };
                DrillOutcome::Continue
            }
            LineUpPhase::FinalSequence(expected) if ball == expected => {
                self.apply_pot(ball);
                match expected.next_in_clearance() {
                    Some(next) => {
                        self.phase = LineUpPhase::FinalSequence(next);
                        DrillOutcome::Continue
                    }
                    None => {
                        // Black down: the run is complete.
                        self.phase = LineUpPhase::Finished;
                        self.stopwatch.stop();
                        DrillOutcome::Finished(self.build_attempt(true))
                    }
                }
            }
            // Events after completion are ignored until reset.
            LineUpPhase::Finished => DrillOutcome::Continue,
            _ => self.fail(Some(ball)),
        }
    }

    pub fn miss(&mut self) -> DrillOutcome {
        if self.phase == LineUpPhase::Finished {
            return DrillOutcome::Continue;
        }
        self.fail(None)
    }

    pub fn snapshot(&self) -> DrillSnapshot {
        let expected = match self.phase {
            LineUpPhase::PottingRed => vec![Ball::Red],
            LineUpPhase::PottingColor => CLEARANCE_ORDER.to_vec(),
            LineUpPhase::FinalSequence(ball) => vec![ball],
            LineUpPhase::Finished => Vec::new(),
        };
        DrillSnapshot {
            score: self.score,
            expected,
            elapsed: self.stopwatch.elapsed(),
            finished: self.phase == LineUpPhase::Finished,
        }
    }

    pub fn phase(&self) -> LineUpPhase {
        self.phase
    }

    pub fn reds_remaining(&self) -> u32 {
        self.reds_remaining
    }

    pub fn reset(&mut self) {
        self.phase = LineUpPhase::PottingRed;
        self.reds_remaining = self.initial_reds;
        self.score = 0;
        self.potted.clear();
        self.missed.clear();
        self.stopwatch.reset();
    }

    fn apply_pot(&mut self, ball: Ball) {
        self.stopwatch.start_if_idle();
        self.score += ball.value();
        self.potted.push(ball);
    }

    fn fail(&mut self, wrong_pot: Option<Ball>) -> DrillOutcome {
        if let Some(ball) = wrong_pot {
            self.missed.push(ball);
        }
        self.stopwatch.stop();
        if self.potted.is_empty() {
            // Nothing accumulated, nothing to save.
            self.reset();
            return DrillOutcome::Reset;
        }
        let attempt = self.build_attempt(false);
        self.reset();
        DrillOutcome::Failed(attempt)
    }

    fn build_attempt(&self, completed: bool) -> TrainingAttempt {
        TrainingAttempt {
            drill: DrillKind::LineUp,
            score: self.score,
            duration_secs: self.stopwatch.elapsed().as_secs(),
            potted: self.potted.clone(),
            missed: self.missed.clone(),
            completed,
            recorded_at: Utc::now(),
        }
    }
}
