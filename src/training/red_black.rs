use chrono::Utc;

use crate::domain::{Ball, DrillKind, TrainingAttempt};

use super::stopwatch::Stopwatch;
use super::types::{DrillOutcome, DrillSnapshot};

/// Red-Black drill: strictly alternating reds and blacks. A wrong-color
/// pot counts as a miss; the streak is the score.
pub struct RedBlackDrill {
    expected: Ball,
    streak: u32,
    best_streak: u32,
    potted: Vec<Ball>,
    missed: Vec<Ball>,
    stopwatch: Stopwatch,
}

impl RedBlackDrill {
    pub fn new() -> Self {
        Self {
            expected: Ball::Red,
            streak: 0,
            best_streak: 0,
            potted: Vec::new(),
            missed: Vec::new(),
            stopwatch: Stopwatch::new(),
        }
    }

    pub fn pot(&mut self, ball: Ball) -> DrillOutcome {
        if ball != self.expected {
            return self.end_run(Some(ball));
        }
        self.stopwatch.start_if_idle();
        self.streak += 1;
        self.potted.push(ball);
        self.expected = if ball == Ball::Red {
            Ball::Black
        } else {
            Ball::Red
        };
        DrillOutcome::Continue
    }

    pub fn miss(&mut self) -> DrillOutcome {
        self.end_run(None)
    }

    pub fn snapshot(&self) -> DrillSnapshot {
        DrillSnapshot {
            score: self.streak,
            expected: vec![self.expected],
            elapsed: self.stopwatch.elapsed(),
            finished: false,
        }
    }

    /// Best streak seen by this instance across runs.
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    fn end_run(&mut self, wrong_pot: Option<Ball>) -> DrillOutcome {
        if let Some(ball) = wrong_pot {
            self.missed.push(ball);
        }
        self.stopwatch.stop();
        if self.streak == 0 {
            self.reset();
            return DrillOutcome::Reset;
        }
        self.best_streak = self.best_streak.max(self.streak);
        let attempt = self.build_attempt();
        self.reset();
        DrillOutcome::Failed(attempt)
    }

    fn reset(&mut self) {
        self.expected = Ball::Red;
        self.streak = 0;
        self.potted.clear();
        self.missed.clear();
        self.stopwatch.reset();
    }

    fn build_attempt(&self) -> TrainingAttempt {
        TrainingAttempt {
            drill: DrillKind::RedBlack,
            score: self.streak,
            duration_secs: self.stopwatch.elapsed().as_secs(),
            potted: self.potted.clone(),
            missed: self.missed.clone(),
            completed: false,
            recorded_at: Utc::now(),
        }
    }
}

impl Default for RedBlackDrill {
    fn default() -> Self {
        Self::new()
    }
}
