use std::time::{Duration, Instant};

/// Elapsed-time counter for a drill run.
///
/// Starts on the first successful pot, freezes on completion or miss,
/// and plays no part in scoring.
#[derive(Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting if the watch is idle; running or frozen watches
    /// are left alone.
    pub fn start_if_idle(&mut self) {
        if self.started_at.is_none() && self.frozen.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Freeze the current value. A watch that never started stays at 0.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.frozen = Some(started_at.elapsed());
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.frozen
            .or_else(|| self.started_at.map(|started_at| started_at.elapsed()))
            .unwrap_or(Duration::ZERO)
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.frozen = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_watch_reads_zero() {
        let watch = Stopwatch::new();
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_freezes_and_reset_clears() {
        let mut watch = Stopwatch::new();
        watch.start_if_idle();
        watch.stop();
        let frozen = watch.elapsed();
        assert_eq!(watch.elapsed(), frozen);

        watch.reset();
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_stop_without_start_stays_zero() {
        let mut watch = Stopwatch::new();
        watch.stop();
        assert_eq!(watch.elapsed(), Duration::ZERO);
    }
}
