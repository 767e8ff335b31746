//! Frame timing and performance monitoring.

use std::time::{Duration, Instant};

/// Counts presented frames and reports the average rate at a fixed interval.
pub struct FrameTimer {
    interval: Option<Duration>,
    frames: u32,
    started: Instant,
}

impl FrameTimer {
    /// Create a timer that reports once per `interval`. A zero interval
    /// disables reporting entirely.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: (!interval.is_zero()).then_some(interval),
            frames: 0,
            started: Instant::now(),
        }
    }

    /// Record one presented frame.
    ///
    /// Returns the average frames per second when a full interval has
    /// elapsed, `None` otherwise. The counter restarts after each report.
    pub fn record_frame(&mut self) -> Option<f64> {
        let interval = self.interval?;
        self.frames += 1;

        let elapsed = self.started.elapsed();
        if elapsed < interval {
            return None;
        }

        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.frames = 0;
        self.started = Instant::now();
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_never_reports() {
        let mut timer = FrameTimer::new(Duration::ZERO);
        for _ in 0..100 {
            assert_eq!(timer.record_frame(), None);
        }
    }

    #[test]
    fn reports_after_interval_elapses() {
        let mut timer = FrameTimer::new(Duration::from_millis(10));
        assert_eq!(timer.record_frame(), None);

        std::thread::sleep(Duration::from_millis(15));
        let fps = timer.record_frame();
        assert!(fps.is_some());
        assert!(fps.unwrap() > 0.0);
    }

    #[test]
    fn counter_restarts_after_report() {
        let mut timer = FrameTimer::new(Duration::from_millis(10));
        timer.record_frame();
        std::thread::sleep(Duration::from_millis(15));
        timer.record_frame();

        // A fresh interval has just begun.
        assert_eq!(timer.record_frame(), None);
    }
}
