/// Frame-to-frame delta tracker.
///
/// The first call after construction yields no delta; deltas start with the
/// second frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the previous call, or `None` on the first.
    ///
    /// The given timestamp is always stored for the next frame.
    pub fn advance(&mut self, timestamp_ms: f64) -> Option<f64> {
        let delta = self.last_timestamp_ms.map(|prev| timestamp_ms - prev);
        self.last_timestamp_ms = Some(timestamp_ms);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_yields_none() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), None);
    }

    #[test]
    fn second_advance_yields_delta() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(1016.5), Some(16.5));
    }

    #[test]
    fn timestamp_is_stored_every_call() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        clock.advance(200.0);
        assert_eq!(clock.advance(250.0), Some(50.0));
    }
}
