/// Converts the host's frame-scaled delta into seconds.
///
/// Hosts tick with a delta of 1.0 per frame at the reference rate, 0.5 when
/// running twice as fast, 2.0 when dropping every other frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame_rate: f32,
    /// Total seconds observed since creation.
    elapsed: f32,
}

impl FrameClock {
    pub fn new(frame_rate: f32) -> Self {
        Self {
            frame_rate,
            elapsed: 0.0,
        }
    }

    /// Seconds covered by a frame-scaled delta.
    pub fn seconds(&self, delta: f32) -> f32 {
        delta / self.frame_rate
    }

    /// Advance the clock. Returns the seconds this delta covered.
    pub fn advance(&mut self, delta: f32) -> f32 {
        let secs = self.seconds(delta.max(0.0));
        self.elapsed += secs;
        secs
    }

    /// Total seconds advanced so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The reference frame rate.
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_at_sixty() {
        let clock = FrameClock::new(60.0);
        assert!((clock.seconds(1.0) - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn advance_accumulates() {
        let mut clock = FrameClock::new(60.0);
        for _ in 0..60 {
            clock.advance(1.0);
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-4, "elapsed was {}", clock.elapsed());
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut clock = FrameClock::new(60.0);
        assert_eq!(clock.advance(-3.0), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
