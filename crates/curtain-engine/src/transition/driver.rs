// transition/driver.rs
//
// Two-phase progress driver: a manual delta accumulator with one easing curve
// per phase. Progress runs 0 → 1 while covering and 1 → 2 while revealing.
//
// Usage:
//   let mut driver = PhaseDriver::new(24.0, Easing::QuadIn, Easing::QuadOut);
//   driver.start();
//   match driver.advance(dt) { DriverStep::Midpoint => swap(), _ => {} }

use crate::extensions::easing::Easing;

/// Where the driver is in its two-phase cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Progress in [0, 1).
    Covering,
    /// Progress in [1, 2).
    Revealing,
}

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStep {
    /// Not running; nothing changed.
    Idle,
    /// Progress moved within a phase.
    Advanced,
    /// Progress reached exactly 1.0. Reported once per `start`.
    Midpoint,
    /// Progress reached 2.0 and the driver went idle.
    Completed,
}

#[derive(Debug, Clone)]
pub struct PhaseDriver {
    phase: TransitionPhase,
    /// Frame-scaled time spent in the current phase.
    elapsed: f32,
    /// Frame-scaled length of each phase.
    duration: f32,
    cover_easing: Easing,
    reveal_easing: Easing,
    progress: f32,
    midpoint_latched: bool,
}

impl PhaseDriver {
    pub fn new(duration: f32, cover_easing: Easing, reveal_easing: Easing) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            elapsed: 0.0,
            duration: duration.max(f32::EPSILON),
            cover_easing,
            reveal_easing,
            progress: 0.0,
            midpoint_latched: false,
        }
    }

    /// Begin a fresh cycle from progress 0, discarding any previous state.
    pub fn start(&mut self) {
        self.cancel();
        self.phase = TransitionPhase::Covering;
    }

    /// Stop immediately. No midpoint or completion is reported for the cancelled cycle.
    pub fn cancel(&mut self) {
        self.phase = TransitionPhase::Idle;
        self.elapsed = 0.0;
        self.progress = 0.0;
        self.midpoint_latched = false;
    }

    /// Advance by a frame-scaled delta.
    ///
    /// The call that finishes the covering phase reports progress exactly 1.0;
    /// leftover time is not carried into the revealing phase.
    pub fn advance(&mut self, delta: f32) -> DriverStep {
        let delta = delta.max(0.0);
        match self.phase {
            TransitionPhase::Idle => DriverStep::Idle,
            TransitionPhase::Covering => {
                self.elapsed += delta;
                let t = self.elapsed / self.duration;
                if t < 1.0 {
                    self.progress = self.cover_easing.apply(t);
                    return DriverStep::Advanced;
                }
                self.progress = 1.0;
                self.phase = TransitionPhase::Revealing;
                self.elapsed = 0.0;
                if self.midpoint_latched {
                    DriverStep::Advanced
                } else {
                    self.midpoint_latched = true;
                    DriverStep::Midpoint
                }
            }
            TransitionPhase::Revealing => {
                self.elapsed += delta;
                let t = self.elapsed / self.duration;
                if t < 1.0 {
                    self.progress = 1.0 + self.reveal_easing.apply(t);
                    return DriverStep::Advanced;
                }
                self.progress = 2.0;
                self.phase = TransitionPhase::Idle;
                self.elapsed = 0.0;
                DriverStep::Completed
            }
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Frame-scaled length of each phase.
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> PhaseDriver {
        PhaseDriver::new(10.0, Easing::QuadIn, Easing::QuadOut)
    }

    #[test]
    fn idle_driver_does_nothing() {
        let mut d = driver();
        assert_eq!(d.advance(5.0), DriverStep::Idle);
        assert_eq!(d.progress(), 0.0);
    }

    #[test]
    fn covering_uses_ease_in() {
        let mut d = driver();
        d.start();
        assert_eq!(d.advance(5.0), DriverStep::Advanced);
        assert!((d.progress() - 0.25).abs() < 1e-6, "QuadIn(0.5) should be 0.25, got {}", d.progress());
    }

    #[test]
    fn midpoint_reports_exactly_one() {
        let mut d = driver();
        d.start();
        d.advance(9.0);
        assert_eq!(d.advance(4.0), DriverStep::Midpoint);
        assert_eq!(d.progress(), 1.0);
        assert_eq!(d.phase(), TransitionPhase::Revealing);
    }

    #[test]
    fn revealing_uses_ease_out_and_completes_at_two() {
        let mut d = driver();
        d.start();
        d.advance(10.0);
        d.advance(5.0);
        assert!((d.progress() - 1.75).abs() < 1e-6, "got {}", d.progress());
        assert_eq!(d.advance(5.0), DriverStep::Completed);
        assert_eq!(d.progress(), 2.0);
        assert!(!d.is_running());
        assert_eq!(d.advance(1.0), DriverStep::Idle);
    }

    #[test]
    fn midpoint_fires_once_per_start_with_tiny_steps() {
        let mut d = driver();
        d.start();
        let mut midpoints = 0;
        let mut completions = 0;
        for _ in 0..1000 {
            match d.advance(0.1) {
                DriverStep::Midpoint => midpoints += 1,
                DriverStep::Completed => completions += 1,
                _ => {}
            }
        }
        assert_eq!(midpoints, 1);
        assert_eq!(completions, 1);
    }

    #[test]
    fn progress_never_decreases_during_a_cycle() {
        let mut d = driver();
        d.start();
        let mut prev = d.progress();
        while d.advance(0.3) != DriverStep::Completed {
            assert!(d.progress() >= prev, "{} < {}", d.progress(), prev);
            assert!(d.progress() <= 2.0);
            prev = d.progress();
        }
    }

    #[test]
    fn cancel_suppresses_pending_events() {
        let mut d = driver();
        d.start();
        d.advance(9.9);
        d.cancel();
        assert_eq!(d.advance(100.0), DriverStep::Idle);
        assert_eq!(d.progress(), 0.0);
    }

    #[test]
    fn restart_after_cancel_behaves_fresh() {
        let mut d = driver();
        d.start();
        d.advance(10.0);
        d.advance(3.0);
        d.cancel();
        d.start();
        assert_eq!(d.progress(), 0.0);
        assert_eq!(d.advance(10.0), DriverStep::Midpoint);
    }

    #[test]
    fn one_huge_step_still_stops_at_midpoint() {
        let mut d = driver();
        d.start();
        assert_eq!(d.advance(1000.0), DriverStep::Midpoint);
        assert_eq!(d.progress(), 1.0);
        assert_eq!(d.advance(1000.0), DriverStep::Completed);
    }
}
