//! Fixed-step frame clock

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta honoured (seconds); longer stalls are clipped
const MAX_FRAME_DT: f32 = 0.1;

/// Converts variable frame times into a whole number of ticks
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    /// Ticks handed out since creation
    pub total_ticks: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame delta (seconds); returns how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        self.total_ticks += u64::from(substeps);
        substeps
    }

    /// Drop any partial tick (on pause or screen change)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame() {
        let mut clock = FrameClock::new();
        let mut ticks = 0;
        for _ in 0..60 {
            ticks += clock.advance(1.0 / 60.0 + 1e-5);
        }
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_slow_frame_catches_up() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(SIM_DT * 3.5), 3);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = FrameClock::new();
        // Clipped to MAX_FRAME_DT, never more than MAX_SUBSTEPS
        let n = clock.advance(5.0);
        assert!((5..=6).contains(&n), "ran {n} ticks");
        assert!(n <= MAX_SUBSTEPS);
        clock.reset();
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.total_ticks, u64::from(n));
    }
}
