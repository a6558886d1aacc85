//! Wall clock to fixed simulation frames

use crate::consts::{FRAME_DT, MAX_FRAMES_PER_UPDATE};

/// Turns monotonic clock readings into a whole number of fixed frames
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
    accumulator: f64,
    /// Seconds of wall time consumed since the first reading
    pub elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current clock reading (seconds) and get the number of frames
    /// to simulate. The first reading only establishes the origin. Readings
    /// that go backwards are treated as no time passing. Time beyond
    /// `MAX_FRAMES_PER_UPDATE` frames is dropped.
    pub fn advance(&mut self, now: f64) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };

        let delta = now - last;
        if delta < 0.0 {
            log::warn!("Clock went backwards by {:.4}s, ignoring", -delta);
            self.last = Some(last);
            return 0;
        }
        self.elapsed += delta;
        self.accumulator += delta;

        let mut frames = 0;
        while self.accumulator >= FRAME_DT && frames < MAX_FRAMES_PER_UPDATE {
            self.accumulator -= FRAME_DT;
            frames += 1;
        }
        if frames == MAX_FRAMES_PER_UPDATE {
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
        frames
    }
}
