use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a debugger pause, a minimized window or a stall
/// does not hand the next frame a pathological value.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock clamping delta time to `[0.1 ms, 250 ms]`.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. after the surface was reconfigured.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(start: Instant) -> FrameClock {
        let mut c = FrameClock::new();
        c.last = start;
        c
    }

    #[test]
    fn frame_index_counts_from_zero() {
        let start = Instant::now();
        let mut c = clock_at(start);
        assert_eq!(c.tick_at(start + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(c.tick_at(start + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_is_time_since_previous_tick() {
        let start = Instant::now();
        let mut c = clock_at(start);
        c.tick_at(start + Duration::from_millis(10));
        let ft = c.tick_at(start + Duration::from_millis(30));
        assert!((ft.dt - 0.020).abs() < 1e-6);
    }

    #[test]
    fn long_stall_is_clamped() {
        let start = Instant::now();
        let mut c = clock_at(start);
        let ft = c.tick_at(start + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_is_raised_to_minimum() {
        let start = Instant::now();
        let mut c = clock_at(start);
        let ft = c.tick_at(start);
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }
}
