// src/fps.rs

use std::time::Duration;

pub const SAMPLE_WINDOW: Duration = Duration::from_millis(500);

/// Frame rate estimate refreshed every half second.
#[derive(Debug, Default, Clone)]
pub struct FpsCounter {
    frame_count: u32,
    last_sample: Option<Duration>,
    current: Option<u32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one frame at host time `now`. The first call only sets the baseline.
    pub fn tick(&mut self, now: Duration) {
        let last = match self.last_sample {
            Some(last) => last,
            None => {
                self.last_sample = Some(now);
                self.frame_count = 1;
                return;
            }
        };

        if now.saturating_sub(last) >= SAMPLE_WINDOW {
            // window is half a second, so double the count
            self.current = Some(self.frame_count * 2);
            self.frame_count = 0;
            self.last_sample = Some(now);
        }
        self.frame_count += 1;
    }

    pub fn fps(&self) -> Option<u32> {
        self.current
    }

    pub fn display(&self) -> String {
        match self.current {
            Some(fps) => fps.to_string(),
            None => "--".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn nothing_published_before_first_window() {
        let mut fps = FpsCounter::new();
        for i in 0..10 {
            fps.tick(ms(i * 16));
        }
        assert_eq!(fps.fps(), None);
        assert_eq!(fps.display(), "--");
    }

    #[test]
    fn publishes_twice_the_frames_in_a_half_second() {
        let mut fps = FpsCounter::new();
        // 30 frames at 0, 16, ..., 464 ms
        for i in 0..30 {
            fps.tick(ms(i * 16));
        }
        fps.tick(ms(500));
        assert_eq!(fps.fps(), Some(60));
    }

    #[test]
    fn counter_resets_after_each_sample() {
        let mut fps = FpsCounter::new();
        fps.tick(ms(0));
        fps.tick(ms(500));
        assert_eq!(fps.fps(), Some(2));

        // 10 frames after the reset, the one at 500 included
        for i in 1..10 {
            fps.tick(ms(500 + i * 40));
        }
        fps.tick(ms(1000));
        assert_eq!(fps.fps(), Some(20));
    }
}
