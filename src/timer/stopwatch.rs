//! Independent count-up stopwatch.
//!
//! The stopwatch is owned by the controller for the whole process lifetime
//! and is never touched by mode switches.

use std::time::Duration;

use super::TICK;

/// A count-up timer that keeps running in the background of every mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    /// Accumulated time
    pub elapsed: Duration,
    /// Whether ticks accumulate
    pub running: bool,
}

impl Stopwatch {
    /// Creates a stopped stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stops and rewinds to zero.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    /// Adds one second when running.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed += TICK;
        }
    }

    /// Formats elapsed time as `H:MM:SS` from one hour on, `MM:SS` before.
    pub fn format(&self) -> String {
        let total = self.elapsed.as_secs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{:02}:{:02}", minutes, seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.tick();
        assert_eq!(stopwatch.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_tick_while_running() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start();
        for _ in 0..5 {
            stopwatch.tick();
        }
        assert_eq!(stopwatch.elapsed, Duration::from_secs(5));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.toggle();
        stopwatch.toggle();
        assert!(!stopwatch.running);

        stopwatch.start();
        stopwatch.toggle();
        stopwatch.toggle();
        assert!(stopwatch.running);
    }

    #[test]
    fn test_reset() {
        let mut stopwatch = Stopwatch::new();
        stopwatch.start();
        stopwatch.tick();
        stopwatch.reset();
        assert_eq!(stopwatch, Stopwatch::new());
    }

    #[test]
    fn test_format() {
        let mut stopwatch = Stopwatch::new();
        assert_eq!(stopwatch.format(), "00:00");

        stopwatch.elapsed = Duration::from_secs(59 * 60 + 59);
        assert_eq!(stopwatch.format(), "59:59");

        stopwatch.elapsed = Duration::from_secs(3600);
        assert_eq!(stopwatch.format(), "1:00:00");

        stopwatch.elapsed = Duration::from_secs(2 * 3600 + 5 * 60 + 7);
        assert_eq!(stopwatch.format(), "2:05:07");
    }
}
