//! Countdown Timer
//!
//! One-second countdown shared by the exam, quiz and practice flows.
//!
//! The countdown is a pure state machine: something outside (a
//! `tokio::time::interval` in the CLI, a `gloo_timers` interval in the
//! browser) calls [`Countdown::tick`] once per elapsed second. Keeping the
//! clock outside makes the expiry rule testable without waiting:
//!
//! - every tick on a running countdown removes exactly one second
//! - the tick that goes from 1 to 0 reports [`Tick::Expired`] and stops it
//! - nothing else ever reports `Expired`, so it fires once per `start`

use serde::{Deserialize, Serialize};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    /// Still running; seconds left after this tick
    Running(u32),
    /// Reached zero on this tick
    Expired,
    /// Not running, nothing happened
    Idle,
}

/// A countdown measured in whole seconds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// An idle countdown with no time on it
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start with `seconds` on the clock.
    ///
    /// A zero-length countdown expires on its first tick.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = true;
    }

    /// Start from a duration in minutes
    pub fn start_minutes(&mut self, minutes: u32) {
        self.start(minutes.saturating_mul(60));
    }

    /// Advance by one second
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        if self.remaining <= 1 {
            self.remaining = 0;
            self.running = false;
            return Tick::Expired;
        }

        self.remaining -= 1;
        Tick::Running(self.remaining)
    }

    /// Cancel without expiring. Remaining time is cleared.
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }

    /// Remaining time as `M:SS`
    pub fn compact(&self) -> String {
        format_compact(self.remaining)
    }
}

/// Format seconds as zero-padded `MM:SS` (minutes may exceed two digits)
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format seconds as `M:SS`
pub fn format_compact(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_countdown_does_nothing() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_strictly_decreasing_then_expires_once() {
        let mut countdown = Countdown::new();
        countdown.start(5);

        let mut previous = countdown.remaining();
        for _ in 0..4 {
            match countdown.tick() {
                Tick::Running(left) => {
                    assert_eq!(left, previous - 1);
                    previous = left;
                }
                other => panic!("expired early: {:?}", other),
            }
        }

        assert_eq!(countdown.remaining(), 1);
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.remaining(), 0);

        for _ in 0..10 {
            assert_eq!(countdown.tick(), Tick::Idle);
        }
    }

    #[test]
    fn test_exam_hour_expires_after_exactly_3600_ticks() {
        let mut countdown = Countdown::new();
        countdown.start_minutes(60);
        assert_eq!(countdown.remaining(), 3600);

        let mut expirations = 0;
        let mut expired_at = None;
        for i in 1..=4000u32 {
            if countdown.tick() == Tick::Expired {
                expirations += 1;
                expired_at = Some(i);
            }
        }

        assert_eq!(expirations, 1);
        assert_eq!(expired_at, Some(3600));
    }

    #[test]
    fn test_zero_length_expires_on_first_tick() {
        let mut countdown = Countdown::new();
        countdown.start(0);
        assert!(countdown.is_running());
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.tick(), Tick::Idle);
    }

    #[test]
    fn test_stop_never_expires() {
        let mut countdown = Countdown::new();
        countdown.start(2);
        countdown.stop();
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_restart_rearms_expiry() {
        let mut countdown = Countdown::new();
        countdown.start(1);
        assert_eq!(countdown.tick(), Tick::Expired);

        countdown.start(1);
        assert_eq!(countdown.tick(), Tick::Expired);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_compact(600), "10:00");
        assert_eq!(format_compact(69), "1:09");
        assert_eq!(format_compact(5), "0:05");
    }
}
