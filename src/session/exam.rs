//! Exam Simulation
//!
//! Pick an exam from the catalogue and sit it against the clock. The exam
//! ends when the countdown runs out or when the student ends it.

use super::countdown::{Countdown, Tick};
use crate::models::Exam;

/// Message shown when the countdown runs out
pub const TIME_UP_MESSAGE: &str = "Time's up! The exam has ended.";

/// What a tick did to the running exam
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamEvent {
    /// Seconds left
    Running(u32),
    /// The countdown reached zero; the exam is over
    TimeUp(Exam),
    /// No exam in progress
    Idle,
}

/// State of the exam page
#[derive(Debug, Clone, Default)]
pub struct ExamSession {
    exams: Vec<Exam>,
    selected: Option<Exam>,
    countdown: Countdown,
}

impl ExamSession {
    pub fn new(exams: Vec<Exam>) -> Self {
        Self {
            exams,
            selected: None,
            countdown: Countdown::new(),
        }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn find(&self, id: u32) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    /// Start an exam; its duration in minutes becomes the remaining seconds
    pub fn start(&mut self, exam: Exam) {
        tracing::info!(exam_id = exam.id, minutes = exam.duration, "Exam started");
        self.countdown.start(exam.duration_secs());
        self.selected = Some(exam);
    }

    /// One second elapsed
    pub fn tick(&mut self) -> ExamEvent {
        match self.countdown.tick() {
            Tick::Running(left) => ExamEvent::Running(left),
            Tick::Expired => match self.selected.take() {
                Some(exam) => {
                    tracing::info!(exam_id = exam.id, "Exam time is up");
                    ExamEvent::TimeUp(exam)
                }
                None => ExamEvent::Idle,
            },
            Tick::Idle => ExamEvent::Idle,
        }
    }

    /// End the exam early. Returns the exam that was running.
    pub fn end(&mut self) -> Option<Exam> {
        self.countdown.stop();
        let ended = self.selected.take();
        if let Some(exam) = &ended {
            tracing::info!(exam_id = exam.id, "Exam ended by student");
        }
        ended
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn selected(&self) -> Option<&Exam> {
        self.selected.as_ref()
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        self.countdown.clock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_start_converts_minutes_to_seconds() {
        let mut session = ExamSession::new(mock::exams());
        let exam = session.find(1).cloned().unwrap();
        assert_eq!(exam.duration, 60);

        session.start(exam);
        assert!(session.is_running());
        assert_eq!(session.time_left(), 3600);
        assert_eq!(session.clock(), "60:00");
    }

    #[test]
    fn test_auto_ends_exactly_once_after_full_duration() {
        let mut session = ExamSession::new(mock::exams());
        session.start(session.find(1).cloned().unwrap());

        let mut time_ups = Vec::new();
        for tick in 1..=3700u32 {
            if let ExamEvent::TimeUp(exam) = session.tick() {
                time_ups.push((tick, exam.id));
            }
        }

        assert_eq!(time_ups, vec![(3600, 1)]);
        assert!(!session.is_running());
        assert!(session.selected().is_none());
        assert_eq!(session.time_left(), 0);
    }

    #[test]
    fn test_manual_end_suppresses_time_up() {
        let mut session = ExamSession::new(mock::exams());
        session.start(Exam::new(9, "Quick check", 1));
        session.tick();

        let ended = session.end();
        assert_eq!(ended.map(|e| e.id), Some(9));
        assert_eq!(session.time_left(), 0);

        for _ in 0..120 {
            assert_eq!(session.tick(), ExamEvent::Idle);
        }
    }

    #[test]
    fn test_zero_minute_exam_ends_on_first_tick() {
        let mut session = ExamSession::default();
        session.start(Exam::new(5, "Empty", 0));
        assert!(matches!(session.tick(), ExamEvent::TimeUp(_)));
    }
}
