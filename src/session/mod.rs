//! Study sessions
//!
//! Timed exam simulation, the topic quiz and the practice quiz. All three
//! are plain state machines driven by user actions and a once-per-second
//! `tick`; none of them owns a timer.

pub mod countdown;
pub mod exam;
pub mod practice;
pub mod quiz;
pub mod scoring;

pub use countdown::{format_clock, format_compact, Countdown, Tick};
pub use exam::{ExamEvent, ExamSession, TIME_UP_MESSAGE};
pub use practice::{
    CheckOutcome, PracticeGrade, PracticeSession, PracticeTick, PRACTICE_TIME_LIMIT_SECS,
};
pub use quiz::{QuizSession, QuizStep, QuizTick, QUIZ_TIME_LIMIT_SECS};
pub use scoring::{score, AnswerSheet, AnswerStatus, OptionMark, ScoreReport, Verdict};

use thiserror::Error;

/// Errors raised by session actions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No questions available for this topic. Please try another topic.")]
    NoQuestions,

    #[error("Select a topic before starting the quiz")]
    NoTopicSelected,

    #[error("No quiz in progress")]
    NotInProgress,

    #[error("Select an answer first")]
    NoSelection,
}
