//! Practice Quiz
//!
//! A fixed question set answered one at a time with immediate feedback:
//! pick an option, check it, read the explanation, move on. A hint can be
//! shown before checking. The session ends after the last question or when
//! the 10 minute clock runs out.

use super::countdown::{Countdown, Tick};
use super::scoring::percentage;
use super::SessionError;
use crate::models::Question;

/// Time allowed for a practice run, in seconds
pub const PRACTICE_TIME_LIMIT_SECS: u32 = 600;

/// Result of checking the selected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    Incorrect { correct_answer: usize },
}

/// What a tick did to the practice run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeTick {
    Running(u32),
    /// The clock ran out and the run is complete
    TimeUp,
    Idle,
}

/// Banner shown when a practice run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeGrade {
    Outstanding,
    Great,
    Good,
    KeepStudying,
}

impl PracticeGrade {
    /// Grade `score` out of `total`; thresholds are 90, 70 and 50 percent
    pub fn from_score(score: usize, total: usize) -> Self {
        let reached = |percent: usize| total > 0 && score * 100 >= percent * total;
        if reached(90) {
            PracticeGrade::Outstanding
        } else if reached(70) {
            PracticeGrade::Great
        } else if reached(50) {
            PracticeGrade::Good
        } else {
            PracticeGrade::KeepStudying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PracticeGrade::Outstanding => "Outstanding! You're a machine learning expert!",
            PracticeGrade::Great => {
                "Great job! You have a solid understanding of machine learning concepts."
            }
            PracticeGrade::Good => {
                "Good effort! You know the basics, but there's room for improvement."
            }
            PracticeGrade::KeepStudying => "Keep studying! Machine learning takes time to master.",
        }
    }
}

/// State of the practice page
#[derive(Debug, Clone)]
pub struct PracticeSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    checked: bool,
    score: usize,
    started: bool,
    completed: bool,
    show_hint: bool,
    countdown: Countdown,
}

impl PracticeSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            checked: false,
            score: 0,
            started: false,
            completed: false,
            show_hint: false,
            countdown: Countdown::new(),
        }
    }

    /// Begin (or restart) the run from the first question
    pub fn start(&mut self) {
        self.started = true;
        self.countdown.start(PRACTICE_TIME_LIMIT_SECS);
        self.score = 0;
        self.current = 0;
        self.completed = false;
        self.selected = None;
        self.checked = false;
        self.show_hint = false;
    }

    pub fn reset(&mut self) {
        self.start();
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the question screen is showing
    pub fn in_progress(&self) -> bool {
        self.started && !self.completed
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Pick an option. Ignored once the answer has been checked.
    pub fn select(&mut self, option: usize) {
        if self.in_progress() && !self.checked {
            self.selected = Some(option);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Check the selected option against the answer key
    pub fn check(&mut self) -> Result<CheckOutcome, SessionError> {
        if !self.in_progress() {
            return Err(SessionError::NotInProgress);
        }
        let choice = self.selected.ok_or(SessionError::NoSelection)?;
        let question = self
            .questions
            .get(self.current)
            .ok_or(SessionError::NotInProgress)?;

        let outcome = if question.is_correct(choice) {
            CheckOutcome::Correct
        } else {
            CheckOutcome::Incorrect {
                correct_answer: question.correct_answer,
            }
        };

        // A second check of the same question must not score again
        if !self.checked {
            self.checked = true;
            if outcome == CheckOutcome::Correct {
                self.score += 1;
            }
        }

        Ok(outcome)
    }

    /// Move to the next question, or finish after the last one
    pub fn next(&mut self) {
        if !self.in_progress() {
            return;
        }

        if self.is_last() {
            self.finish();
        } else {
            self.current += 1;
            self.selected = None;
            self.checked = false;
            self.show_hint = false;
        }
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }

    /// Hints are only offered until the answer is checked
    pub fn hint_visible(&self) -> bool {
        self.show_hint && !self.checked
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Rounded share of correct answers
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.questions.len())
    }

    pub fn grade(&self) -> PracticeGrade {
        PracticeGrade::from_score(self.score, self.questions.len())
    }

    /// One second elapsed
    pub fn tick(&mut self) -> PracticeTick {
        match self.countdown.tick() {
            Tick::Running(left) => PracticeTick::Running(left),
            Tick::Expired if self.in_progress() => {
                tracing::info!(score = self.score, "Practice time ran out");
                self.completed = true;
                PracticeTick::TimeUp
            }
            Tick::Expired | Tick::Idle => PracticeTick::Idle,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Remaining time as `M:SS`
    pub fn clock(&self) -> String {
        self.countdown.compact()
    }

    fn finish(&mut self) {
        self.completed = true;
        self.countdown.stop();
        tracing::info!(score = self.score, total = self.questions.len(), "Practice finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn started() -> PracticeSession {
        let mut session = PracticeSession::new(mock::practice_questions());
        session.start();
        session
    }

    #[test]
    fn test_start_resets_state() {
        let session = started();
        assert!(session.in_progress());
        assert_eq!(session.time_left(), 600);
        assert_eq!(session.clock(), "10:00");
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions().len(), 10);
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(PracticeGrade::from_score(9, 10), PracticeGrade::Outstanding);
        assert_eq!(PracticeGrade::from_score(8, 10), PracticeGrade::Great);
        assert_eq!(PracticeGrade::from_score(7, 10), PracticeGrade::Great);
        assert_eq!(PracticeGrade::from_score(5, 10), PracticeGrade::Good);
        assert_eq!(PracticeGrade::from_score(4, 10), PracticeGrade::KeepStudying);
        assert_eq!(PracticeGrade::from_score(0, 0), PracticeGrade::KeepStudying);
    }

    #[test]
    fn test_select_before_start_is_ignored() {
        let mut session = PracticeSession::new(mock::practice_questions());
        session.select(1);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_check_requires_selection() {
        let mut session = started();
        assert!(matches!(session.check(), Err(SessionError::NoSelection)));
    }

    #[test]
    fn test_correct_check_scores_once() {
        let mut session = started();
        let answer = session.current_question().unwrap().correct_answer;
        session.select(answer);

        assert_eq!(session.check().unwrap(), CheckOutcome::Correct);
        assert_eq!(session.check().unwrap(), CheckOutcome::Correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_selection_locked_after_check() {
        let mut session = started();
        let answer = session.current_question().unwrap().correct_answer;
        let wrong = (answer + 1) % 4;
        session.select(wrong);
        assert_eq!(
            session.check().unwrap(),
            CheckOutcome::Incorrect {
                correct_answer: answer
            }
        );

        session.select(answer);
        assert_eq!(session.selected(), Some(wrong));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_next_clears_per_question_state() {
        let mut session = started();
        session.toggle_hint();
        assert!(session.hint_visible());
        session.select(0);
        session.check().unwrap();
        assert!(!session.hint_visible());

        session.next();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected(), None);
        assert!(!session.is_checked());
        assert!(!session.hint_visible());
    }

    #[test]
    fn test_perfect_run() {
        let mut session = started();
        for _ in 0..10 {
            let answer = session.current_question().unwrap().correct_answer;
            session.select(answer);
            session.check().unwrap();
            session.next();
        }
        assert!(session.is_completed());
        assert_eq!(session.score(), 10);
        assert_eq!(session.tick(), PracticeTick::Idle);
    }

    #[test]
    fn test_timeout_completes_once() {
        let mut session = started();
        let mut time_ups = 0;
        for _ in 0..700 {
            if session.tick() == PracticeTick::TimeUp {
                time_ups += 1;
            }
        }
        assert_eq!(time_ups, 1);
        assert!(session.is_completed());
    }

    #[test]
    fn test_reset_starts_over() {
        let mut session = started();
        session.select(1);
        session.check().unwrap();
        session.next();

        session.reset();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.in_progress());
    }

    #[test]
    fn test_check_after_time_up_is_rejected() {
        let mut session = started();
        let answer = session.current_question().unwrap().correct_answer;
        session.select(answer);

        let time_ups = (0..PRACTICE_TIME_LIMIT_SECS)
            .filter(|_| session.tick() == PracticeTick::TimeUp)
            .count();
        assert_eq!(time_ups, 1);
        assert!(session.is_completed());

        assert_eq!(session.check(), Err(SessionError::NotInProgress));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_check_after_finish_is_rejected() {
        let mut session = started();
        for _ in 0..9 {
            session.next();
        }
        assert!(session.is_last());
        let answer = session.current_question().unwrap().correct_answer;
        session.select(answer);
        session.next();
        assert!(session.is_completed());

        assert_eq!(session.check(), Err(SessionError::NotInProgress));
        assert_eq!(session.score(), 0);
    }
}
