//! Topic Quiz
//!
//! Three screens: pick a subject and topic, answer the fetched questions
//! against a 30 minute clock, then review the result. Running out of time
//! submits the quiz.

use chrono::{DateTime, Utc};

use super::countdown::{format_compact, Countdown, Tick};
use super::scoring::{score, AnswerSheet, ScoreReport};
use super::SessionError;
use crate::models::{Question, Subject, Topic};

/// Time allowed for one quiz, in seconds
pub const QUIZ_TIME_LIMIT_SECS: u32 = 30 * 60;

/// Which screen the quiz page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizStep {
    #[default]
    Select,
    Quiz,
    Result,
}

/// What a tick did to the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTick {
    Running(u32),
    /// Time ran out and the quiz was submitted
    Submitted(ScoreReport),
    Idle,
}

/// State of the quiz page
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    step: QuizStep,
    subjects: Vec<Subject>,
    selected_subject: Option<Subject>,
    topics: Vec<Topic>,
    selected_topic: Option<Topic>,
    questions: Vec<Question>,
    current: usize,
    answers: AnswerSheet,
    loading: bool,
    countdown: Countdown,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    report: Option<ScoreReport>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_subjects(&mut self, subjects: Vec<Subject>) {
        self.subjects = subjects;
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn set_topics(&mut self, topics: Vec<Topic>) {
        self.topics = topics;
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Choose a subject. Any chosen topic belonged to the old subject and is dropped.
    pub fn select_subject(&mut self, subject: Subject) {
        self.selected_subject = Some(subject);
        self.selected_topic = None;
    }

    pub fn selected_subject(&self) -> Option<&Subject> {
        self.selected_subject.as_ref()
    }

    pub fn select_topic(&mut self, topic: Topic) {
        self.selected_topic = Some(topic);
    }

    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected_topic.as_ref()
    }

    /// The start button is enabled once a topic is chosen and nothing is loading
    pub fn can_start(&self) -> bool {
        self.selected_topic.is_some() && !self.loading
    }

    /// Start answering `questions`
    pub fn begin(&mut self, questions: Vec<Question>, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.selected_topic.is_none() {
            return Err(SessionError::NoTopicSelected);
        }
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        tracing::info!(count = questions.len(), "Quiz started");

        self.questions = questions;
        self.answers.clear();
        self.current = 0;
        self.step = QuizStep::Quiz;
        self.countdown.start(QUIZ_TIME_LIMIT_SECS);
        self.started_at = Some(now);
        self.ended_at = None;
        self.report = None;
        Ok(())
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

    /// Record a selection for any question of the quiz
    pub fn answer(&mut self, question_id: &str, option: usize) {
        if self.step == QuizStep::Quiz {
            self.answers.select(question_id, option);
        }
    }

    /// Record a selection for the question on screen
    pub fn answer_current(&mut self, option: usize) {
        if let Some(id) = self.current_question().map(|q| q.id.clone()) {
            self.answer(&id, option);
        }
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump straight to a question from the navigator
    pub fn jump(&mut self, index: usize) {
        if index < self.questions.len() {
            self.current = index;
        }
    }

    /// Share of the quiz reached, in percent, counting the current question
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    /// One second elapsed
    pub fn tick(&mut self, now: DateTime<Utc>) -> QuizTick {
        match self.countdown.tick() {
            Tick::Running(left) => QuizTick::Running(left),
            Tick::Expired => match self.submit(now) {
                Ok(report) => {
                    tracing::info!(percentage = report.percentage, "Quiz submitted when time ran out");
                    QuizTick::Submitted(report)
                }
                Err(_) => QuizTick::Idle,
            },
            Tick::Idle => QuizTick::Idle,
        }
    }

    /// Score the quiz and show the result screen
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<ScoreReport, SessionError> {
        if self.step != QuizStep::Quiz {
            return Err(SessionError::NotInProgress);
        }

        self.countdown.stop();
        let report = score(&self.questions, &self.answers);
        self.report = Some(report);
        self.ended_at = Some(now);
        self.step = QuizStep::Result;

        tracing::info!(
            correct = report.correct,
            total = report.total,
            percentage = report.percentage,
            "Quiz scored"
        );
        Ok(report)
    }

    pub fn report(&self) -> Option<ScoreReport> {
        self.report
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Remaining time as `M:SS`
    pub fn clock(&self) -> String {
        self.countdown.compact()
    }

    /// Time between start and submission as `M:SS`
    pub fn time_taken(&self) -> String {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => {
                let secs = (end - start).num_seconds().max(0);
                format_compact(u32::try_from(secs).unwrap_or(u32::MAX))
            }
            _ => "0:00".to_string(),
        }
    }

    /// Back to the selection screen with nothing chosen
    pub fn restart(&mut self) {
        self.step = QuizStep::Select;
        self.selected_subject = None;
        self.selected_topic = None;
        self.questions.clear();
        self.answers.clear();
        self.countdown.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn topic() -> Topic {
        Topic {
            id: "t1".into(),
            name: "Clustering".into(),
        }
    }

    fn subject(id: &str) -> Subject {
        Subject {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            progress: None,
        }
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("a", "A?", vec!["x".into(), "y".into()], 0),
            Question::new("b", "B?", vec!["x".into(), "y".into()], 1),
            Question::new("c", "C?", vec!["x".into(), "y".into()], 1),
        ]
    }

    fn started() -> (QuizSession, DateTime<Utc>) {
        let now = Utc::now();
        let mut quiz = QuizSession::new();
        quiz.select_subject(subject("ml"));
        quiz.select_topic(topic());
        quiz.begin(questions(), now).unwrap();
        (quiz, now)
    }

    #[test]
    fn test_selecting_subject_clears_topic() {
        let mut quiz = QuizSession::new();
        quiz.select_subject(subject("ml"));
        quiz.select_topic(topic());
        assert!(quiz.can_start());

        quiz.select_subject(subject("stats"));
        assert!(quiz.selected_topic().is_none());
        assert!(!quiz.can_start());
    }

    #[test]
    fn test_cannot_start_while_loading() {
        let mut quiz = QuizSession::new();
        quiz.select_topic(topic());
        quiz.set_loading(true);
        assert!(!quiz.can_start());
    }

    #[test]
    fn test_begin_rejects_empty_question_set() {
        let mut quiz = QuizSession::new();
        quiz.select_topic(topic());
        let err = quiz.begin(Vec::new(), Utc::now()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No questions available for this topic. Please try another topic."
        );
        assert_eq!(quiz.step(), QuizStep::Select);
    }

    #[test]
    fn test_begin_sets_thirty_minute_clock() {
        let (quiz, _) = started();
        assert_eq!(quiz.step(), QuizStep::Quiz);
        assert_eq!(quiz.time_left(), 1800);
        assert_eq!(quiz.clock(), "30:00");
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn test_navigation_is_bounded() {
        let (mut quiz, _) = started();
        quiz.previous();
        assert_eq!(quiz.current_index(), 0);

        quiz.next();
        quiz.next();
        assert!(quiz.is_last());
        quiz.next();
        assert_eq!(quiz.current_index(), 2);

        quiz.jump(10);
        assert_eq!(quiz.current_index(), 2);
        quiz.jump(1);
        assert_eq!(quiz.current_index(), 1);
        assert!((quiz.progress_percent() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_submit_scores_selections() {
        let (mut quiz, start) = started();
        quiz.answer_current(0); // a: correct
        quiz.next();
        quiz.answer_current(0); // b: wrong
        assert_eq!(quiz.answered_count(), 2);

        let report = quiz.submit(start + Duration::seconds(75)).unwrap();
        assert_eq!(report.correct, 1);
        assert_eq!(report.incorrect, 1);
        assert_eq!(report.unanswered, 1);
        assert_eq!(report.percentage, 33);
        assert_eq!(quiz.step(), QuizStep::Result);
        assert_eq!(quiz.time_taken(), "1:15");

        assert!(matches!(quiz.submit(start), Err(SessionError::NotInProgress)));
    }

    #[test]
    fn test_answers_are_frozen_after_submit() {
        let (mut quiz, start) = started();
        quiz.submit(start).unwrap();
        quiz.answer("a", 0);
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn test_time_out_submits_once() {
        let (mut quiz, start) = started();
        quiz.answer("c", 1);

        let mut submissions = 0;
        for i in 1..=1900i64 {
            if let QuizTick::Submitted(report) = quiz.tick(start + Duration::seconds(i)) {
                submissions += 1;
                assert_eq!(i, 1800);
                assert_eq!(report.correct, 1);
            }
        }
        assert_eq!(submissions, 1);
        assert_eq!(quiz.time_taken(), "30:00");
    }

    #[test]
    fn test_restart_clears_everything() {
        let (mut quiz, start) = started();
        quiz.answer_current(1);
        quiz.submit(start).unwrap();

        quiz.restart();
        assert_eq!(quiz.step(), QuizStep::Select);
        assert!(quiz.selected_subject().is_none());
        assert!(quiz.selected_topic().is_none());
        assert!(quiz.questions().is_empty());
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn test_time_taken_without_times() {
        assert_eq!(QuizSession::new().time_taken(), "0:00");
    }
}
