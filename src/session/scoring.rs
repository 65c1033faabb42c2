//! Answer scoring
//!
//! A submission is a map from question id to the selected option index.
//! Scoring counts the questions whose selection equals `correct_answer`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Question;

/// Selected option per question id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    selections: HashMap<String, usize>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the selection for a question
    pub fn select(&mut self, question_id: impl Into<String>, option: usize) {
        self.selections.insert(question_id.into(), option);
    }

    pub fn selection(&self, question_id: &str) -> Option<usize> {
        self.selections.get(question_id).copied()
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.selections.contains_key(question_id)
    }

    /// Number of recorded selections
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// How one question fared
    pub fn status(&self, question: &Question) -> AnswerStatus {
        match self.selection(&question.id) {
            None => AnswerStatus::Unanswered,
            Some(choice) if question.is_correct(choice) => AnswerStatus::Correct,
            Some(_) => AnswerStatus::Incorrect,
        }
    }

    /// Highlight for one option on the review screen
    pub fn option_mark(&self, question: &Question, option: usize) -> OptionMark {
        if question.is_correct(option) {
            OptionMark::Correct
        } else if self.selection(&question.id) == Some(option) {
            OptionMark::WrongPick
        } else {
            OptionMark::Neutral
        }
    }
}

/// Outcome of one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Unanswered,
}

/// Review highlight for one option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionMark {
    /// The right answer, whether picked or not
    Correct,
    /// Picked, but wrong
    WrongPick,
    Neutral,
}

/// Totals for a submitted quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub total: usize,
    /// Rounded percentage of correct answers, 0 for an empty quiz
    pub percentage: u32,
}

impl ScoreReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_percentage(self.percentage)
    }
}

/// Score a set of questions against an answer sheet
pub fn score(questions: &[Question], answers: &AnswerSheet) -> ScoreReport {
    let mut correct = 0;
    let mut incorrect = 0;

    for question in questions {
        match answers.status(question) {
            AnswerStatus::Correct => correct += 1,
            AnswerStatus::Incorrect => incorrect += 1,
            AnswerStatus::Unanswered => {}
        }
    }

    let total = questions.len();
    ScoreReport {
        correct,
        incorrect,
        unanswered: total - correct - incorrect,
        total,
        percentage: percentage(correct, total),
    }
}

/// `round(part / total * 100)`, halves rounding up; 0 when `total` is 0
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer form of round-half-up on part * 100 / total
    ((part * 200 + total) / (total * 2)) as u32
}

/// Encouragement shown with the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Excellent,
    Good,
    KeepPracticing,
}

impl Verdict {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Verdict::Excellent
        } else if percentage >= 60 {
            Verdict::Good
        } else {
            Verdict::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent work!",
            Verdict::Good => "Good job!",
            Verdict::KeepPracticing => "Keep practicing!",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Vec<Question> {
        (0..4)
            .map(|i| {
                Question::new(
                    format!("q{}", i),
                    format!("Question {}", i),
                    vec!["a".into(), "b".into(), "c".into()],
                    i % 3,
                )
            })
            .collect()
    }

    #[test]
    fn test_score_counts_matching_selections() {
        let questions = quiz();
        let mut answers = AnswerSheet::new();
        answers.select("q0", 0); // correct
        answers.select("q1", 1); // correct
        answers.select("q2", 0); // wrong

        let report = score(&questions, &answers);
        assert_eq!(report.correct, 2);
        assert_eq!(report.incorrect, 1);
        assert_eq!(report.unanswered, 1);
        assert_eq!(report.total, 4);
        assert_eq!(report.percentage, 50);
        assert_eq!(report.verdict(), Verdict::KeepPracticing);
    }

    #[test]
    fn test_score_ignores_answers_for_unknown_questions() {
        let questions = quiz();
        let mut answers = AnswerSheet::new();
        answers.select("other", 0);

        let report = score(&questions, &answers);
        assert_eq!(report.correct, 0);
        assert_eq!(report.unanswered, 4);
    }

    #[test]
    fn test_reselect_replaces_previous_choice() {
        let questions = quiz();
        let mut answers = AnswerSheet::new();
        answers.select("q0", 2);
        answers.select("q0", 0);

        assert_eq!(answers.len(), 1);
        assert_eq!(score(&questions, &answers).correct, 1);
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let report = score(&[], &AnswerSheet::new());
        assert_eq!(report.percentage, 0);
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(7, 7), 100);
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(Verdict::from_percentage(80), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(79), Verdict::Good);
        assert_eq!(Verdict::from_percentage(60), Verdict::Good);
        assert_eq!(Verdict::from_percentage(59), Verdict::KeepPracticing);
        assert_eq!(Verdict::Good.to_string(), "Good job!");
    }

    #[test]
    fn test_option_marks() {
        let questions = quiz();
        let mut answers = AnswerSheet::new();
        answers.select("q1", 2);

        let q = &questions[1];
        assert_eq!(answers.option_mark(q, 1), OptionMark::Correct);
        assert_eq!(answers.option_mark(q, 2), OptionMark::WrongPick);
        assert_eq!(answers.option_mark(q, 0), OptionMark::Neutral);
        assert_eq!(answers.status(q), AnswerStatus::Incorrect);
    }
}
