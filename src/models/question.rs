//! Questions and the catalogue they hang off (subjects and topics).

use serde::{Deserialize, Serialize};

use super::id_from_string_or_number;

/// A multiple-choice question
///
/// `correct_answer` indexes into `options`. Nothing checks that it is in
/// range; an out-of-range key simply never matches a selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub category: String,
    /// Prompt text
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Question {
    /// Create a question with no category, explanation or hint
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
    ) -> Self {
        Self {
            id: id.into(),
            category: String::new(),
            prompt: prompt.into(),
            options,
            correct_answer,
            explanation: None,
            hint: None,
        }
    }

    /// Builder method: set category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder method: set explanation
    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Builder method: set hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

/// Letter shown next to an option: 0 → 'A', 1 → 'B', ...
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}

/// A study subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Completion percentage; absent means 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl Subject {
    pub fn progress_percent(&self) -> u8 {
        self.progress.unwrap_or(0).min(100)
    }
}

/// A topic within a subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_from_api_shape() {
        let json = r#"{
            "_id": "q-1",
            "question": "What is 2 + 2?",
            "options": ["3", "4"],
            "correctAnswer": 1,
            "explanation": "Arithmetic."
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();

        assert_eq!(q.id, "q-1");
        assert_eq!(q.prompt, "What is 2 + 2?");
        assert_eq!(q.correct_answer, 1);
        assert_eq!(q.category, "");
        assert!(q.hint.is_none());
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_question_numeric_id() {
        let json = r#"{"id": 7, "question": "?", "options": [], "correctAnswer": 0}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, "7");
    }

    #[test]
    fn test_option_letter() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(26), '?');
    }

    #[test]
    fn test_subject_progress_defaults_to_zero() {
        let s: Subject = serde_json::from_str(r#"{"_id": "s1", "name": "Math"}"#).unwrap();
        assert_eq!(s.progress_percent(), 0);
        assert_eq!(s.description, "");
    }
}
