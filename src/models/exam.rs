use serde::{Deserialize, Serialize};

/// A timed exam. The duration only seeds a countdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exam {
    pub id: u32,
    pub title: String,
    /// Duration in minutes
    pub duration: u32,
}

impl Exam {
    pub fn new(id: u32, title: impl Into<String>, duration: u32) -> Self {
        Self {
            id,
            title: title.into(),
            duration,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration.saturating_mul(60)
    }
}
