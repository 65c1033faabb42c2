//! Display records
//!
//! Plain data shared by the pages, the fixture server and the CLI. None of
//! these types enforce invariants: they mirror the JSON the backend is
//! expected to return (camelCase keys, `_id` for document ids).

pub mod content;
pub mod document;
pub mod exam;
pub mod question;
pub mod user;

pub use content::{Feature, Testimonial};
pub use document::{DocumentSummary, KeyTerm, TopicSummary};
pub use exam::Exam;
pub use question::{Question, Subject, Topic};
pub use user::{
    board_rows, podium, shows_own_position, Activity, ActivityKind, LeaderboardEntry, User,
    UserRank, UserStats, BOARD_LIMIT, PODIUM_SIZE,
};

use serde::{Deserialize, Deserializer};

/// Accept ids sent either as JSON strings or as bare numbers.
///
/// The mocked pages use numeric ids while API-backed pages use document ids.
pub(crate) fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// First character of a display name, used for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        assert_eq!(initial("Jamie Chen"), "J");
        assert_eq!(initial("Émile"), "É");
        assert_eq!(initial(""), "");
    }
}
