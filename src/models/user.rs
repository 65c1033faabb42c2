//! Users, ranks, activity and dashboard statistics

use serde::{Deserialize, Serialize};

use super::id_from_string_or_number;

/// A user as rendered on the dashboard and leaderboard
///
/// Never created or persisted client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "id_from_string_or_number"
    )]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub score: u32,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile_picture: None,
            score: 0,
        }
    }

    /// Builder method: set score
    pub fn score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Builder method: set profile picture URL
    pub fn picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    /// Avatar placeholder letter
    pub fn initial(&self) -> String {
        super::initial(&self.name)
    }
}

/// One leaderboard row. Rows are shown in the order received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub user: User,
    pub score: u32,
}

/// Response of the user-rank endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRank {
    pub rank: u32,
}

/// Places drawn on the leaderboard podium
pub const PODIUM_SIZE: usize = 3;
/// Rows shown on the leaderboard, podium included
pub const BOARD_LIMIT: usize = 20;

/// Podium places in display order: second, first, third.
///
/// Missing places are skipped, so a two-entry board yields 2nd then 1st.
pub fn podium(entries: &[LeaderboardEntry]) -> Vec<(u32, &LeaderboardEntry)> {
    [1usize, 0, 2]
        .into_iter()
        .filter_map(|i| entries.get(i).map(|entry| (i as u32 + 1, entry)))
        .collect()
}

/// Rows below the podium with their 1-based rank, capped at [`BOARD_LIMIT`]
pub fn board_rows(entries: &[LeaderboardEntry]) -> impl Iterator<Item = (u32, &LeaderboardEntry)> {
    entries
        .iter()
        .enumerate()
        .skip(PODIUM_SIZE)
        .take(BOARD_LIMIT.saturating_sub(PODIUM_SIZE))
        .map(|(i, entry)| (i as u32 + 1, entry))
}

/// Whether the "Your Position" row is needed for a user ranked `rank`
pub fn shows_own_position(rank: u32) -> bool {
    rank as usize > BOARD_LIMIT
}

/// Kind of a recent-activity item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActivityKind {
    Quiz,
    Note,
    Other,
}

impl From<String> for ActivityKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "quiz" => ActivityKind::Quiz,
            "note" => ActivityKind::Note,
            _ => ActivityKind::Other,
        }
    }
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Quiz => "📝",
            ActivityKind::Note => "📘",
            ActivityKind::Other => "⏱",
        }
    }
}

/// A recent-activity item on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Dashboard counters; every field defaults to zero
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub questions_answered: u32,
    pub topics_completed: u32,
    /// Hours
    pub study_time: u32,
    /// Days
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_shape() {
        let json = r#"{"_id": "u1", "name": "Priya", "profilePicture": "/a.jpg", "score": 40}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.profile_picture.as_deref(), Some("/a.jpg"));
        assert_eq!(user.initial(), "P");
    }

    fn board(n: u32) -> Vec<LeaderboardEntry> {
        (0..n)
            .map(|i| LeaderboardEntry {
                user: User::new(format!("u{}", i), format!("User {}", i)),
                score: 1000 - i * 10,
            })
            .collect()
    }

    #[test]
    fn test_podium_order() {
        let entries = board(5);
        let ranks: Vec<u32> = podium(&entries).iter().map(|(rank, _)| *rank).collect();
        assert_eq!(ranks, vec![2, 1, 3]);

        let short = board(2);
        let ranks: Vec<u32> = podium(&short).iter().map(|(rank, _)| *rank).collect();
        assert_eq!(ranks, vec![2, 1]);
    }

    #[test]
    fn test_board_rows_capped() {
        let entries = board(25);
        let rows: Vec<_> = board_rows(&entries).collect();
        assert_eq!(rows.len(), 17);
        assert_eq!(rows[0].0, 4);
        assert_eq!(rows.last().map(|(rank, _)| *rank), Some(20));
        assert_eq!(board_rows(&board(3)).count(), 0);
    }

    #[test]
    fn test_own_position_threshold() {
        assert!(!shows_own_position(20));
        assert!(shows_own_position(21));
    }

    #[test]
    fn test_unknown_activity_kind() {
        let json = r#"{"type": "flashcards", "description": "Reviewed 20 cards"}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.kind, ActivityKind::Other);
    }

    #[test]
    fn test_stats_partial_payload() {
        let stats: UserStats = serde_json::from_str(r#"{"streak": 3}"#).unwrap();
        assert_eq!(stats.streak, 3);
        assert_eq!(stats.questions_answered, 0);
    }
}
