//! Leaderboard Routes
//!
//! - GET /api/leaderboard/subject/:id - Ranked entries, best first
//! - GET /api/leaderboard/subject/:id/user-rank - `{rank}` of the current user

use axum::{extract::Path, Json};

use crate::mock;
use crate::models::{LeaderboardEntry, UserRank};
use crate::server::error::{ServerError, ServerResult};

/// GET /api/leaderboard/subject/:id
pub async fn subject_leaderboard(
    Path(id): Path<String>,
) -> ServerResult<Json<Vec<LeaderboardEntry>>> {
    mock::leaderboard(&id)
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Subject {} not found", id)))
}

/// GET /api/leaderboard/subject/:id/user-rank
pub async fn user_rank(Path(id): Path<String>) -> ServerResult<Json<UserRank>> {
    mock::user_rank(&id)
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("No rank for subject {}", id)))
}
