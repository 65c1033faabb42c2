//! User Routes
//!
//! The fixture server has a single, always-present user.
//!
//! - GET /api/users/profile
//! - GET /api/users/activity
//! - GET /api/users/stats

use axum::Json;

use crate::mock;
use crate::models::{Activity, User, UserStats};

/// GET /api/users/profile
pub async fn profile() -> Json<User> {
    Json(mock::profile())
}

/// GET /api/users/activity
pub async fn activity() -> Json<Vec<Activity>> {
    Json(mock::activity())
}

/// GET /api/users/stats
pub async fn stats() -> Json<UserStats> {
    Json(mock::stats())
}
