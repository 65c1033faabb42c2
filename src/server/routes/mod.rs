//! Route handlers organized by functionality.

pub mod auth;
pub mod catalog;
pub mod health;
pub mod leaderboard;
pub mod users;
