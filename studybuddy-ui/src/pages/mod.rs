//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod dashboard;
pub mod exam;
pub mod home;
pub mod leaderboard;
pub mod practice;
pub mod quiz;
pub mod upload;

pub use auth::Auth;
pub use dashboard::Dashboard;
pub use exam::Exam;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use practice::Practice;
pub use quiz::Quiz;
pub use upload::Upload;
