//! # StudyBuddy
//!
//! Study companion: timed quizzes with instant scoring, exam simulation,
//! practice questions with hints, study material upload with a generated
//! summary, and subject leaderboards.
//!
//! The crate holds everything the pages need that is not markup, so the
//! same logic drives the Leptos front end, the CLI and the tests.
//!
//! ## Modules
//!
//! - [`models`]: Display records shared with the backend
//! - [`session`]: Tick-driven quiz, exam and practice state machines
//! - [`upload`]: File validation, staging and simulated progress
//! - [`auth`]: Login/signup form and token persistence
//! - [`api`]: Endpoint table, wire types and the native HTTP client
//! - [`mock`]: Fixture catalogue used by the mocked pages and the fixture server
//! - [`config`]: TOML configuration with environment overrides (native)
//! - [`server`]: Axum fixture server (native)
//! - [`runner`]: Wall-clock drivers for the state machines (native)
//!
//! ## Quick Start
//!
//! ```rust
//! use studybuddy::mock;
//! use studybuddy::session::{ExamEvent, ExamSession};
//!
//! let mut session = ExamSession::new(mock::exams());
//! let exam = session.find(2).cloned().unwrap();
//! session.start(exam);
//!
//! assert_eq!(session.clock(), "90:00");
//! assert_eq!(session.tick(), ExamEvent::Running(5399));
//! ```
//!
//! The state machines never read the clock themselves: whoever owns them
//! calls `tick` once a second, a `tokio` interval in the CLI or a browser
//! interval in the UI.

pub mod api;
pub mod auth;
pub mod mock;
pub mod models;
pub mod session;
pub mod upload;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod runner;
#[cfg(feature = "native")]
pub mod server;

pub use api::{ApiBase, ClientError, Endpoint};
pub use auth::{AuthError, AuthForm, AuthMode};
pub use models::{Exam, LeaderboardEntry, Question, Subject, Topic, User};
pub use session::{ExamSession, PracticeSession, QuizSession, ScoreReport, SessionError};
pub use upload::{UploadError, UploadQueue};

#[cfg(feature = "native")]
pub use api::StudyBuddyClient;
#[cfg(feature = "native")]
pub use config::Config;
