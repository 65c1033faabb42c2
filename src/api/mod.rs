//! Backend API
//!
//! The routes the pages call, their bodies and the client error type.
//! With the `native` feature this module also provides
//! [`StudyBuddyClient`], a `reqwest` client with one method per route.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /api/auth/login` - `{email, password}` → `{token}` or `{error}`
//! - `POST /api/auth/register` - `{email, password, fullName, userType}`
//! - `GET /api/social-auth/google` - Browser redirect
//!
//! ## Catalogue
//! - `GET /api/subjects` - All subjects
//! - `GET /api/subjects/:id` - One subject
//! - `GET /api/topics/subject/:id` - Topics of a subject
//! - `GET /api/questions/topic/:id/random` - Quiz questions for a topic
//!
//! ## Leaderboard
//! - `GET /api/leaderboard/subject/:id` - Ranked entries
//! - `GET /api/leaderboard/subject/:id/user-rank` - `{rank}` of the current user
//!
//! ## User
//! - `GET /api/users/profile`
//! - `GET /api/users/activity`
//! - `GET /api/users/stats`

#[cfg(feature = "native")]
pub mod client;
pub mod dto;
pub mod endpoints;
pub mod error;

#[cfg(feature = "native")]
pub use client::StudyBuddyClient;
pub use dto::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest};
pub use endpoints::{ApiBase, Endpoint, HttpMethod, DEFAULT_API_BASE};
pub use error::{ClientError, ClientResult};
