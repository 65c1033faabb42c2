//! Authentication
//!
//! Login/signup form state, the mapping from a backend reply to a token or
//! a message, and the token store.

pub mod form;
pub mod token;

pub use form::{resolve_auth, AuthForm, AuthMode, Submission, UserType};
#[cfg(feature = "native")]
pub use token::FileTokenStore;
pub use token::{MemoryTokenStore, TokenStore, TOKEN_KEY};

use thiserror::Error;

/// Auth errors. The `Display` text is what the user sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("You must accept the terms of service and privacy policy")]
    TermsNotAccepted,

    #[error("Unknown user type: {0}")]
    InvalidUserType(String),

    /// The backend said no, with a reason
    #[error("{0}")]
    Rejected(String),

    /// The backend said no without a reason
    #[error("Something went wrong")]
    Unknown,

    #[error("An error occurred. Please try again.")]
    Transport,

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
