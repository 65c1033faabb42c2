//! Login and signup form
//!
//! One form serves both modes. Switching mode clears everything entered so
//! far. Submitting validates the fields required by the current mode and
//! yields the request body to send.

use super::AuthError;
use crate::api::{AuthResponse, ClientError, Endpoint, LoginRequest, RegisterRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log In",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Create your account",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            AuthMode::Login => Endpoint::Login,
            AuthMode::Signup => Endpoint::Register,
        }
    }
}

/// Account type chosen at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Student,
    Teacher,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserType::Student),
            "teacher" => Ok(UserType::Teacher),
            other => Err(AuthError::InvalidUserType(other.to_string())),
        }
    }
}

/// Body to send for the current mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl Submission {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Submission::Login(_) => Endpoint::Login,
            Submission::Register(_) => Endpoint::Register,
        }
    }

    /// JSON body
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Submission::Login(body) => serde_json::json!(body),
            Submission::Register(body) => serde_json::json!(body),
        }
    }
}

/// State of the auth page form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub remember_me: bool,
    pub accept_terms: bool,
    pub user_type: UserType,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn is_login(&self) -> bool {
        self.mode == AuthMode::Login
    }

    /// Switch between login and signup, discarding all entered values
    pub fn toggle_mode(&mut self) {
        *self = Self::new(self.mode.toggled());
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Field names the current mode requires
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self.mode {
            AuthMode::Login => &["email", "password"],
            AuthMode::Signup => &["fullName", "email", "password", "acceptTerms"],
        }
    }

    /// Validate and build the request body
    pub fn submission(&self) -> Result<Submission, AuthError> {
        let email = self.email.trim();

        if self.mode == AuthMode::Signup && self.full_name.trim().is_empty() {
            return Err(AuthError::MissingField("Full name"));
        }
        if email.is_empty() {
            return Err(AuthError::MissingField("Email"));
        }
        if !is_valid_email(email)? {
            return Err(AuthError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("Password"));
        }

        match self.mode {
            AuthMode::Login => Ok(Submission::Login(LoginRequest {
                email: email.to_string(),
                password: self.password.clone(),
            })),
            AuthMode::Signup => {
                if !self.accept_terms {
                    return Err(AuthError::TermsNotAccepted);
                }
                Ok(Submission::Register(RegisterRequest {
                    email: email.to_string(),
                    password: self.password.clone(),
                    full_name: self.full_name.trim().to_string(),
                    user_type: self.user_type.as_str().to_string(),
                }))
            }
        }
    }
}

/// Same shape the browser's `type="email"` input accepts
fn is_valid_email(email: &str) -> Result<bool, AuthError> {
    let re = regex::Regex::new(r"^[^\s@]+@[^\s@]+$")
        .map_err(|_| AuthError::Internal("Regex error".to_string()))?;
    Ok(re.is_match(email))
}

/// Turn the outcome of a login/register call into a token or the message
/// to show
pub fn resolve_auth(result: Result<AuthResponse, ClientError>) -> Result<String, AuthError> {
    match result {
        Ok(AuthResponse {
            token: Some(token), ..
        }) => Ok(token),
        Ok(AuthResponse { error: Some(e), .. }) => Err(AuthError::Rejected(e)),
        Ok(_) => Err(AuthError::Unknown),
        Err(ClientError::Server {
            message: Some(m), ..
        }) => Err(AuthError::Rejected(m)),
        Err(ClientError::Server { message: None, .. }) => Err(AuthError::Unknown),
        Err(ClientError::Validation(m)) => Err(AuthError::Rejected(m)),
        Err(e) => {
            tracing::error!(error = %e, "Auth request failed");
            Err(AuthError::Transport)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: AuthMode) -> AuthForm {
        let mut form = AuthForm::new(mode);
        form.full_name = "Ada Lovelace".into();
        form.email = "ada@example.com".into();
        form.password = "analytical".into();
        form.accept_terms = true;
        form
    }

    #[test]
    fn test_toggle_resets_everything() {
        let mut form = filled(AuthMode::Login);
        form.show_password = true;
        form.remember_me = true;
        form.user_type = UserType::Teacher;

        form.toggle_mode();
        assert_eq!(form, AuthForm::new(AuthMode::Signup));

        form.email = "x@y.z".into();
        form.toggle_mode();
        assert_eq!(form, AuthForm::new(AuthMode::Login));
    }

    #[test]
    fn test_required_fields_swap_with_mode() {
        let mut form = AuthForm::default();
        assert_eq!(form.required_fields(), &["email", "password"]);
        form.toggle_mode();
        assert!(form.required_fields().contains(&"fullName"));
        assert!(form.required_fields().contains(&"acceptTerms"));
    }

    #[test]
    fn test_login_body() {
        let submission = filled(AuthMode::Login).submission().unwrap();
        assert_eq!(submission.endpoint(), Endpoint::Login);
        assert_eq!(
            submission.to_json(),
            serde_json::json!({"email": "ada@example.com", "password": "analytical"})
        );
    }

    #[test]
    fn test_signup_body() {
        let mut form = filled(AuthMode::Signup);
        form.user_type = UserType::Teacher;
        let json = form.submission().unwrap().to_json();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["userType"], "teacher");
    }

    #[test]
    fn test_signup_requires_name_and_terms() {
        let mut form = filled(AuthMode::Signup);
        form.full_name = "  ".into();
        assert_eq!(form.submission(), Err(AuthError::MissingField("Full name")));

        let mut form = filled(AuthMode::Signup);
        form.accept_terms = false;
        assert_eq!(form.submission(), Err(AuthError::TermsNotAccepted));

        // login ignores both
        let mut form = filled(AuthMode::Login);
        form.full_name.clear();
        form.accept_terms = false;
        assert!(form.submission().is_ok());
    }

    #[test]
    fn test_email_checks() {
        let mut form = filled(AuthMode::Login);
        form.email = "not-an-email".into();
        assert_eq!(form.submission(), Err(AuthError::InvalidEmail));
        form.email.clear();
        assert_eq!(form.submission(), Err(AuthError::MissingField("Email")));
    }

    #[test]
    fn test_resolve_auth() {
        let ok = AuthResponse {
            token: Some("abc".into()),
            error: None,
        };
        assert_eq!(resolve_auth(Ok(ok)), Ok("abc".to_string()));

        assert_eq!(
            resolve_auth(Ok(AuthResponse::default())).unwrap_err().to_string(),
            "Something went wrong"
        );
        assert_eq!(
            resolve_auth(Err(ClientError::server(401, Some("Invalid credentials".into())))),
            Err(AuthError::Rejected("Invalid credentials".into()))
        );
        assert_eq!(
            resolve_auth(Err(ClientError::Network("refused".into())))
                .unwrap_err()
                .to_string(),
            "An error occurred. Please try again."
        );
    }

    #[test]
    fn test_user_type_parse() {
        assert_eq!("Teacher".parse::<UserType>(), Ok(UserType::Teacher));
        assert!("admin".parse::<UserType>().is_err());
    }
}
