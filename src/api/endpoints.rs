//! Endpoint catalogue
//!
//! Every backend route the pages call, with its method and path. Path
//! parameters are percent-encoded.

use serde::{Deserialize, Serialize};

/// Default backend address
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Backend base URL, normalized: surrounding whitespace and trailing
/// slashes are removed, so `" http://host:5000/"` becomes `http://host:5000`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an absolute path (`/api/...`) onto the base
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim().trim_start_matches('/'))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

impl From<String> for ApiBase {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<ApiBase> for String {
    fn from(base: ApiBase) -> Self {
        base.0
    }
}

impl std::fmt::Display for ApiBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A backend route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    /// Full-page redirect target, never fetched
    GoogleAuth,
    Subjects,
    Subject(String),
    TopicsForSubject(String),
    RandomQuestions(String),
    Leaderboard(String),
    UserRank(String),
    Profile,
    Activity,
    Stats,
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Login | Endpoint::Register => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    /// Path relative to the base, beginning with `/api`
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/auth/login".to_string(),
            Endpoint::Register => "/api/auth/register".to_string(),
            Endpoint::GoogleAuth => "/api/social-auth/google".to_string(),
            Endpoint::Subjects => "/api/subjects".to_string(),
            Endpoint::Subject(id) => format!("/api/subjects/{}", encode(id)),
            Endpoint::TopicsForSubject(id) => format!("/api/topics/subject/{}", encode(id)),
            Endpoint::RandomQuestions(id) => format!("/api/questions/topic/{}/random", encode(id)),
            Endpoint::Leaderboard(id) => format!("/api/leaderboard/subject/{}", encode(id)),
            Endpoint::UserRank(id) => format!("/api/leaderboard/subject/{}/user-rank", encode(id)),
            Endpoint::Profile => "/api/users/profile".to_string(),
            Endpoint::Activity => "/api/users/activity".to_string(),
            Endpoint::Stats => "/api/users/stats".to_string(),
        }
    }

    pub fn url(&self, base: &ApiBase) -> String {
        base.join(&self.path())
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_normalized() {
        assert_eq!(ApiBase::new(" http://localhost:5000").as_str(), "http://localhost:5000");
        assert_eq!(ApiBase::new("http://api.test//").as_str(), "http://api.test");
        assert_eq!(ApiBase::new("   "), ApiBase::default());
    }

    #[test]
    fn test_login_url_has_no_leading_space() {
        let base = ApiBase::new(" http://localhost:5000");
        assert_eq!(
            Endpoint::Login.url(&base),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(Endpoint::Login.method(), HttpMethod::Post);
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            Endpoint::RandomQuestions("t1".into()).path(),
            "/api/questions/topic/t1/random"
        );
        assert_eq!(
            Endpoint::UserRank("s1".into()).path(),
            "/api/leaderboard/subject/s1/user-rank"
        );
        assert_eq!(Endpoint::Stats.method(), HttpMethod::Get);
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        assert_eq!(
            Endpoint::Subject("a b/c".into()).path(),
            "/api/subjects/a%20b%2Fc"
        );
    }

    #[test]
    fn test_base_serde_normalizes() {
        let base: ApiBase = serde_json::from_str("\"http://x:1/ \"").unwrap();
        assert_eq!(base.as_str(), "http://x:1");
    }
}
