//! StudyBuddy REST API Client
//!
//! HTTP client for the backend the pages talk to. One method per endpoint;
//! a bearer token is attached once one has been stored.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::dto::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest};
use super::endpoints::{ApiBase, Endpoint};
use super::error::{ClientError, ClientResult};
use crate::models::{Activity, LeaderboardEntry, Question, Subject, Topic, User, UserRank, UserStats};

/// Default request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Backend client
#[derive(Debug, Clone)]
pub struct StudyBuddyClient {
    client: Client,
    base: ApiBase,
    token: Option<String>,
}

impl StudyBuddyClient {
    /// Create a client for `base` with the given request timeout
    pub fn new(base: ApiBase, timeout_ms: u64) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base,
            token: None,
        })
    }

    /// Builder method: authenticate requests with `token`
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Where the browser is sent for Google sign-in
    pub fn google_auth_url(&self) -> String {
        Endpoint::GoogleAuth.url(&self.base)
    }

    pub async fn login(&self, body: &LoginRequest) -> ClientResult<AuthResponse> {
        self.post_json(Endpoint::Login, body).await
    }

    pub async fn register(&self, body: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.post_json(Endpoint::Register, body).await
    }

    pub async fn subjects(&self) -> ClientResult<Vec<Subject>> {
        self.get_json(Endpoint::Subjects).await
    }

    pub async fn subject(&self, id: &str) -> ClientResult<Subject> {
        self.get_json(Endpoint::Subject(id.to_string())).await
    }

    pub async fn topics(&self, subject_id: &str) -> ClientResult<Vec<Topic>> {
        self.get_json(Endpoint::TopicsForSubject(subject_id.to_string())).await
    }

    pub async fn random_questions(&self, topic_id: &str) -> ClientResult<Vec<Question>> {
        self.get_json(Endpoint::RandomQuestions(topic_id.to_string())).await
    }

    pub async fn leaderboard(&self, subject_id: &str) -> ClientResult<Vec<LeaderboardEntry>> {
        self.get_json(Endpoint::Leaderboard(subject_id.to_string())).await
    }

    pub async fn user_rank(&self, subject_id: &str) -> ClientResult<UserRank> {
        self.get_json(Endpoint::UserRank(subject_id.to_string())).await
    }

    pub async fn profile(&self) -> ClientResult<User> {
        self.get_json(Endpoint::Profile).await
    }

    pub async fn activity(&self) -> ClientResult<Vec<Activity>> {
        self.get_json(Endpoint::Activity).await
    }

    pub async fn stats(&self) -> ClientResult<UserStats> {
        self.get_json(Endpoint::Stats).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ClientResult<T> {
        let url = endpoint.url(&self.base);
        tracing::debug!(%url, "GET");

        let response = self.authorize(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base);
        tracing::debug!(%url, "POST");

        let response = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .map(|body| body.error);

        tracing::warn!(status = status.as_u16(), ?message, "Backend request failed");
        Err(ClientError::server(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{build_router, AppState, ServerConfig};

    async fn spawn_fixture_server() -> ApiBase {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = build_router(AppState::new(ServerConfig::default()));

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        ApiBase::new(format!("http://{}", addr))
    }

    #[tokio::test]
    async fn test_fetches_fixture_payloads() {
        let base = spawn_fixture_server().await;
        let client = StudyBuddyClient::new(base, DEFAULT_TIMEOUT_MS).unwrap();

        let subjects = client.subjects().await.unwrap();
        assert!(!subjects.is_empty());

        let topics = client.topics(&subjects[0].id).await.unwrap();
        assert!(!topics.is_empty());

        let questions = client.random_questions(&topics[0].id).await.unwrap();
        assert!(!questions.is_empty());

        let rank = client.user_rank(&subjects[0].id).await.unwrap();
        assert!(rank.rank > 0);
    }

    #[tokio::test]
    async fn test_server_error_message_is_surfaced() {
        let base = spawn_fixture_server().await;
        let client = StudyBuddyClient::new(base, DEFAULT_TIMEOUT_MS).unwrap();

        let err = client
            .login(&LoginRequest {
                email: "a@b.co".into(),
                password: "pw".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(501));
        assert!(matches!(err, ClientError::Server { message: Some(_), .. }));
    }

    #[tokio::test]
    async fn test_unknown_subject_is_not_found() {
        let base = spawn_fixture_server().await;
        let client = StudyBuddyClient::new(base, DEFAULT_TIMEOUT_MS).unwrap();

        let err = client.subject("nope").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = StudyBuddyClient::new(ApiBase::new(format!("http://{}", addr)), 2_000).unwrap();
        let err = client.stats().await.unwrap_err();
        assert!(err.is_transport());
    }
}
