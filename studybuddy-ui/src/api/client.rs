//! HTTP API Client
//!
//! Functions for communicating with the StudyBuddy backend. URLs come from
//! the shared endpoint table so the pages and the CLI agree on paths.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use studybuddy::api::{ApiBase, AuthResponse, ClientError, Endpoint, ErrorBody};
use studybuddy::auth::{AuthError, Submission, TokenStore, TOKEN_KEY};
use studybuddy::models::{
    Activity, LeaderboardEntry, Question, Subject, Topic, User, UserRank, UserStats,
};

/// Local storage key of the API base URL
pub const API_URL_KEY: &str = "studybuddy_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> ApiBase {
    local_storage()
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .map(ApiBase::new)
        .unwrap_or_default()
}

/// Token kept in `localStorage` under `token`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str) -> Result<(), AuthError> {
        let storage =
            local_storage().ok_or_else(|| AuthError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| AuthError::Storage("Could not save token".into()))
    }

    fn clear(&self) -> Result<(), AuthError> {
        let storage =
            local_storage().ok_or_else(|| AuthError::Storage("localStorage unavailable".into()))?;
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|_| AuthError::Storage("Could not clear token".into()))
    }
}

// ============ Plumbing ============

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match LocalTokenStore.load() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        let status = response.status();
        let message = response.json::<ErrorBody>().await.ok().map(|b| b.error);
        return Err(ClientError::server(status, message));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(endpoint: Endpoint) -> Result<T, ClientError> {
    let url = endpoint.url(&get_api_base());

    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    endpoint: Endpoint,
    body: &B,
) -> Result<T, ClientError> {
    let url = endpoint.url(&get_api_base());

    let response = authorized(Request::post(&url))
        .json(body)
        .map_err(|e| ClientError::Validation(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    decode(response).await
}

// ============ API Functions ============

/// Send a validated login or signup form
pub async fn submit_auth(submission: &Submission) -> Result<AuthResponse, ClientError> {
    match submission {
        Submission::Login(body) => post_json(Endpoint::Login, body).await,
        Submission::Register(body) => post_json(Endpoint::Register, body).await,
    }
}

/// Full-page redirect to the Google sign-in flow
pub fn redirect_to_google() {
    let url = Endpoint::GoogleAuth.url(&get_api_base());
    if let Some(window) = web_sys::window() {
        if window.location().set_href(&url).is_err() {
            web_sys::console::error_1(&"Failed to redirect to Google sign-in".into());
        }
    }
}

pub async fn fetch_subjects() -> Result<Vec<Subject>, ClientError> {
    get_json(Endpoint::Subjects).await
}

pub async fn fetch_subject(id: &str) -> Result<Subject, ClientError> {
    get_json(Endpoint::Subject(id.to_string())).await
}

pub async fn fetch_topics(subject_id: &str) -> Result<Vec<Topic>, ClientError> {
    get_json(Endpoint::TopicsForSubject(subject_id.to_string())).await
}

pub async fn fetch_random_questions(topic_id: &str) -> Result<Vec<Question>, ClientError> {
    get_json(Endpoint::RandomQuestions(topic_id.to_string())).await
}

pub async fn fetch_leaderboard(subject_id: &str) -> Result<Vec<LeaderboardEntry>, ClientError> {
    get_json(Endpoint::Leaderboard(subject_id.to_string())).await
}

pub async fn fetch_user_rank(subject_id: &str) -> Result<UserRank, ClientError> {
    get_json(Endpoint::UserRank(subject_id.to_string())).await
}

pub async fn fetch_profile() -> Result<User, ClientError> {
    get_json(Endpoint::Profile).await
}

pub async fn fetch_activity() -> Result<Vec<Activity>, ClientError> {
    get_json(Endpoint::Activity).await
}

pub async fn fetch_stats() -> Result<UserStats, ClientError> {
    get_json(Endpoint::Stats).await
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_token_store() {
        let store = LocalTokenStore;
        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert!(!store.is_logged_in());

        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));
        assert!(store.is_logged_in());

        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[wasm_bindgen_test]
    fn test_api_base_defaults_without_override() {
        if let Some(storage) = local_storage() {
            storage.remove_item(API_URL_KEY).unwrap();
        }
        assert_eq!(get_api_base(), ApiBase::default());
    }
}
