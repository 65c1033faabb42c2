//! Fixture Server
//!
//! Development backend built with Axum. Serves the mock payloads on the
//! routes the pages call, so the UI and CLI can run without the real
//! backend. Accounts are not implemented: the auth routes answer 501.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /api/auth/login` - 501 `{error}`
//! - `POST /api/auth/register` - 501 `{error}`
//! - `GET /api/social-auth/google` - 501 `{error}`
//!
//! ## Catalogue
//! - `GET /api/subjects`
//! - `GET /api/subjects/:id`
//! - `GET /api/topics/subject/:id`
//! - `GET /api/questions/topic/:id/random`
//!
//! ## Leaderboard
//! - `GET /api/leaderboard/subject/:id`
//! - `GET /api/leaderboard/subject/:id/user-rank`
//!
//! ## User
//! - `GET /api/users/profile`
//! - `GET /api/users/activity`
//! - `GET /api/users/stats`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! With `static_dir` set, every other path is served from that directory,
//! falling back to its `index.html` so client-side routes resolve.

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::{AppState, ServerConfig};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Auth routes
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/register", post(routes::auth::register))
        .route("/social-auth/google", get(routes::auth::google))
        // Catalogue routes
        .route("/subjects", get(routes::catalog::list_subjects))
        .route("/subjects/:id", get(routes::catalog::get_subject))
        .route("/topics/subject/:id", get(routes::catalog::topics_for_subject))
        .route("/questions/topic/:id/random", get(routes::catalog::random_questions))
        // Leaderboard routes
        .route("/leaderboard/subject/:id", get(routes::leaderboard::subject_leaderboard))
        .route("/leaderboard/subject/:id/user-rank", get(routes::leaderboard::user_rank))
        // User routes
        .route("/users/profile", get(routes::users::profile))
        .route("/users/activity", get(routes::users::activity))
        .route("/users/stats", get(routes::users::stats));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let static_dir = state.config.static_dir.clone();
    let shared_state = Arc::new(state);

    let router = Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes);

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving UI from {}", dir.display());
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("StudyBuddy fixture server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("StudyBuddy fixture server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    use crate::api::ErrorBody;
    use crate::models::{LeaderboardEntry, Question, Subject, UserRank};

    fn create_test_app() -> Router {
        build_router(AppState::new(ServerConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_subjects_use_underscore_ids() {
        let response = get(create_test_app(), "/api/subjects").await;
        assert_eq!(response.status(), StatusCode::OK);

        let raw: serde_json::Value = json(response).await;
        assert!(raw[0]["_id"].is_string());

        let subjects: Vec<Subject> = serde_json::from_value(raw).unwrap();
        assert_eq!(subjects.len(), 3);
    }

    #[tokio::test]
    async fn test_random_questions() {
        let response = get(create_test_app(), "/api/questions/topic/ml-supervised/random").await;
        assert_eq!(response.status(), StatusCode::OK);

        let questions: Vec<Question> = json(response).await;
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.category == "Supervised Learning"));
    }

    #[tokio::test]
    async fn test_unknown_topic_is_404_with_error_body() {
        let response = get(create_test_app(), "/api/questions/topic/nope/random").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: ErrorBody = json(response).await;
        assert!(body.error.contains("nope"));
    }

    #[tokio::test]
    async fn test_leaderboard_and_rank() {
        let response = get(create_test_app(), "/api/leaderboard/subject/statistics").await;
        let entries: Vec<LeaderboardEntry> = json(response).await;
        assert_eq!(entries.len(), 25);

        let response = get(create_test_app(), "/api/leaderboard/subject/statistics/user-rank").await;
        let rank: UserRank = json(response).await;
        assert!(rank.rank > 20);
    }

    #[tokio::test]
    async fn test_login_not_implemented() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/login")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"email": "a@b.co", "password": "pw"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body: ErrorBody = json(response).await;
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_register_invalid_json() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/register")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = json(response).await;
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_login_missing_content_type() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/login")
                    .body(Body::from(r#"{"email":"a@b.c","password":"pw"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = json(response).await;
        assert!(body.error.contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_static_dir_falls_back_to_index() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>studybuddy</html>").unwrap();

        let config = ServerConfig {
            static_dir: Some(dir.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let app = build_router(AppState::new(config));

        let response = get(app, "/quiz").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>studybuddy</html>");
    }

    #[tokio::test]
    async fn test_unknown_route_without_ui_is_404() {
        let response = get(create_test_app(), "/dashboard").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
