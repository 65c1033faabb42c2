//! Catalogue Routes
//!
//! - GET /api/subjects - All subjects
//! - GET /api/subjects/:id - One subject
//! - GET /api/topics/subject/:id - Topics of a subject
//! - GET /api/questions/topic/:id/random - Questions for a topic

use axum::{extract::Path, Json};

use crate::mock;
use crate::models::{Question, Subject, Topic};
use crate::server::error::{ServerError, ServerResult};

/// GET /api/subjects
pub async fn list_subjects() -> Json<Vec<Subject>> {
    Json(mock::subjects())
}

/// GET /api/subjects/:id
pub async fn get_subject(Path(id): Path<String>) -> ServerResult<Json<Subject>> {
    mock::subject(&id)
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Subject {} not found", id)))
}

/// GET /api/topics/subject/:id
pub async fn topics_for_subject(Path(id): Path<String>) -> ServerResult<Json<Vec<Topic>>> {
    mock::topics(&id)
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Subject {} not found", id)))
}

/// GET /api/questions/topic/:id/random
///
/// Fixture questions come back in a fixed order. A known topic without
/// questions answers with an empty list.
pub async fn random_questions(Path(id): Path<String>) -> ServerResult<Json<Vec<Question>>> {
    let questions = mock::questions_for_topic(&id)
        .ok_or_else(|| ServerError::NotFound(format!("Topic {} not found", id)))?;

    tracing::debug!(topic = %id, count = questions.len(), "Serving quiz questions");
    Ok(Json(questions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_subject() {
        let result = get_subject(Path("nope".to_string())).await;
        assert!(matches!(result, Err(ServerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_topic_without_questions() {
        let Json(questions) = random_questions(Path("stats-inference".to_string()))
            .await
            .unwrap();
        assert!(questions.is_empty());
    }
}
