//! services/api/src/web/quiz.rs
//!
//! The quiz endpoint. Progress lives entirely in the request: the client sends
//! the ids it has already played and gets back one unseen question, or `null`.

use crate::error::{ApiError, ErrorBody};
use crate::web::protocol::{QuestionView, QuizRequest, QuizResponse};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use trivia_core::domain::QuestionId;
use trivia_core::quiz::next_question;

/// Serve a random question the player has not seen yet.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "The next question, or null when none remain", body = QuizResponse),
        (status = 400, description = "previous_questions or quiz_category is missing", body = ErrorBody)
    )
)]
pub async fn next_quiz_question_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let previous = body
        .previous_questions
        .ok_or_else(|| ApiError::BadRequest("'previous_questions' is required".to_string()))?;
    let quiz_category = body
        .quiz_category
        .ok_or_else(|| ApiError::BadRequest("'quiz_category' is required".to_string()))?;

    let category = match &quiz_category.id {
        None => None,
        Some(raw) => {
            let id = raw.to_category().ok_or_else(|| {
                ApiError::BadRequest("'quiz_category.id' must be an integer".to_string())
            })?;
            (!id.is_all()).then_some(id)
        }
    };

    let candidates = match category {
        Some(id) => app_state.store.filter_by_category(id).await?,
        None => app_state.store.list_questions().await?,
    };
    let previous: HashSet<QuestionId> = previous.into_iter().map(QuestionId).collect();

    let mut rng = StdRng::from_entropy();
    let question = next_question(&candidates, &previous, &mut rng)
        .question()
        .map(QuestionView::from);
    debug!(
        "Quiz draw from {} candidates with {} already played: {:?}",
        candidates.len(),
        previous.len(),
        question.as_ref().map(|q| q.id)
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
