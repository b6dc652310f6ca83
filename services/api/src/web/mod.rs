pub mod protocol;
pub mod quiz;
pub mod rest;
pub mod state;

use crate::config::{AllowedOrigin, Config};
use crate::error::ApiError;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Uri,
    },
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-export the handlers so the binary and tests can reach them directly.
pub use quiz::next_quiz_question_handler;
pub use rest::{
    category_questions_handler, create_question_handler, delete_question_handler,
    list_categories_handler, list_questions_handler, search_questions_handler,
};
pub use state::AppState;

/// Builds the application router with CORS and request tracing applied.
pub fn router(app_state: Arc<AppState>) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/{category_id}/questions",
            get(category_questions_handler),
        )
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/{question_id}", delete(delete_question_handler))
        .route("/quizzes", post(next_quiz_question_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match &config.cors_allowed_origin {
        AllowedOrigin::Any => AllowOrigin::any(),
        AllowedOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri))
}
