//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the question and category endpoints and the
//! master definition for the OpenAPI specification.

use crate::error::{ApiError, ErrorBody};
use crate::web::protocol::{
    category_map, question_views, CategoriesResponse, CategoryQuestionsResponse,
    CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, PageQuery,
    QuestionPageResponse, QuestionView, QuizCategory, QuizRequest, QuizResponse, SearchRequest,
    SearchResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{debug, info};
use trivia_core::domain::{CategoryId, NewQuestion, QuestionId};
use trivia_core::pagination::{page_count, paginate, PageNumber};
use trivia_core::search::{search, SearchTerm};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories_handler,
        list_questions_handler,
        create_question_handler,
        delete_question_handler,
        search_questions_handler,
        category_questions_handler,
        crate::web::quiz::next_quiz_question_handler,
    ),
    components(
        schemas(
            QuestionView,
            CategoriesResponse,
            QuestionPageResponse,
            CreateQuestionRequest,
            CreateQuestionResponse,
            DeleteQuestionResponse,
            SearchRequest,
            SearchResponse,
            CategoryQuestionsResponse,
            QuizCategory,
            QuizRequest,
            QuizResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Trivia API", description = "Question bank, search and quiz endpoints.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Helpers
//=========================================================================================

/// A query string that does not deserialize (a repeated `page`, say) is a
/// bad request, the same as a page that is not a positive integer.
fn page_from(query: Result<Query<PageQuery>, QueryRejection>) -> Result<PageNumber, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    PageNumber::parse(query.page.as_deref()).map_err(|e| ApiError::BadRequest(e.to_string()))
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// List every category as an id-to-label map.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = ErrorBody)
    )
)]
pub async fn list_categories_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = app_state.store.list_categories().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_string()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
        total_categories: categories.len(),
    }))
}

/// List one page of questions, ordered by id.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "A page of questions", body = QuestionPageResponse),
        (status = 400, description = "The page is not a positive integer", body = ErrorBody),
        (status = 404, description = "The page holds no questions", body = ErrorBody)
    )
)]
pub async fn list_questions_handler(
    State(app_state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = page_from(query)?;
    let questions = app_state.store.list_questions().await?;
    let current = paginate(&questions, page);
    if current.is_empty() {
        return Err(ApiError::NotFound(format!(
            "page {} of {}",
            page.get(),
            page_count(questions.len())
        )));
    }
    let categories = app_state.store.list_categories().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: question_views(current),
        categories: category_map(&categories),
        total_questions: questions.len(),
        current_category: String::new(),
    }))
}

/// Add a new question to the bank.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = CreateQuestionResponse),
        (status = 422, description = "A field is missing or empty, or the category is unknown", body = ErrorBody)
    )
)]
pub async fn create_question_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    let question = validate_new_question(body)?;

    if app_state.store.get_category(question.category).await?.is_none() {
        return Err(ApiError::Unprocessable(format!(
            "category {} does not exist",
            question.category
        )));
    }

    let id = app_state.store.insert(question).await?;
    info!("Created question {}", id);

    Ok((
        StatusCode::CREATED,
        Json(CreateQuestionResponse {
            success: true,
            message: "created".to_string(),
            created: id.0,
        }),
    ))
}

fn validate_new_question(body: CreateQuestionRequest) -> Result<NewQuestion, ApiError> {
    fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::Unprocessable(format!("'{}' is required", field)))
    }

    let text = required("question", body.question)?;
    let answer = required("answer", body.answer)?;
    let category = body
        .category
        .as_ref()
        .and_then(|c| c.to_category())
        .ok_or_else(|| ApiError::Unprocessable("'category' must be an integer id".to_string()))?;
    let difficulty = body
        .difficulty
        .as_ref()
        .and_then(|d| d.to_i32())
        .ok_or_else(|| ApiError::Unprocessable("'difficulty' must be an integer".to_string()))?;

    Ok(NewQuestion {
        text,
        answer,
        category,
        difficulty,
    })
}

/// Delete a question and return the requested page of what remains.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i64, Path, description = "Id of the question to delete."),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 400, description = "The page is not a positive integer", body = ErrorBody),
        (status = 404, description = "The id is not an integer", body = ErrorBody),
        (status = 422, description = "No question has this id", body = ErrorBody)
    )
)]
pub async fn delete_question_handler(
    State(app_state): State<Arc<AppState>>,
    question_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let Path(question_id) = question_id.map_err(|e| ApiError::NotFound(e.body_text()))?;
    let page = page_from(query)?;
    let id = QuestionId(question_id);

    if !app_state.store.delete_by_id(id).await? {
        return Err(ApiError::Unprocessable(format!("question {} does not exist", id)));
    }
    info!("Deleted question {}", id);

    let questions = app_state.store.list_questions().await?;
    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id.0,
        questions: question_views(paginate(&questions, page)),
        total_questions: questions.len(),
    }))
}

/// Find questions whose text contains the term, ignoring case.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchResponse),
        (status = 400, description = "The body is not valid JSON", body = ErrorBody),
        (status = 404, description = "The term is empty or nothing matched", body = ErrorBody)
    )
)]
pub async fn search_questions_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let term = SearchTerm::new(body.search_term.unwrap_or_default())
        .map_err(|e| ApiError::NotFound(e.to_string()))?;

    let questions = app_state.store.list_questions().await?;
    let matches = search(&questions, &term);
    debug!("Search '{}' matched {} questions", term.as_str(), matches.len());
    if matches.is_empty() {
        return Err(ApiError::NotFound(format!("no match for '{}'", term.as_str())));
    }

    Ok(Json(SearchResponse {
        success: true,
        total_questions: matches.len(),
        questions: question_views(matches),
    }))
}

/// List one page of the questions in a category.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i64, Path, description = "Id of the category."),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "The page is not a positive integer", body = ErrorBody),
        (status = 404, description = "The id is not an integer", body = ErrorBody),
        (status = 422, description = "No category has this id", body = ErrorBody)
    )
)]
pub async fn category_questions_handler(
    State(app_state): State<Arc<AppState>>,
    category_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) = category_id.map_err(|e| ApiError::NotFound(e.body_text()))?;
    let page = page_from(query)?;
    let id = CategoryId(category_id);

    let category = app_state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| ApiError::Unprocessable(format!("category {} does not exist", id)))?;

    let in_category = app_state.store.filter_by_category(id).await?;
    let total_questions = app_state.store.list_questions().await?.len();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: question_views(paginate(&in_category, page)),
        current_category: category.kind,
        total_questions_in_category: in_category.len(),
        total_questions,
    }))
}
