//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the quiz client and the API server.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trivia_core::domain::{Category, CategoryId, Question};
use utoipa::{IntoParams, ToSchema};

//=========================================================================================
// Shared Shapes
//=========================================================================================

/// A question as the client sees it.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.0,
            question: q.text.clone(),
            answer: q.answer.clone(),
            category: q.category.0,
            difficulty: q.difficulty,
        }
    }
}

pub fn question_views<'a, I>(questions: I) -> Vec<QuestionView>
where
    I: IntoIterator<Item = &'a Question>,
{
    questions.into_iter().map(QuestionView::from).collect()
}

/// Category id to label. Serialized as a JSON object keyed by the decimal id.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories.iter().map(|c| (c.id.0, c.kind.clone())).collect()
}

/// An integer sent either as a JSON number or as a numeric string, as the
/// client's form selects do.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum IntParam {
    Number(i64),
    Text(String),
}

impl IntParam {
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            IntParam::Number(n) => Some(*n),
            IntParam::Text(s) => s.trim().parse().ok(),
        }
    }

    /// `None` when the value is not an integer or does not fit in an `i32`.
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|n| i32::try_from(n).ok())
    }

    pub fn to_category(&self) -> Option<CategoryId> {
        self.to_i64().map(CategoryId)
    }
}

/// The optional `?page=N` query. Kept as text so a bad value can be reported.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1.
    pub page: Option<String>,
}

//=========================================================================================
// Requests
//=========================================================================================

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub category: Option<IntParam>,
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<IntParam>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct QuizCategory {
    /// Absent or `0` plays every category.
    #[schema(value_type = Option<i64>)]
    pub id: Option<IntParam>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

//=========================================================================================
// Responses
//=========================================================================================

#[derive(Serialize, Debug, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub categories: BTreeMap<i64, String>,
    pub total_categories: usize,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    #[schema(value_type = Object)]
    pub categories: BTreeMap<i64, String>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub message: String,
    pub created: i64,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub current_category: String,
    pub total_questions_in_category: usize,
    pub total_questions: usize,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once every question in the category has been played.
    pub question: Option<QuestionView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_serializes_with_client_field_names() {
        let question = Question {
            id: trivia_core::QuestionId(5),
            text: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            category: CategoryId(4),
            difficulty: 1,
        };
        assert_eq!(
            serde_json::to_value(QuestionView::from(&question)).unwrap(),
            json!({
                "id": 5,
                "question": "What boxer's original name is Cassius Clay?",
                "answer": "Muhammad Ali",
                "category": 4,
                "difficulty": 1
            })
        );
    }

    #[test]
    fn category_map_is_keyed_by_id() {
        let categories = vec![
            Category { id: CategoryId(1), kind: "Science".to_string() },
            Category { id: CategoryId(2), kind: "Art".to_string() },
        ];
        assert_eq!(
            serde_json::to_value(category_map(&categories)).unwrap(),
            json!({ "1": "Science", "2": "Art" })
        );
    }

    #[test]
    fn integers_accept_numbers_and_numeric_strings() {
        let number: IntParam = serde_json::from_value(json!(3)).unwrap();
        let text: IntParam = serde_json::from_value(json!(" 3")).unwrap();
        let junk: IntParam = serde_json::from_value(json!("three")).unwrap();
        assert_eq!(number.to_i64(), Some(3));
        assert_eq!(text.to_i64(), Some(3));
        assert_eq!(junk.to_i64(), None);
        assert_eq!(text.to_category(), Some(CategoryId(3)));
    }

    #[test]
    fn narrow_integers_reject_overflow() {
        let fits: IntParam = serde_json::from_value(json!("2")).unwrap();
        let too_big: IntParam = serde_json::from_value(json!(i64::from(i32::MAX) + 1)).unwrap();
        let too_big_text: IntParam = serde_json::from_value(json!("9999999999")).unwrap();
        assert_eq!(fits.to_i32(), Some(2));
        assert_eq!(too_big.to_i32(), None);
        assert_eq!(too_big_text.to_i32(), None);
    }
}
