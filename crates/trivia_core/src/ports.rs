//! crates/trivia_core/src/ports.rs
//!
//! Defines the service contract (trait) the core relies on for persistence.
//! The trait forms the boundary of the hexagonal architecture, allowing the core
//! to stay independent of a specific database.

use async_trait::async_trait;
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Holds question and category records.
///
/// Every listing is ordered by ascending id. Expected "no data" conditions are
/// reported through the return value (`None`, empty `Vec`, `false`); `Err` is
/// reserved for store failures.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    // --- Questions ---
    async fn list_questions(&self) -> PortResult<Vec<Question>>;

    async fn filter_by_category(&self, category: CategoryId) -> PortResult<Vec<Question>>;

    /// Stores the question and returns the id assigned to it.
    async fn insert(&self, question: NewQuestion) -> PortResult<QuestionId>;

    /// Returns `true` if a row existed and was removed.
    async fn delete_by_id(&self, id: QuestionId) -> PortResult<bool>;

    // --- Categories ---
    async fn list_categories(&self) -> PortResult<Vec<Category>>;

    async fn get_category(&self, id: CategoryId) -> PortResult<Option<Category>>;
}
