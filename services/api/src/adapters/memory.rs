//! services/api/src/adapters/memory.rs
//!
//! An in-process implementation of the `QuestionStore` port. Used when no
//! `DATABASE_URL` is configured and as the store behind the handler tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use trivia_core::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use trivia_core::ports::{PortResult, QuestionStore};

#[derive(Default)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    next_question_id: i64,
}

/// Questions and categories kept in ordered maps, so listings come out in id order.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given categories and no questions.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let categories = categories
            .into_iter()
            .map(|(id, kind)| {
                let id = CategoryId(id);
                (id, Category { id, kind: kind.into() })
            })
            .collect();
        Self {
            tables: RwLock::new(Tables {
                categories,
                ..Tables::default()
            }),
        }
    }

    /// The six categories the database migrations seed.
    pub fn with_stock_categories() -> Self {
        Self::with_categories([
            (1, "Science"),
            (2, "Art"),
            (3, "Geography"),
            (4, "History"),
            (5, "Entertainment"),
            (6, "Sports"),
        ])
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn filter_by_category(&self, category: CategoryId) -> PortResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, question: NewQuestion) -> PortResult<QuestionId> {
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;
        let id = QuestionId(tables.next_question_id);
        tables.questions.insert(id, question.into_question(id));
        Ok(id)
    }

    async fn delete_by_id(&self, id: QuestionId) -> PortResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }

    async fn list_categories(&self) -> PortResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> PortResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }
}
