//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `QuestionStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use trivia_core::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use trivia_core::ports::{PortError, PortResult, QuestionStore};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `QuestionStore` port.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new `PgStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct QuestionRecord {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}
impl QuestionRecord {
    fn to_domain(self) -> Question {
        Question {
            id: QuestionId(self.id),
            text: self.question,
            answer: self.answer,
            category: CategoryId(self.category),
            difficulty: self.difficulty,
        }
    }
}

#[derive(FromRow)]
struct CategoryRecord {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}
impl CategoryRecord {
    fn to_domain(self) -> Category {
        Category {
            id: CategoryId(self.id),
            kind: self.kind,
        }
    }
}

//=========================================================================================
// `QuestionStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl QuestionStore for PgStore {
    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn filter_by_category(&self, category: CategoryId) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = $1 ORDER BY id ASC",
        )
        .bind(category.0)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        debug!("Category {} has {} questions", category, records.len());
        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn insert(&self, question: NewQuestion) -> PortResult<QuestionId> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&question.text)
        .bind(&question.answer)
        .bind(question.category.0)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(QuestionId(id))
    }

    async fn delete_by_id(&self, id: QuestionId) -> PortResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_categories(&self) -> PortResult<Vec<Category>> {
        let records =
            sqlx::query_as::<_, CategoryRecord>("SELECT id, type FROM categories ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn get_category(&self, id: CategoryId) -> PortResult<Option<Category>> {
        let record =
            sqlx::query_as::<_, CategoryRecord>("SELECT id, type FROM categories WHERE id = $1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(unexpected)?;

        Ok(record.map(|r| r.to_domain()))
    }
}
