//! crates/trivia_core/src/domain.rs
//!
//! Defines the pure, core data structures for the trivia bank.
//! These structs are independent of any database or serialization format.

use std::fmt;

/// Identity of a stored question. Assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub i64);

/// Identity of a category. Questions reference categories by this id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Ids of zero or below select every category when playing a quiz.
    pub fn is_all(self) -> bool {
        self.0 <= 0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trivia question as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub answer: String,
    pub category: CategoryId,
    /// 1 to 5 by convention; not enforced.
    pub difficulty: i32,
}

/// A question that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attaches a store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

// Read-only from the core's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Display label, e.g. "Science".
    pub kind: String,
}
