//! crates/trivia_core/src/search.rs
//!
//! Case-insensitive substring search over question text. No tokenization and
//! no ranking: matches keep the order of the input.

use crate::domain::Question;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search term must not be empty")]
    EmptyTerm,
}

/// A validated, non-empty search term. Whitespace counts as content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Result<Self, SearchError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(SearchError::EmptyTerm);
        }
        let folded = raw.to_lowercase();
        Ok(Self { raw, folded })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

/// Returns the questions whose text contains `term`, ignoring case.
pub fn search<'a>(items: &'a [Question], term: &SearchTerm) -> Vec<&'a Question> {
    items.iter().filter(|q| term.matches(&q.text)).collect()
}
