//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use std::sync::Arc;
use trivia_core::ports::QuestionStore;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// Holds no quiz progress: every quiz request carries its own history.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }
}
