//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use listing_insights_core::ports::{TextGenerationService, UserStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
///
/// The text-generation adapter is only present when an API credential was
/// configured; the analysis handler reports the missing credential itself so
/// the error surfaces per request rather than at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Arc<Config>,
    pub text_adapter: Option<Arc<dyn TextGenerationService>>,
}
