use std::sync::Arc;

use crate::config::Config;
use crate::ui::UiController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Page state for both front-ends. Built once at startup, lives as long as the process.
    pub controller: Arc<UiController>,
    pub config: Config,
}
