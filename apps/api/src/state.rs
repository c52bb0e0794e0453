use std::sync::Arc;

use crate::models::portfolio::PortfolioConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; handlers only ever read it.
    pub profile: Arc<PortfolioConfig>,
}
