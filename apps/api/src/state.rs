use std::sync::Arc;

use crate::analyzer::SkillAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. `LlmAnalyzer` when an API key is configured, else `HeuristicAnalyzer`.
    pub analyzer: Arc<dyn SkillAnalyzer>,
}
