//! Application state shared across handlers

use std::sync::Arc;

use application::DashboardService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Resolve-then-fetch lookups
    pub dashboard: Arc<DashboardService>,
    /// Compiled page templates
    pub templates: TemplateEngine,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("dashboard", &self.dashboard)
            .field("templates", &self.templates)
            .finish()
    }
}
