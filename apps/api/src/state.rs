use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::config::Config;
use crate::resume::models::Resume;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Identity provider used by `/login` and `/auth/callback`. Google in production.
    pub provider: Arc<dyn IdentityProvider>,
    /// Résumé content, read-only for the life of the process.
    pub resume: &'static Resume,
}
