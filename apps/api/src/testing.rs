//! Shared fixtures for unit and router tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use tower_sessions::{MemoryStore, Session};

use crate::auth::session::SessionUser;
use crate::auth::{AuthError, AuthorizationRequest, IdentityProvider, PendingLogin};
use crate::config::{Config, GOOGLE_DISCOVERY_URL, SESSION_SECRET_MIN_LEN};
use crate::resume::data::RESUME;
use crate::routes::build_router;
use crate::state::AppState;

pub const FAKE_AUTHORIZE_URL: &str = "https://idp.test/authorize";
pub const FAKE_STATE: &str = "fake-state";

pub fn test_config() -> Config {
    Config {
        google_client_id: "client-id".to_string(),
        google_client_secret: "client-secret".to_string(),
        google_discovery_url: GOOGLE_DISCOVERY_URL.to_string(),
        session_secret: "s".repeat(SESSION_SECRET_MIN_LEN),
        public_base_url: "http://localhost:8080".to_string(),
        session_inactivity_days: 7,
        port: 8080,
        rust_log: "info".to_string(),
    }
}

pub fn test_session() -> Session {
    let store = Arc::new(MemoryStore::default());
    Session::new(None, store, None)
}

pub fn alice() -> SessionUser {
    SessionUser {
        subject: "110169484474386276334".to_string(),
        name: "Alice".to_string(),
        email: Some("alice@example.com".to_string()),
        email_verified: true,
        picture: None,
    }
}

/// Identity provider that never leaves the process. Always hands out the same
/// state, and either signs Alice in or fails the token exchange.
pub struct FakeProvider {
    succeed: bool,
}

impl FakeProvider {
    pub fn succeeding() -> Self {
        Self { succeed: true }
    }

    pub fn failing() -> Self {
        Self { succeed: false }
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn authorization_request(&self) -> AuthorizationRequest {
        AuthorizationRequest {
            url: format!("{FAKE_AUTHORIZE_URL}?state={FAKE_STATE}"),
            pending: PendingLogin {
                csrf_state: FAKE_STATE.to_string(),
                pkce_verifier: "fake-verifier".to_string(),
                nonce: "fake-nonce".to_string(),
            },
        }
    }

    async fn complete_login(
        &self,
        _code: &str,
        _pending: &PendingLogin,
    ) -> Result<SessionUser, AuthError> {
        if self.succeed {
            Ok(alice())
        } else {
            Err(AuthError::TokenExchange("invalid_grant".to_string()))
        }
    }
}

pub fn test_app(provider: FakeProvider) -> Router {
    let state = AppState {
        config: test_config(),
        provider: Arc::new(provider),
        resume: &RESUME,
    };
    build_router(state).unwrap()
}
