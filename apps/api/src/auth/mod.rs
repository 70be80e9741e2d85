//! Google sign-in: the login redirect, the callback that turns an authorization
//! code into a session user, and the gate that keeps résumé pages behind it.
//!
//! `AppState` holds an `Arc<dyn IdentityProvider>`; production wires in
//! `GoogleOidcClient`, tests a fake.

pub mod gate;
pub mod handlers;
pub mod oidc;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::session::SessionUser;

/// Scopes requested on every authorization redirect.
pub const SCOPES: [&str; 3] = ["openid", "email", "profile"];

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("provider returned an error: {0}")]
    Provider(String),

    #[error("callback is missing the authorization code")]
    MissingCode,

    #[error("no login is pending for this session")]
    NoPendingLogin,

    #[error("state parameter does not match the pending login")]
    StateMismatch,

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("token response carries no id_token")]
    MissingIdToken,

    #[error("unsupported id_token algorithm {0:?}")]
    UnsupportedAlgorithm(jsonwebtoken::Algorithm),

    #[error("no signing key matches kid {0:?}")]
    UnknownSigningKey(Option<String>),

    #[error("invalid id_token: {0}")]
    InvalidIdToken(#[from] jsonwebtoken::errors::Error),

    #[error("id_token nonce does not match the pending login")]
    NonceMismatch,

    #[error("HTTP error talking to the provider: {0}")]
    Http(#[from] reqwest::Error),
}

/// Secrets generated for one login attempt. Stored in the session by `/login`
/// and consumed once by `/auth/callback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingLogin {
    pub csrf_state: String,
    pub pkce_verifier: String,
    pub nonce: String,
}

/// Where to send the browser, and what to remember until it comes back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub pending: PendingLogin,
}

/// A single external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Builds the authorization redirect for a fresh login attempt.
    fn authorization_request(&self) -> AuthorizationRequest;

    /// Exchanges `code` for tokens and returns the validated identity.
    /// The caller has already checked the CSRF state against `pending`.
    async fn complete_login(
        &self,
        code: &str,
        pending: &PendingLogin,
    ) -> Result<SessionUser, AuthError>;
}
