//! Typed wrappers around the keys this app keeps in the session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::auth::PendingLogin;
use crate::errors::AppError;

pub const SESSION_USER_KEY: &str = "resume:user";
pub const SESSION_PENDING_LOGIN_KEY: &str = "resume:auth:pending";

/// Identity claims of the signed-in user. Presence in the session means "logged in".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub subject: String,
    pub name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    pub picture: Option<String>,
}

impl SessionUser {
    pub async fn insert(session: &Session, user: &SessionUser) -> Result<(), AppError> {
        session.insert(SESSION_USER_KEY, user).await?;
        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<SessionUser>, AppError> {
        Ok(session.get(SESSION_USER_KEY).await?)
    }
}

impl PendingLogin {
    /// Stores the pending login, replacing any earlier unfinished attempt.
    pub async fn insert(session: &Session, pending: &PendingLogin) -> Result<(), AppError> {
        session.insert(SESSION_PENDING_LOGIN_KEY, pending).await?;
        Ok(())
    }

    /// Removes and returns the pending login so it can only be redeemed once.
    pub async fn take(session: &Session) -> Result<Option<PendingLogin>, AppError> {
        Ok(session.remove(SESSION_PENDING_LOGIN_KEY).await?)
    }
}
