use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{debug, info};

use crate::auth::session::SessionUser;
use crate::auth::{AuthError, IdentityProvider, PendingLogin};
use crate::errors::AppError;
use crate::render::render;
use crate::resume::{Section, SECTIONS};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    user: Option<&'a SessionUser>,
    sections: &'a [Section],
}

/// GET /
pub async fn handle_index(session: Session) -> Result<Html<String>, AppError> {
    let user = SessionUser::get(&session).await?;
    render(&IndexTemplate {
        user: user.as_ref(),
        sections: &SECTIONS,
    })
}

/// GET /login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, AppError> {
    debug!("Redirect URI: {}", state.config.callback_url());

    let request = state.provider.authorization_request();
    PendingLogin::insert(&session, &request.pending).await?;

    Ok(Redirect::to(&request.url))
}

/// GET /auth/callback
pub async fn handle_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AppError> {
    let user = complete_login(state.provider.as_ref(), &session, params).await?;

    // Fresh session id once the user is authenticated.
    session.cycle_id().await?;
    SessionUser::insert(&session, &user).await?;

    info!(subject = %user.subject, "User signed in");
    Ok(Redirect::to("/"))
}

/// GET /logout
pub async fn handle_logout(session: Session) -> Result<Redirect, AppError> {
    // Flushing a session that was never stored fails, so only flush a signed-in one.
    if let Some(user) = SessionUser::get(&session).await? {
        session.flush().await?;
        info!(subject = %user.subject, "User signed out");
    }

    Ok(Redirect::to("/"))
}

async fn complete_login(
    provider: &dyn IdentityProvider,
    session: &Session,
    params: CallbackParams,
) -> Result<SessionUser, AppError> {
    // Consumed before anything else so a failed callback cannot be replayed.
    let pending = PendingLogin::take(session).await?;

    if let Some(error) = params.error {
        let detail = match params.error_description {
            Some(description) => format!("{error}: {description}"),
            None => error,
        };
        return Err(AuthError::Provider(detail).into());
    }

    let pending = pending.ok_or(AuthError::NoPendingLogin)?;
    if params.state.as_deref() != Some(pending.csrf_state.as_str()) {
        return Err(AuthError::StateMismatch.into());
    }
    let code = params.code.ok_or(AuthError::MissingCode)?;

    Ok(provider.complete_login(&code, &pending).await?)
}
