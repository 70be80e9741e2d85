use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::debug;

use crate::auth::session::SessionUser;
use crate::errors::AppError;

/// Lets the request through only when the session holds a user; otherwise
/// redirects to `/login`. Layered over every résumé route.
pub async fn require_session(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if SessionUser::get(&session).await?.is_none() {
        debug!(path = %request.uri().path(), "No session user, redirecting to login");
        return Ok(Redirect::to("/login").into_response());
    }

    Ok(next.run(request).await)
}
