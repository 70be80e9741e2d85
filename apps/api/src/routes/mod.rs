pub mod health;

use anyhow::{anyhow, Result};
use axum::{middleware, routing::get, Router};
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};

use crate::auth::{gate::require_session, handlers as auth};
use crate::resume::handlers as resume;
use crate::state::AppState;

pub const SESSION_COOKIE_NAME: &str = "resume_session";

pub fn build_router(state: AppState) -> Result<Router> {
    let key = Key::try_from(state.config.session_secret.as_bytes())
        .map_err(|e| anyhow!("SESSION_SECRET is not a usable signing key: {e}"))?;

    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(state.config.secure_cookies())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            state.config.session_inactivity_days,
        )))
        .with_signed(key);

    // Résumé API: every route requires a signed-in session.
    let resume_routes = Router::new()
        .route("/education", get(resume::handle_education))
        .route("/experience", get(resume::handle_experience))
        .route("/achievement", get(resume::handle_achievements))
        .route("/professional_summary", get(resume::handle_professional_summary))
        .route("/skills", get(resume::handle_skills))
        .route(
            "/professional_development",
            get(resume::handle_professional_development),
        )
        .route_layer(middleware::from_fn(require_session));

    let router = Router::new()
        .route("/", get(auth::handle_index))
        .route("/health", get(health::health_handler))
        // Google sign-in
        .route("/login", get(auth::handle_login))
        .route("/auth/callback", get(auth::handle_callback))
        .route("/logout", get(auth::handle_logout))
        .nest("/api/resume", resume_routes)
        .layer(sessions)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::data::RESUME;
    use crate::resume::SECTIONS;
    use crate::testing::{test_app, FakeProvider, FAKE_AUTHORIZE_URL, FAKE_STATE};
    use axum::{
        body::Body,
        http::{header, Request, Response, StatusCode},
    };
    use tower::ServiceExt;

    async fn get(app: &Router, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app.clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response<Body>) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    /// The `name=value` pair from the session cookie set on `response`, if any.
    fn session_cookie(response: &Response<Body>) -> Option<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(SESSION_COOKIE_NAME))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    /// Walks `/login` and `/auth/callback`; returns the session cookie and the callback response.
    async fn sign_in(app: &Router, state: &str) -> (String, Response<Body>) {
        let login = get(app, "/login", None).await;
        let cookie = session_cookie(&login).expect("login sets a session cookie");

        let callback = get(
            app,
            &format!("/auth/callback?code=good-code&state={state}"),
            Some(&cookie),
        )
        .await;
        let cookie = session_cookie(&callback).unwrap_or(cookie);
        (cookie, callback)
    }

    #[tokio::test]
    async fn test_resume_routes_redirect_to_login_without_session() {
        let app = test_app(FakeProvider::succeeding());
        for section in SECTIONS {
            let response = get(&app, section.path, None).await;
            assert!(
                response.status().is_redirection(),
                "{} returned {}",
                section.path,
                response.status()
            );
            assert_eq!(location(&response), "/login");
        }
    }

    #[tokio::test]
    async fn test_login_redirects_to_provider() {
        let app = test_app(FakeProvider::succeeding());
        let response = get(&app, "/login", None).await;

        assert!(response.status().is_redirection());
        assert!(location(&response).starts_with(FAKE_AUTHORIZE_URL));
        assert!(session_cookie(&response).is_some());
    }

    #[tokio::test]
    async fn test_index_without_session_offers_login() {
        let app = test_app(FakeProvider::succeeding());
        let response = get(&app, "/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("You are not logged in."));
        assert!(body.contains("href=\"/login\""));
    }

    #[tokio::test]
    async fn test_successful_callback_greets_user() {
        let app = test_app(FakeProvider::succeeding());
        let (cookie, callback) = sign_in(&app, FAKE_STATE).await;

        assert!(callback.status().is_redirection());
        assert_eq!(location(&callback), "/");

        let body = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(body.contains("Hello, Alice!"));
    }

    #[tokio::test]
    async fn test_failed_token_exchange_returns_500_without_session() {
        let app = test_app(FakeProvider::failing());
        let (cookie, callback) = sign_in(&app, FAKE_STATE).await;

        assert_eq!(callback.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error = body_text(callback).await;
        assert!(error.contains("An error occurred during authentication."));

        let body = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(body.contains("You are not logged in."));
        let gated = get(&app, "/api/resume/skills", Some(&cookie)).await;
        assert_eq!(location(&gated), "/login");
    }

    #[tokio::test]
    async fn test_state_mismatch_returns_500_without_session() {
        let app = test_app(FakeProvider::succeeding());
        let (cookie, callback) = sign_in(&app, "forged-state").await;

        assert_eq!(callback.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(get(&app, "/", Some(&cookie)).await).await;
        assert!(!body.contains("Alice"));
    }

    #[tokio::test]
    async fn test_callback_without_login_returns_500() {
        let app = test_app(FakeProvider::succeeding());
        let response = get(
            &app,
            &format!("/auth/callback?code=good-code&state={FAKE_STATE}"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_logout_locks_resume_again() {
        let app = test_app(FakeProvider::succeeding());
        let (cookie, _) = sign_in(&app, FAKE_STATE).await;

        let before = get(&app, "/api/resume/skills", Some(&cookie)).await;
        assert_eq!(before.status(), StatusCode::OK);

        let logout = get(&app, "/logout", Some(&cookie)).await;
        assert!(logout.status().is_redirection());
        assert_eq!(location(&logout), "/");

        for section in SECTIONS {
            let response = get(&app, section.path, Some(&cookie)).await;
            assert_eq!(location(&response), "/login", "{} still open", section.path);
        }
    }

    #[tokio::test]
    async fn test_logout_without_session_redirects_home() {
        let app = test_app(FakeProvider::succeeding());
        let response = get(&app, "/logout", None).await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_skills_page_lists_every_skill() {
        let app = test_app(FakeProvider::succeeding());
        let (cookie, _) = sign_in(&app, FAKE_STATE).await;

        let response = get(&app, "/api/resume/skills", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        for skill in RESUME.skills.iter().flat_map(|group| group.skills) {
            assert!(body.contains(skill.name), "missing skill {}", skill.name);
        }
    }

    #[tokio::test]
    async fn test_each_section_renders_its_own_data() {
        let app = test_app(FakeProvider::succeeding());
        let (cookie, _) = sign_in(&app, FAKE_STATE).await;

        let expectations: [(&str, Vec<&str>); 6] = [
            (
                "/api/resume/education",
                RESUME.education.iter().map(|e| e.institution).collect(),
            ),
            (
                "/api/resume/experience",
                RESUME.experience.iter().map(|e| e.company).collect(),
            ),
            (
                "/api/resume/achievement",
                RESUME.achievements.iter().map(|a| a.title).collect(),
            ),
            (
                "/api/resume/professional_summary",
                vec![RESUME.professional_summary.headline],
            ),
            (
                "/api/resume/skills",
                RESUME.skills.iter().map(|g| g.category).collect(),
            ),
            (
                "/api/resume/professional_development",
                RESUME
                    .professional_development
                    .iter()
                    .map(|p| p.title)
                    .collect(),
            ),
        ];

        for (path, needles) in expectations {
            let response = get(&app, path, Some(&cookie)).await;
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            let body = body_text(response).await;
            for needle in needles {
                assert!(body.contains(needle), "{path} is missing {needle}");
            }
        }
    }

    #[tokio::test]
    async fn test_resume_pages_are_idempotent() {
        let app = test_app(FakeProvider::succeeding());
        let (cookie, _) = sign_in(&app, FAKE_STATE).await;

        for section in SECTIONS {
            let first = body_text(get(&app, section.path, Some(&cookie)).await).await;
            let second = body_text(get(&app, section.path, Some(&cookie)).await).await;
            assert_eq!(first, second, "{} changed between requests", section.path);
        }
    }

    #[tokio::test]
    async fn test_health_needs_no_session() {
        let app = test_app(FakeProvider::succeeding());
        let response = get(&app, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
