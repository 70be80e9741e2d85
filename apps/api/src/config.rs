use anyhow::{ensure, Context, Result};

pub const GOOGLE_DISCOVERY_URL: &str =
    "https://accounts.google.com/.well-known/openid-configuration";

/// Minimum length of `SESSION_SECRET`, the size of a signing key for session cookies.
pub const SESSION_SECRET_MIN_LEN: usize = 64;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_discovery_url: String,
    pub session_secret: String,
    /// Externally visible origin, used to build the OAuth callback URL.
    pub public_base_url: String,
    pub session_inactivity_days: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let config = Config {
            google_client_id: require_env("GOOGLE_CLIENT_ID")?,
            google_client_secret: require_env("GOOGLE_CLIENT_SECRET")?,
            google_discovery_url: std::env::var("GOOGLE_DISCOVERY_URL")
                .unwrap_or_else(|_| GOOGLE_DISCOVERY_URL.to_string()),
            session_secret: require_env("SESSION_SECRET")?,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
            session_inactivity_days: std::env::var("SESSION_INACTIVITY_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse::<i64>()
                .context("SESSION_INACTIVITY_DAYS must be a whole number of days")?,
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.google_client_id.trim().is_empty(),
            "GOOGLE_CLIENT_ID must not be empty"
        );
        ensure!(
            !self.google_client_secret.trim().is_empty(),
            "GOOGLE_CLIENT_SECRET must not be empty"
        );
        ensure!(
            self.session_secret.len() >= SESSION_SECRET_MIN_LEN,
            "SESSION_SECRET must be at least {SESSION_SECRET_MIN_LEN} bytes long"
        );
        ensure!(
            self.session_inactivity_days > 0,
            "SESSION_INACTIVITY_DAYS must be positive"
        );
        Ok(())
    }

    /// The redirect URI registered with the identity provider.
    pub fn callback_url(&self) -> String {
        format!("{}/auth/callback", self.public_base_url)
    }

    pub fn secure_cookies(&self) -> bool {
        self.public_base_url.starts_with("https://")
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    ensure!(
        !value.trim().is_empty(),
        "Required environment variable '{key}' is empty"
    );
    Ok(value)
}
