//! OpenID Connect client for Google, built from the provider's discovery document.
//!
//! Login uses the authorization-code flow with PKCE (S256) and a nonce. The ID token
//! returned by the token endpoint is verified against the provider's JWKS before any
//! claim is trusted.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use oauth2::basic::{
    BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
    BasicTokenType,
};
use oauth2::{
    AuthUrl, AuthorizationCode, Client, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, ExtraTokenFields, PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope,
    StandardRevocableToken, StandardTokenResponse, TokenUrl,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::session::SessionUser;
use crate::auth::{AuthError, AuthorizationRequest, IdentityProvider, PendingLogin, SCOPES};
use crate::config::Config;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// The subset of the discovery document this client needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub jwks_uri: String,
}

/// Token endpoint fields beyond the OAuth2 core set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdTokenFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for IdTokenFields {}

type OidcTokenResponse = StandardTokenResponse<IdTokenFields, BasicTokenType>;

type OAuthClient = Client<
    BasicErrorResponse,
    OidcTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,    // authorization
    EndpointNotSet, // device authorization
    EndpointNotSet, // introspection
    EndpointNotSet, // revocation
    EndpointSet,    // token
>;

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    nonce: Option<String>,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
    name: Option<String>,
    picture: Option<String>,
}

impl From<IdTokenClaims> for SessionUser {
    fn from(claims: IdTokenClaims) -> Self {
        let name = claims
            .name
            .clone()
            .or_else(|| claims.email.clone())
            .unwrap_or_else(|| claims.sub.clone());

        SessionUser {
            subject: claims.sub,
            name,
            email: claims.email,
            email_verified: claims.email_verified,
            picture: claims.picture,
        }
    }
}

pub struct GoogleOidcClient {
    oauth: OAuthClient,
    http: reqwest::Client,
    client_id: String,
    metadata: ProviderMetadata,
}

impl GoogleOidcClient {
    /// Fetches the discovery document and builds the client. Any failure here is fatal at startup.
    pub async fn discover(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            // Token responses must not follow redirects.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        info!(
            "Fetching OpenID provider metadata from {}",
            config.google_discovery_url
        );

        let metadata: ProviderMetadata = http
            .get(&config.google_discovery_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .context("Failed to fetch OpenID provider metadata")?
            .json()
            .await
            .context("OpenID provider metadata is not valid JSON")?;

        Self::from_metadata(config, metadata, http)
    }

    pub fn from_metadata(
        config: &Config,
        metadata: ProviderMetadata,
        http: reqwest::Client,
    ) -> Result<Self> {
        let oauth: OAuthClient = Client::new(ClientId::new(config.google_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
            .set_auth_uri(
                AuthUrl::new(metadata.authorization_endpoint.clone())
                    .context("Provider authorization_endpoint is not a valid URL")?,
            )
            .set_token_uri(
                TokenUrl::new(metadata.token_endpoint.clone())
                    .context("Provider token_endpoint is not a valid URL")?,
            )
            .set_redirect_uri(
                RedirectUrl::new(config.callback_url()).context("Callback URL is not valid")?,
            );

        info!("OAuth client registered for issuer {}", metadata.issuer);

        Ok(Self {
            oauth,
            http,
            client_id: config.google_client_id.clone(),
            metadata,
        })
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        let jwks: JwkSet = self
            .http
            .get(&self.metadata.jwks_uri)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(jwks)
    }
}

#[async_trait]
impl IdentityProvider for GoogleOidcClient {
    fn authorization_request(&self) -> AuthorizationRequest {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        let nonce = CsrfToken::new_random();

        let (url, csrf_state) = self
            .oauth
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .add_extra_param("nonce", nonce.secret().clone())
            .set_pkce_challenge(pkce_challenge)
            .url();

        AuthorizationRequest {
            url: url.to_string(),
            pending: PendingLogin {
                csrf_state: csrf_state.secret().clone(),
                pkce_verifier: pkce_verifier.secret().clone(),
                nonce: nonce.secret().clone(),
            },
        }
    }

    async fn complete_login(
        &self,
        code: &str,
        pending: &PendingLogin,
    ) -> Result<SessionUser, AuthError> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.pkce_verifier.clone()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        debug!("Token received from provider");

        let id_token = token
            .extra_fields()
            .id_token
            .as_deref()
            .ok_or(AuthError::MissingIdToken)?;

        let jwks = self.fetch_jwks().await?;
        let user = validate_id_token(
            id_token,
            &jwks,
            &self.client_id,
            &self.metadata.issuer,
            &pending.nonce,
        )?;

        debug!(subject = %user.subject, email = ?user.email, "User info received");
        Ok(user)
    }
}

/// Verifies signature, audience, issuer, expiry and nonce of an ID token and
/// returns the identity it asserts.
///
/// Google issues tokens with `iss` either as the discovery issuer or without its
/// `https://` scheme; both are accepted.
pub fn validate_id_token(
    id_token: &str,
    jwks: &JwkSet,
    client_id: &str,
    issuer: &str,
    expected_nonce: &str,
) -> Result<SessionUser, AuthError> {
    let header = decode_header(id_token)?;
    if header.alg != Algorithm::RS256 {
        return Err(AuthError::UnsupportedAlgorithm(header.alg));
    }

    let jwk = header
        .kid
        .as_deref()
        .and_then(|kid| jwks.find(kid))
        .ok_or_else(|| AuthError::UnknownSigningKey(header.kid.clone()))?;
    let key = DecodingKey::from_jwk(jwk)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[client_id]);
    validation.set_issuer(&[issuer, issuer.trim_start_matches("https://")]);

    let claims = decode::<IdTokenClaims>(id_token, &key, &validation)?.claims;
    if claims.nonce.as_deref() != Some(expected_nonce) {
        return Err(AuthError::NonceMismatch);
    }

    Ok(claims.into())
}
