//! HTTP implementation of the `AuthProvider` port.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::ports::{
    AccessToken, AuthError, AuthProvider, Credentials, Registration, UserProfile,
};

use super::detail::extract_detail;
use super::test_gateway::HttpTestGatewayConfig;

/// Auth provider speaking the backend's login/registration contract.
pub struct HttpAuthProvider {
    config: HttpTestGatewayConfig,
    client: Client,
}

impl HttpAuthProvider {
    pub fn new(config: HttpTestGatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn transport_error(err: reqwest::Error) -> AuthError {
        AuthError::Connection(err.to_string())
    }

    async fn ensure_success(response: Response) -> Result<Response, AuthError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::warn!(status = status.as_u16(), %detail, "auth request rejected");
        Err(AuthError::Rejected(detail))
    }

    async fn read_token(response: Response) -> Result<AccessToken, AuthError> {
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::UnexpectedPayload(e.to_string()))?;
        Ok(AccessToken::new(body.token))
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        let url = self.endpoint("/login");
        tracing::debug!(%url, "logging in");

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                email: &credentials.email,
                password: credentials.password.expose_secret(),
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        Self::read_token(response).await
    }

    async fn register(&self, registration: &Registration) -> Result<AccessToken, AuthError> {
        let url = self.endpoint("/registro");
        tracing::debug!(%url, "registering account");

        let response = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                nombre: &registration.first_name,
                primer_apellido: &registration.paternal_surname,
                segundo_apellido: registration.maternal_surname.as_deref(),
                email: &registration.email,
                password: registration.password.expose_secret(),
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        Self::read_token(response).await
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, AuthError> {
        let url = self.endpoint("/perfil");
        tracing::debug!(%url, "fetching profile");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.secret().expose_secret())
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        let body: ProfileResponse = response
            .json()
            .await
            .map_err(|e| AuthError::UnexpectedPayload(e.to_string()))?;

        Ok(UserProfile {
            name: body.nombre,
            email: body.email,
            phone: body.telefono,
        })
    }
}

impl std::fmt::Debug for HttpAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuthProvider")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Wire DTOs
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    nombre: &'a str,
    #[serde(rename = "primerApellido")]
    primer_apellido: &'a str,
    #[serde(rename = "segundoApellido", skip_serializing_if = "Option::is_none")]
    segundo_apellido: Option<&'a str>,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    nombre: String,
    email: String,
    #[serde(default)]
    telefono: Option<String>,
}
