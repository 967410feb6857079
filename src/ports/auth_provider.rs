//! Auth provider port - session tokens and profile reads.
//!
//! Authentication is an external collaborator; this port only mirrors the
//! surface the intake client consumes.

use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

/// Bearer token issued by the auth collaborator.
#[derive(Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Secret::new(raw.into()))
    }

    /// Exposes the raw token for the Authorization header.
    pub fn secret(&self) -> &Secret<String> {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

/// New-account registration data.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: Option<String>,
    pub email: String,
    pub password: Secret<String>,
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Failures at the auth boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Wrong email/password, expired or malformed token.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed.
    #[error("Error de conexión con el servidor")]
    Connection(String),

    /// A 2xx response carried a body the client could not understand.
    #[error("Respuesta inesperada del servidor: {0}")]
    UnexpectedPayload(String),
}

/// Port to the authentication collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, AuthError>;

    /// Registers a new account and returns its first token.
    async fn register(&self, registration: &Registration) -> Result<AccessToken, AuthError>;

    /// Reads the authenticated user's profile.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, AuthError>;
}
