//! HTTP implementation of the `TestGateway` port.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::domain::foundation::{ResponseRating, TestId, Timestamp};
use crate::domain::intake::{AnswerSheet, StressorNarrative};
use crate::domain::results::{ResultDocument, ScoringReport, TestSummary};
use crate::ports::{AccessToken, GatewayError, TestGateway};

use super::detail::extract_detail;

/// Configuration for the HTTP test gateway.
#[derive(Debug, Clone)]
pub struct HttpTestGatewayConfig {
    /// Base URL of the backend (default: http://127.0.0.1:8000).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpTestGatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpTestGatewayConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000")
    }
}

impl From<&ApiConfig> for HttpTestGatewayConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Test gateway speaking the backend's JSON contract over reqwest.
///
/// All calls carry the bearer token of the authenticated user. No call is
/// ever retried by the adapter.
pub struct HttpTestGateway {
    config: HttpTestGatewayConfig,
    client: Client,
    token: AccessToken,
}

impl HttpTestGateway {
    /// Creates a gateway for one authenticated user.
    pub fn new(config: HttpTestGatewayConfig, token: AccessToken) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            token,
        }
    }

    fn bearer(&self) -> &str {
        self.token.secret().expose_secret()
    }

    /// Maps transport failures to the gateway error vocabulary.
    fn transport_error(err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::connection("request timed out")
        } else {
            GatewayError::connection(err.to_string())
        }
    }

    /// Passes 2xx responses through; turns anything else into `Rejected`
    /// with the server's `detail` message.
    async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::warn!(status = status.as_u16(), %detail, "backend rejected request");
        Err(GatewayError::rejected(status.as_u16(), detail))
    }
}

#[async_trait]
impl TestGateway for HttpTestGateway {
    async fn start_test(&self, narrative: &StressorNarrative) -> Result<TestId, GatewayError> {
        let url = self.config.endpoint("/test/iniciar");
        tracing::debug!(%url, "starting test");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&StartTestRequest {
                situacion_estresante: narrative.as_str(),
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        let body: StartTestResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?;

        TestId::new(body.test_id).map_err(|e| GatewayError::unexpected_payload(e.to_string()))
    }

    async fn submit_answers(
        &self,
        test_id: &TestId,
        answers: &AnswerSheet,
        capacity: ResponseRating,
    ) -> Result<(), GatewayError> {
        let url = self
            .config
            .endpoint(&format!("/test/{}/responder", test_id));
        tracing::debug!(%url, answered = answers.answered_count(), "submitting answers");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.bearer())
            .json(&SubmitAnswersRequest {
                respuestas: answers.completed_responses(),
                capacidad_afrontamiento: capacity.value(),
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn fetch_results(&self, test_id: &TestId) -> Result<ResultDocument, GatewayError> {
        let url = self
            .config
            .endpoint(&format!("/test/{}/resultados", test_id));
        tracing::debug!(%url, "fetching results");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.bearer())
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        let body: ResultDocumentDto = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?;

        body.try_into()
    }

    async fn fetch_history(&self) -> Result<Vec<TestSummary>, GatewayError> {
        let url = self.config.endpoint("/test/historial");
        tracing::debug!(%url, "fetching history");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.bearer())
            .send()
            .await
            .map_err(Self::transport_error)?;

        let response = Self::ensure_success(response).await?;
        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?;

        body.tests.into_iter().map(TestSummary::try_from).collect()
    }
}

impl std::fmt::Debug for HttpTestGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTestGateway")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Wire DTOs
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct StartTestRequest<'a> {
    situacion_estresante: &'a str,
}

#[derive(Debug, Deserialize)]
struct StartTestResponse {
    test_id: String,
}

#[derive(Debug, Serialize)]
struct SubmitAnswersRequest {
    respuestas: BTreeMap<u8, u8>,
    capacidad_afrontamiento: u8,
}

#[derive(Debug, Deserialize)]
struct ResultDocumentDto {
    test_id: String,
    situacion_estresante: String,
    fecha_completado: String,
    capacidad_afrontamiento: Option<u8>,
    resultados: ScoringReport,
}

impl TryFrom<ResultDocumentDto> for ResultDocument {
    type Error = GatewayError;

    fn try_from(dto: ResultDocumentDto) -> Result<Self, Self::Error> {
        let capacity = dto
            .capacidad_afrontamiento
            .map(ResponseRating::try_from_u8)
            .transpose()
            .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?;

        Ok(ResultDocument {
            test_id: TestId::new(dto.test_id)
                .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?,
            stressor_narrative: dto.situacion_estresante,
            completed_at: Timestamp::parse_naive_iso(&dto.fecha_completado)
                .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?,
            capacity,
            report: dto.resultados,
        })
    }
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    tests: Vec<HistoryEntryDto>,
}

#[derive(Debug, Deserialize)]
struct HistoryEntryDto {
    test_id: String,
    fecha_inicio: String,
    completado: bool,
    #[serde(default)]
    fecha_completado: Option<String>,
}

impl TryFrom<HistoryEntryDto> for TestSummary {
    type Error = GatewayError;

    fn try_from(dto: HistoryEntryDto) -> Result<Self, Self::Error> {
        let completed_at = dto
            .fecha_completado
            .as_deref()
            .map(Timestamp::parse_naive_iso)
            .transpose()
            .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?;

        Ok(TestSummary {
            test_id: TestId::new(dto.test_id)
                .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?,
            started_at: Timestamp::parse_naive_iso(&dto.fecha_inicio)
                .map_err(|e| GatewayError::unexpected_payload(e.to_string()))?,
            completed: dto.completado,
            completed_at,
        })
    }
}
