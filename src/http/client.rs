//! Low-level HTTP client — `BrokerHttp`.
//!
//! Builds authenticated requests, sends them through the configured
//! [`Transport`], maps status codes to [`HttpError`] and unwraps the
//! `{status, data}` envelope. Internal to the SDK — the sub-clients wrap this.

use crate::auth::SessionState;
use crate::error::HttpError;
use crate::http::transport::{HttpRequest, Method, Transport};
use crate::network::API_VERSION_HEADER;

use async_lock::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Standard response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
}

/// Envelope header only, used to spot error payloads regardless of `data`.
#[derive(Debug, Deserialize)]
struct EnvelopeStatus {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_type: Option<String>,
}

/// Low-level HTTP client for the brokerage REST API.
pub struct BrokerHttp {
    base_url: String,
    api_version: String,
    default_headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
    /// Shared with every clone of the owning client.
    session: Arc<RwLock<SessionState>>,
}

impl BrokerHttp {
    pub fn new(
        base_url: &str,
        api_version: &str,
        default_headers: Vec<(String, String)>,
        transport: Arc<dyn Transport>,
        session: SessionState,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
            default_headers,
            transport,
            session: Arc::new(RwLock::new(session)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn session(&self) -> &Arc<RwLock<SessionState>> {
        &self.session
    }

    // ── Request helpers ──────────────────────────────────────────────────

    /// `GET {path}?{query}` and unwrap `data`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, HttpError> {
        let url = self.url_with_query(path, query);
        let body = self.send(Method::Get, url, None).await?;
        decode_envelope(&body)
    }

    /// `POST {path}` with a form-encoded body and unwrap `data`.
    pub(crate) async fn post_form<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<T, HttpError> {
        let body = self.post_form_raw(path, form).await?;
        decode_envelope(&body)
    }

    /// `POST {path}` with a form-encoded body, returning the body text as-is
    /// (after status and envelope-error checks).
    pub(crate) async fn post_form_raw<B: Serialize>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<String, HttpError> {
        let encoded =
            serde_urlencoded::to_string(form).map_err(|e| HttpError::Encode(e.to_string()))?;
        let url = format!("{}{}", self.base_url, path);
        self.send(Method::Post, url, Some(encoded)).await
    }

    fn url_with_query(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let params = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<_>>();
            url = format!("{}?{}", url, params.join("&"));
        }
        url
    }

    async fn headers(&self, has_body: bool) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.default_headers.len() + 3);
        headers.push((API_VERSION_HEADER.to_string(), self.api_version.clone()));
        headers.push((
            "Authorization".to_string(),
            self.session.read().await.auth_header(),
        ));
        if has_body {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
        }
        headers.extend(self.default_headers.iter().cloned());
        headers
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<String, HttpError> {
        let request = HttpRequest {
            method,
            headers: self.headers(body.is_some()).await,
            url,
            body,
        };
        tracing::debug!(method = %method, url = %request.url, "Sending request");

        let resp = self.transport.send(request).await?;

        if resp.is_success() {
            check_envelope_status(&resp.body)?;
            return Ok(resp.body);
        }

        let message = error_message(&resp.body);
        match resp.status {
            401 => Err(HttpError::Unauthorized),
            403 => Err(HttpError::Forbidden(message)),
            404 => Err(HttpError::NotFound(message)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(message)),
            status => Err(HttpError::ServerError {
                status,
                body: message,
            }),
        }
    }
}

impl Clone for BrokerHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            default_headers: self.default_headers.clone(),
            transport: self.transport.clone(),
            session: self.session.clone(),
        }
    }
}

// ─── Envelope decoding ───────────────────────────────────────────────────────

fn check_envelope_status(body: &str) -> Result<(), HttpError> {
    // Non-object bodies are left for the caller's decoder to judge.
    if let Ok(header) = serde_json::from_str::<EnvelopeStatus>(body) {
        if header.status.as_deref() == Some("error") {
            return Err(HttpError::Api {
                error_type: header.error_type.unwrap_or_else(|| "Unknown".to_string()),
                message: header.message.unwrap_or_default(),
            });
        }
    }
    Ok(())
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| HttpError::Decode(e.to_string()))?;
    if envelope.status.as_deref() == Some("error") {
        return Err(HttpError::Api {
            error_type: envelope.error_type.unwrap_or_else(|| "Unknown".to_string()),
            message: envelope.message.unwrap_or_default(),
        });
    }
    envelope.data.ok_or(HttpError::MissingData)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<EnvelopeStatus>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}
