use reqwest::header::{self, HeaderName};
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use shared::Envelope;
use tracing::{debug, warn};
use url::Url;

use crate::error::{RequestError, Result};

/// Thin JSON client for the remote API. Unwraps the response envelope and
/// turns every failure into a [`RequestError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // A trailing slash keeps any path prefix of the base URL on join.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;

        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a JSON request. `headers` are added after the defaults and the
    /// bearer token, so callers can override either.
    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
        headers: &[(HeaderName, &str)],
    ) -> Result<Envelope<T>> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        debug!("Request: {} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        for (name, value) in headers {
            request = request.header(name.clone(), *value);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Like [`ApiClient::request`] but returns the envelope's `data`, which
    /// must be present.
    pub async fn request_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
        headers: &[(HeaderName, &str)],
    ) -> Result<T> {
        self.request(method, path, body, token, headers)
            .await?
            .data
            .ok_or_else(|| RequestError::Malformed(format!("missing data in response to {path}")))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<Envelope<T>> {
        self.request::<T, ()>(Method::GET, path, None, token, &[]).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Envelope<T>> {
        self.request(Method::POST, path, Some(body), token, &[]).await
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>> {
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Request to {} failed with {}", url, status);
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if matches!(text.trim(), "" | "null") {
            return Ok(Envelope::empty());
        }

        let envelope: Envelope<Value> = serde_json::from_str(&text)
            .map_err(|e| RequestError::Malformed(format!("unexpected response: {e}")))?;

        if envelope.is_rejected() {
            let message = envelope
                .message
                .unwrap_or_else(|| "İstek reddedildi".to_string());
            warn!("Request to {} rejected: {}", url, message);
            return Err(RequestError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let data = envelope
            .data
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| RequestError::Malformed(format!("unexpected data shape: {e}")))?;

        Ok(Envelope {
            status_code: envelope.status_code,
            success: envelope.success,
            message: envelope.message,
            data,
        })
    }
}
