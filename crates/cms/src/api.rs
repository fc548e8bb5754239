//! REST client for the CMS content API.
//!
//! Wraps `GET {base}/api/{resource}` calls using [`reqwest`]. Responses come
//! in a `{ "data": ... }` envelope; [`CmsApi::fetch`] unwraps it into a typed
//! [`ContentResult`] that keeps "no content" apart from "request failed".

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CmsConfig;
use crate::query::to_query_string;

/// HTTP client for a single CMS instance.
#[derive(Debug, Clone)]
pub struct CmsApi {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

/// Errors from the content API layer.
#[derive(Debug, thiserror::Error)]
pub enum CmsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CMS returned a non-2xx status code.
    #[error("CMS API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outcome of a content query.
#[derive(Debug)]
pub enum ContentResult<T> {
    Found(T),
    /// The query succeeded but matched nothing.
    NotFound,
    /// The request failed; the content may well exist.
    FetchError(CmsApiError),
}

impl<T> ContentResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ContentResult<U> {
        match self {
            ContentResult::Found(value) => ContentResult::Found(f(value)),
            ContentResult::NotFound => ContentResult::NotFound,
            ContentResult::FetchError(err) => ContentResult::FetchError(err),
        }
    }

    /// Collapse to an `Option`, treating failures like missing content.
    pub fn found(self) -> Option<T> {
        match self {
            ContentResult::Found(value) => Some(value),
            ContentResult::NotFound | ContentResult::FetchError(_) => None,
        }
    }
}

/// The raw `{ "data": ... }` response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope {
    #[serde(default)]
    pub data: Value,
}

impl DataEnvelope {
    /// `{ "data": [] }`, the stand-in for any failed request.
    pub fn empty() -> Self {
        Self {
            data: Value::Array(Vec::new()),
        }
    }

    /// `data` is absent, `null`, or an empty list.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl CmsApi {
    /// Create a new API client for a CMS instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:1337`.
    /// * `api_token` - Bearer token sent with every request, if any.
    pub fn new(api_url: String, api_token: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_token)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
        }
    }

    /// Build a client from [`CmsConfig`], applying its request timeout.
    pub fn from_config(config: &CmsConfig) -> Result<Self, CmsApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.api_token.clone(),
        ))
    }

    /// Base URL of the CMS (also the host media URLs are relative to).
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full request URL: `{base}/api{path}` plus the serialized query.
    pub fn request_url(&self, path: &str, query: &Value) -> String {
        let path = path.trim_start_matches('/');
        let query_string = to_query_string(query);
        if query_string.is_empty() {
            format!("{}/api/{path}", self.api_url)
        } else {
            format!("{}/api/{path}?{query_string}", self.api_url)
        }
    }

    /// Fetch a resource and unwrap its `data` field into `T`.
    ///
    /// An absent, `null` or empty `data` is [`ContentResult::NotFound`].
    /// Network failures, non-2xx statuses and bodies that do not decode into
    /// `T` are [`ContentResult::FetchError`].
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &Value) -> ContentResult<T> {
        let envelope = match self.get_envelope(path, query).await {
            Ok(envelope) => envelope,
            Err(err) => return ContentResult::FetchError(err),
        };
        if envelope.is_empty() {
            return ContentResult::NotFound;
        }
        match serde_json::from_value(envelope.data) {
            Ok(value) => ContentResult::Found(value),
            Err(err) => {
                tracing::error!(path, error = %err, "CMS response did not decode");
                ContentResult::FetchError(err.into())
            }
        }
    }

    /// Fetch a collection. A single-object `data` becomes a one-element list
    /// and an empty `data` is an empty list rather than `NotFound`.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Value,
    ) -> ContentResult<Vec<T>> {
        let envelope = match self.get_envelope(path, query).await {
            Ok(envelope) => envelope,
            Err(err) => return ContentResult::FetchError(err),
        };
        let items = match envelope.data {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            single => vec![single],
        };
        let decoded: Result<Vec<T>, _> = items.into_iter().map(serde_json::from_value).collect();
        match decoded {
            Ok(list) => ContentResult::Found(list),
            Err(err) => {
                tracing::error!(path, error = %err, "CMS list response did not decode");
                ContentResult::FetchError(err.into())
            }
        }
    }

    /// Fetch the raw envelope, substituting `{ "data": [] }` for any failure.
    ///
    /// Callers of this method cannot tell an error from an empty result;
    /// prefer [`CmsApi::fetch`].
    pub async fn fetch_envelope(&self, path: &str, query: &Value) -> DataEnvelope {
        self.get_envelope(path, query)
            .await
            .unwrap_or_else(|_| DataEnvelope::empty())
    }

    // ---- private helpers ----

    /// Issue the GET and parse the envelope, logging any failure.
    async fn get_envelope(&self, path: &str, query: &Value) -> Result<DataEnvelope, CmsApiError> {
        let url = self.request_url(path, query);
        tracing::debug!(%url, "CMS request");

        let result = self.send(&url).await;
        if let Err(err) = &result {
            tracing::error!(%url, error = %err, "CMS fetch failed");
        }
        result
    }

    async fn send(&self, url: &str) -> Result<DataEnvelope, CmsApiError> {
        let mut request = self.client.get(url).header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CmsApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CmsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CmsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
