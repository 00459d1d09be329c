//! Elasticsearch Client
//!
//! A minimal REST client covering the four engine operations the gateway needs.
//! Calls are made exactly once: there is no retry or backoff, a failed call is
//! reported to the caller as-is.

use super::types::{EngineResponseError, IndexMapping, SearchQuery};
use crate::config::{Config, normalize_base_url};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// The operations the gateway performs against a search engine.
///
/// Responses are returned as raw JSON so handlers can relay them verbatim.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// `Ok(false)` when the engine reports the index as missing.
    async fn index_exists(&self, index: &str) -> Result<bool>;

    async fn create_index(&self, index: &str, mapping: &IndexMapping) -> Result<Value>;

    /// Stores `document` under an engine-generated id.
    async fn index_document(&self, index: &str, document: &Value) -> Result<Value>;

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Value>;
}

/// Handle shared by every request handler.
pub type SharedEngine = Arc<dyn SearchEngine>;

#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ElasticsearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match config.request_timeout {
            Some(timeout) => Self::with_timeout(&config.elasticsearch_url, timeout),
            None => Ok(Self::new(&config.elasticsearch_url)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Turns a response into JSON, or into an `EngineResponseError` for non-2xx statuses.
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("failed to read engine response body")?;

    if !status.is_success() {
        return Err(EngineResponseError::from_body(status.as_u16(), &body).into());
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body).context("engine returned invalid JSON")
}

#[async_trait]
impl SearchEngine for ElasticsearchClient {
    async fn index_exists(&self, index: &str) -> Result<bool> {
        let response = self.http_client.head(self.url(index)).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else if status.is_success() {
            Ok(true)
        } else {
            Err(EngineResponseError::from_body(status.as_u16(), "").into())
        }
    }

    async fn create_index(&self, index: &str, mapping: &IndexMapping) -> Result<Value> {
        let response = self
            .http_client
            .put(self.url(index))
            .json(mapping)
            .send()
            .await?;

        read_json(response).await
    }

    async fn index_document(&self, index: &str, document: &Value) -> Result<Value> {
        let response = self
            .http_client
            .post(self.url(&format!("{}/_doc", index)))
            .json(document)
            .send()
            .await?;

        read_json(response).await
    }

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Value> {
        tracing::debug!("Searching {} for {:?}", index, query.term());

        let response = self
            .http_client
            .post(self.url(&format!("{}/_search", index)))
            .json(query)
            .send()
            .await?;

        read_json(response).await
    }
}
