//! HTTP remote store.
//!
//! Speaks the RTDB-style REST dialect the analytics backend exposes:
//! `PUT {base}/{path}.json` writes, `POST` appends and returns
//! `{"name": "<key>"}`, `GET` reads (JSON `null` means absent). Every
//! operation is a single attempt; transport failures surface as
//! `DataAccess` errors for the caller to swallow or propagate.

use async_trait::async_trait;
use concierge_core::config::RemoteConfig;
use concierge_core::error::{ConciergeError, Result};
use concierge_core::store::RemoteStore;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response body of an append (`POST`) call.
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// A `RemoteStore` over an RTDB-style REST endpoint.
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    client: Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// Creates a store for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Creates a store from the remote configuration, if an endpoint is set.
    pub fn from_config(config: &RemoteConfig) -> Option<Self> {
        config.base_url.as_deref().map(Self::new)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }

    fn transport_error(op: &str, path: &str, err: reqwest::Error) -> ConciergeError {
        ConciergeError::data_access(format!("{op} {path}: {err}"))
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn save(&self, path: &str, value: Value) -> Result<()> {
        let url = self.endpoint(path);
        self.client
            .put(&url)
            .json(&value)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Self::transport_error("PUT", path, e))?;
        Ok(())
    }

    async fn push(&self, path: &str, value: Value) -> Result<String> {
        let url = self.endpoint(path);
        let response = self
            .client
            .post(&url)
            .json(&value)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Self::transport_error("POST", path, e))?;

        let body: PushResponse = response
            .json()
            .await
            .map_err(|e| Self::transport_error("POST", path, e))?;
        Ok(body.name)
    }

    async fn get(&self, path: &str) -> Result<Option<Value>> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Self::transport_error("GET", path, e))?;

        let value: Value = response
            .json()
            .await
            .map_err(|e| Self::transport_error("GET", path, e))?;

        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}
