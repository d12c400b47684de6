//! Remote product store client.
//!
//! The hosted store is a black box queried by SKU: a full snapshot read, an
//! upsert-by-SKU write path for admin edits, and (transport-side) a change
//! feed that callers bridge into [`crate::delta_channel`].

use async_trait::async_trait;

use vitrine_catalog::RemoteRecord;

use crate::error::SyncError;

/// Read/write boundary to the remote product store.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Fetch every price/stock record, keyed by SKU.
    async fn fetch_all(&self) -> Result<Vec<RemoteRecord>, SyncError>;

    /// Upsert one record by SKU (admin edit write path).
    async fn upsert(&self, record: &RemoteRecord) -> Result<(), SyncError>;
}

/// Validated remote endpoint configuration.
///
/// Mirrors the guard the storefront applies before constructing a client: a
/// plausible HTTP URL and a non-trivial API key, or no client at all (the
/// catalog then runs on seed data, permanently offline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    base_url: String,
    api_key: String,
}

impl RemoteEndpoint {
    /// Accept the configuration only when it looks usable.
    pub fn validate(url: &str, key: &str) -> Option<Self> {
        let url = url.trim();
        let key = key.trim();
        if url.len() > 5 && url.starts_with("http") && key.len() > 10 {
            Some(Self {
                base_url: url.trim_end_matches('/').to_owned(),
                api_key: key.to_owned(),
            })
        } else {
            None
        }
    }

    /// Read `VITRINE_REMOTE_URL` / `VITRINE_REMOTE_KEY` from the environment.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("VITRINE_REMOTE_URL").ok()?;
        let key = std::env::var("VITRINE_REMOTE_KEY").ok()?;
        Self::validate(&url, &key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// HTTP implementation of [`RemoteCatalog`].
pub struct HttpRemoteCatalog {
    endpoint: RemoteEndpoint,
    client: reqwest::Client,
}

impl HttpRemoteCatalog {
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from the environment, or `None` when unconfigured.
    pub fn from_env() -> Option<Self> {
        RemoteEndpoint::from_env().map(Self::new)
    }

    /// Check connectivity by hitting the health endpoint.
    pub async fn check_connectivity(&self) -> bool {
        let url = format!("{}/health", self.endpoint.base_url);
        self.client.get(&url).send().await.is_ok()
    }
}

#[async_trait]
impl RemoteCatalog for HttpRemoteCatalog {
    async fn fetch_all(&self) -> Result<Vec<RemoteRecord>, SyncError> {
        let url = format!("{}/products", self.endpoint.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.endpoint.api_key)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SyncError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json::<Vec<RemoteRecord>>()
            .await
            .map_err(|e| SyncError::Parse(e.to_string()))
    }

    async fn upsert(&self, record: &RemoteRecord) -> Result<(), SyncError> {
        let url = format!("{}/products", self.endpoint.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(record)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SyncError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }
        Ok(())
    }
}
