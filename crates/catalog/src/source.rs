use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use {async_trait::async_trait, bacbot_config::CatalogConfig, tracing::debug};

use crate::{
    error::{Error, Result},
    record::CourseRecord,
};

/// Where course records come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full, unfiltered list of course records in source order.
    async fn fetch_all(&self) -> Result<Vec<CourseRecord>>;
}

/// Reads the catalog from the backend's `GET /api/courses/` endpoint.
pub struct HttpCatalogSource {
    http: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::invalid_config("catalog base_url is empty"));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs.max(1)))
            .build()
            .map_err(Error::invalid_config)?;
        Ok(Self {
            http,
            url: config.courses_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<CourseRecord>> {
        let resp = self.http.get(&self.url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::unavailable(format!(
                "GET {} returned {status}: {body}",
                self.url
            )));
        }
        let body = resp.bytes().await?;
        let records: Vec<CourseRecord> = serde_json::from_slice(&body)?;
        debug!(url = %self.url, count = records.len(), "fetched catalog");
        Ok(records)
    }
}

/// A fixed, in-process catalog. Useful for local runs without a backend.
#[derive(Clone, Default)]
pub struct InMemoryCatalogSource {
    records: Arc<RwLock<Vec<CourseRecord>>>,
}

impl InMemoryCatalogSource {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Swap the whole record list; later fetches observe the new list.
    pub fn replace(&self, records: Vec<CourseRecord>) {
        let mut guard = self.records.write().unwrap_or_else(|e| e.into_inner());
        *guard = records;
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<CourseRecord>> {
        let guard = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }
}
