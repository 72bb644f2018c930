//! Read-only client for the upstream periodic-table document.
//!
//! The upstream is an opaque key-value document store reachable over HTTP.
//! One GET is issued per lookup with no caching or retry; connection reuse
//! is whatever the pooled client provides.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};
use crate::periodic::Element;

/// The full upstream document, keyed by chemical symbol.
pub type PeriodicTable = HashMap<String, Element>;

/// Handle to the upstream data source.
///
/// Built once at startup and passed into the router; never reassigned
/// afterwards, so no global mutable state is involved.
#[derive(Debug, Clone)]
pub struct DataSourceClient {
    http: reqwest::Client,
    url: String,
}

impl DataSourceClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the whole upstream document.
    pub async fn fetch_table(&self) -> ApiResult<PeriodicTable> {
        let table = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<PeriodicTable>()
            .await?;

        Ok(table)
    }

    /// Look up one element by symbol.
    ///
    /// A symbol absent from the document is an explicit error, not a hole
    /// the caller can fall through.
    pub async fn element(&self, symbol: &str) -> ApiResult<Element> {
        let mut table = self.fetch_table().await?;
        table
            .remove(symbol)
            .ok_or_else(|| ApiError::ElementNotFound(symbol.to_string()))
    }
}
