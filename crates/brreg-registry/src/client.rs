//! HTTP client for the Brønnøysund Register Centre's entity API.
//!
//! Wraps `reqwest` with registry-specific status mapping and typed
//! deserialization into [`CompanyRecord`]. List endpoints are unwrapped from
//! their HAL envelope; the single-entity endpoint returns a bare record.

use std::time::Duration;

use brreg_core::{CompanyRecord, SearchMode};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

use crate::error::RegistryError;
use crate::failure::SearchFailure;
use crate::types::EntityPage;

/// Client for the public entity register.
///
/// The base URL comes from configuration, so tests point it at a mock server.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: Url,
}

impl RegistryClient {
    /// Creates a client for the registry API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RegistryError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so path segments append under the API
        // root instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| RegistryError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches one entity by its nine-digit organisation number.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] on 404.
    /// - [`RegistryError::ServiceUnavailable`] on any 5xx.
    /// - [`RegistryError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::Deserialize`] if the body is not a company record.
    pub async fn get_company(&self, org_number: &str) -> Result<CompanyRecord, RegistryError> {
        let url = self.build_url(&["enheter", org_number], &[]);
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| RegistryError::Deserialize {
            context: format!("enheter/{org_number}"),
            source: e,
        })
    }

    /// Lists entities whose name matches `name`, in server order.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryClient::get_company`].
    pub async fn search_by_name(
        &self,
        name: &str,
        size: u32,
    ) -> Result<Vec<CompanyRecord>, RegistryError> {
        self.list_entities("navn", name, size).await
    }

    /// Lists entities registered under the industry code `code`.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryClient::get_company`].
    pub async fn search_by_industry(
        &self,
        code: &str,
        size: u32,
    ) -> Result<Vec<CompanyRecord>, RegistryError> {
        self.list_entities("naeringskode", code, size).await
    }

    /// Runs one search in `mode` and classifies any failure.
    ///
    /// The query is trimmed first. An empty query never reaches the network.
    /// An empty result list is reported as [`SearchErrorKind::NotFound`], so a
    /// successful return always holds at least one record.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchFailure`] tagged with `mode`.
    ///
    /// [`SearchErrorKind::NotFound`]: crate::SearchErrorKind::NotFound
    pub async fn search(
        &self,
        query: &str,
        mode: SearchMode,
        page_size: u32,
    ) -> Result<Vec<CompanyRecord>, SearchFailure> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchFailure::empty_query(mode));
        }

        tracing::debug!(%mode, query, page_size, "registry search");
        let result = match mode {
            SearchMode::OrgNumber => self.get_company(query).await.map(|record| vec![record]),
            SearchMode::Name => self.search_by_name(query, page_size).await,
            SearchMode::Industry => self.search_by_industry(query, page_size).await,
        };

        match result {
            Ok(records) if records.is_empty() => Err(SearchFailure::not_found(mode)),
            Ok(records) => {
                tracing::debug!(%mode, count = records.len(), "registry search succeeded");
                Ok(records)
            }
            Err(err) => {
                tracing::warn!(%mode, error = %err, "registry search failed");
                Err(SearchFailure::from_registry_error(&err, mode))
            }
        }
    }

    async fn list_entities(
        &self,
        param: &str,
        value: &str,
        size: u32,
    ) -> Result<Vec<CompanyRecord>, RegistryError> {
        let size = size.to_string();
        let url = self.build_url(&["enheter"], &[(param, value), ("size", size.as_str())]);
        let body = self.request_json(&url).await?;
        let page: EntityPage =
            serde_json::from_value(body).map_err(|e| RegistryError::Deserialize {
                context: format!("enheter?{param}={value}"),
                source: e,
            })?;
        if let Some(info) = &page.page {
            tracing::debug!(
                total_elements = info.total_elements,
                total_pages = info.total_pages,
                "registry page"
            );
        }
        Ok(page.into_entities())
    }

    /// Appends path `segments` under the base URL, then percent-encodes `query`.
    fn build_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET, maps non-2xx statuses, and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, RegistryError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound {
                url: url.to_string(),
            });
        }
        if status.is_server_error() {
            return Err(RegistryError::ServiceUnavailable {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RegistryError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
