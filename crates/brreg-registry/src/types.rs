//! Registry list-response envelope.
//!
//! Single-entity lookups return a bare [`CompanyRecord`]; list endpoints wrap
//! the records in a HAL `_embedded` block alongside paging metadata.

use brreg_core::CompanyRecord;
use serde::Deserialize;

/// `GET /enheter?...` response.
///
/// `_embedded` is omitted entirely by the registry when nothing matched.
#[derive(Debug, Deserialize)]
pub struct EntityPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedEntities>,
    #[serde(default)]
    pub page: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedEntities {
    #[serde(rename = "enheter", default)]
    pub entities: Vec<CompanyRecord>,
}

/// Paging metadata; only logged, since the control shows a single page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl EntityPage {
    /// Records in server order; empty when `_embedded` is missing.
    #[must_use]
    pub fn into_entities(self) -> Vec<CompanyRecord> {
        self.embedded.map(|e| e.entities).unwrap_or_default()
    }
}
