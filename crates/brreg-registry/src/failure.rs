//! Closed error categories for a failed search.
//!
//! The control chooses notification severity from [`SearchErrorKind`]; the
//! message is display text only and is never inspected.

use brreg_core::SearchMode;
use thiserror::Error;

use crate::error::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// Nothing matched (404, or an empty list page).
    NotFound,
    /// 5xx from the registry.
    Unavailable,
    /// The query was empty after trimming.
    InvalidInput,
    /// Other statuses, transport and decode failures.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SearchFailure {
    pub kind: SearchErrorKind,
    pub mode: SearchMode,
    pub message: String,
}

impl SearchFailure {
    #[must_use]
    pub fn empty_query(mode: SearchMode) -> Self {
        Self {
            kind: SearchErrorKind::InvalidInput,
            mode,
            message: "Please enter a search term".to_string(),
        }
    }

    #[must_use]
    pub fn not_found(mode: SearchMode) -> Self {
        let message = match mode {
            SearchMode::Name => "No companies found with that name",
            SearchMode::OrgNumber => "No company found with that organization number",
            SearchMode::Industry => "No companies found with that industry code",
        };
        Self {
            kind: SearchErrorKind::NotFound,
            mode,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn unavailable(mode: SearchMode) -> Self {
        Self {
            kind: SearchErrorKind::Unavailable,
            mode,
            message: "The registry service is currently unavailable. Please try again later."
                .to_string(),
        }
    }

    /// Maps a client error onto a category for `mode`.
    #[must_use]
    pub fn from_registry_error(err: &RegistryError, mode: SearchMode) -> Self {
        match err {
            RegistryError::NotFound { .. } => Self::not_found(mode),
            RegistryError::ServiceUnavailable { .. } => Self::unavailable(mode),
            RegistryError::UnexpectedStatus { status, .. } => Self {
                kind: SearchErrorKind::Unknown,
                mode,
                message: format!("Search failed with status {status}"),
            },
            RegistryError::Http(_)
            | RegistryError::Deserialize { .. }
            | RegistryError::InvalidBaseUrl(_) => Self {
                kind: SearchErrorKind::Unknown,
                mode,
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_tagged_by_mode() {
        let err = RegistryError::NotFound {
            url: "http://x/enheter/1".to_string(),
        };
        let failure = SearchFailure::from_registry_error(&err, SearchMode::OrgNumber);
        assert_eq!(failure.kind, SearchErrorKind::NotFound);
        assert_eq!(failure.mode, SearchMode::OrgNumber);
        assert!(failure.message.contains("organization number"));
    }

    #[test]
    fn server_errors_are_unavailable() {
        let err = RegistryError::ServiceUnavailable { status: 503 };
        let failure = SearchFailure::from_registry_error(&err, SearchMode::Name);
        assert_eq!(failure.kind, SearchErrorKind::Unavailable);
    }

    #[test]
    fn other_statuses_carry_the_code() {
        let err = RegistryError::UnexpectedStatus {
            status: 410,
            url: "http://x".to_string(),
        };
        let failure = SearchFailure::from_registry_error(&err, SearchMode::Name);
        assert_eq!(failure.kind, SearchErrorKind::Unknown);
        assert_eq!(failure.message, "Search failed with status 410");
    }

    #[test]
    fn decode_errors_keep_their_message() {
        let source = serde_json::from_str::<()>("nope").unwrap_err();
        let err = RegistryError::Deserialize {
            context: "enheter".to_string(),
            source,
        };
        let failure = SearchFailure::from_registry_error(&err, SearchMode::Industry);
        assert_eq!(failure.kind, SearchErrorKind::Unknown);
        assert!(failure.message.starts_with("JSON deserialization error for enheter"));
    }
}
