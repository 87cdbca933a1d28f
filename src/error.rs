//! Error types for lolrune.
//!
//! Callers see a small, closed set of error kinds: structural drift in the
//! scraped pages, an unknown champion lookup, or an unavailable upstream.

/// Error type for catalog building, page parsing, and client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page does not contain the expected elements in expected counts.
    ///
    /// Raised when a detail page has fewer than 7 rune links or fewer than
    /// 2 tree labels, when a title/description element is missing, or when
    /// an index entry's embedded loadout JSON fails to decode. Fatal for
    /// that single parse call; never produces a partial record.
    #[error("page structure mismatch: {message}{}", .url.as_deref().map(|u| format!(" ({u})")).unwrap_or_default())]
    StructuralMismatch {
        /// What was expected and what was found.
        message: String,
        /// The page the mismatch was observed on, when known.
        url: Option<String>,
    },

    /// The requested champion key is absent from the catalog.
    #[error("no champion matching {0:?}")]
    UnknownChampion(String),

    /// Runeforge responded with a non-success status.
    #[error("runeforge.gg failed to respond, status {status}")]
    UpstreamUnavailable {
        /// The HTTP status code of the failed response.
        status: u16,
    },

    /// Transport-level failure before any response was obtained.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog cache file could not be read or written.
    #[error("catalog cache i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog cache file could not be serialized.
    #[error("catalog cache encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a `StructuralMismatch` without a known source URL.
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        Error::StructuralMismatch {
            message: message.into(),
            url: None,
        }
    }

    /// Shorthand for a `StructuralMismatch` observed on a specific page.
    pub(crate) fn structure_at(message: impl Into<String>, url: Option<&str>) -> Self {
        Error::StructuralMismatch {
            message: message.into(),
            url: url.map(ToOwned::to_owned),
        }
    }
}

/// Result type alias for lolrune operations.
pub type Result<T> = std::result::Result<T, Error>;
