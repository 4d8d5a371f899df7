//! List envelope returned by Scryfall's list endpoints.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::{Error, Result};

/// Wrapper around a list endpoint's payload.
///
/// Only `data` is handed back to callers. The pagination fields are parsed
/// so malformed envelopes are rejected, but single-page calls discard them.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    data: Box<RawValue>,
    #[serde(default)]
    #[allow(dead_code)]
    has_more: bool,
    #[serde(default)]
    #[allow(dead_code)]
    next_page: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    total_cards: Option<u64>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl ListEnvelope {
    /// Decode the payload into the caller's element type.
    pub(crate) fn into_items<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        if !self.warnings.is_empty() {
            tracing::debug!(warnings = ?self.warnings, "list response carried warnings");
        }
        serde_json::from_str(self.data.get()).map_err(Error::Decode)
    }
}
