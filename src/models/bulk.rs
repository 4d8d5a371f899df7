//! Bulk data file metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a downloadable bulk data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkData {
    /// Scryfall ID
    pub id: String,
    /// Kind of file, e.g. `oracle_cards`
    #[serde(rename = "type")]
    pub bulk_type: String,
    /// When the file was last regenerated
    pub updated_at: DateTime<Utc>,
    /// Human-readable name
    pub name: String,
    /// API URI of this object
    pub uri: String,
    /// Description of the contents
    pub description: String,
    /// Size in bytes
    pub size: u64,
    /// Where to download the file
    pub download_uri: String,
    /// MIME type of the file
    pub content_type: String,
    /// Transfer encoding of the file
    pub content_encoding: String,
}
