//! Set models.

use serde::{Deserialize, Serialize};

use super::enums::SetType;
use super::primitives::Date;

/// A set of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Set {
    /// Scryfall ID
    pub id: String,
    /// Set code, e.g. `xln`
    pub code: String,
    /// MTGO code
    #[serde(default)]
    pub mtgo_code: Option<String>,
    /// MTG Arena code
    #[serde(default)]
    pub arena_code: Option<String>,
    /// TCGplayer group ID
    #[serde(default)]
    pub tcgplayer_id: Option<u64>,
    /// English name
    pub name: String,
    /// Kind of set
    pub set_type: SetType,
    /// Release date
    #[serde(default)]
    pub released_at: Option<Date>,
    /// Block code
    #[serde(default)]
    pub block_code: Option<String>,
    /// Block name
    #[serde(default)]
    pub block: Option<String>,
    /// Code of the parent set
    #[serde(default)]
    pub parent_set_code: Option<String>,
    /// Number of cards in the set
    pub card_count: u32,
    /// Size of the printed checklist
    #[serde(default)]
    pub printed_size: Option<u32>,
    /// Whether the set is digital-only
    #[serde(default)]
    pub digital: bool,
    /// Whether the set only has foils
    #[serde(default)]
    pub foil_only: bool,
    /// Whether the set only has non-foils
    #[serde(default)]
    pub nonfoil_only: bool,
    /// Scryfall web page
    pub scryfall_uri: String,
    /// API URI
    pub uri: String,
    /// Set symbol SVG
    pub icon_svg_uri: String,
    /// API URI searching this set's cards
    pub search_uri: String,
}
