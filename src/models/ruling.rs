//! Card rulings.

use serde::{Deserialize, Serialize};

use super::enums::RulingSource;
use super::primitives::Date;

/// An Oracle ruling or Scryfall note about a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruling {
    /// Oracle ID the ruling applies to
    pub oracle_id: String,
    /// Who published the ruling
    pub source: RulingSource,
    /// Publication date
    pub published_at: Date,
    /// Ruling text
    pub comment: String,
}
