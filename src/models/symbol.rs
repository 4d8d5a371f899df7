//! Card symbols and parsed mana costs.

use serde::{Deserialize, Serialize};

use super::enums::Color;

/// A symbol that can appear in mana costs or rules text, e.g. `{T}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSymbol {
    /// Plaintext symbol
    pub symbol: String,
    /// SVG image of the symbol
    #[serde(default)]
    pub svg_uri: Option<String>,
    /// Alternate notation, e.g. `{GU}` for `{G/U}`
    #[serde(default)]
    pub loose_variant: Option<String>,
    /// English description
    pub english: String,
    /// Whether the symbol may be written in reverse order
    #[serde(default)]
    pub transposable: bool,
    /// Whether the symbol represents mana
    #[serde(default)]
    pub represents_mana: bool,
    /// Mana value of the symbol
    #[serde(default)]
    pub mana_value: Option<f64>,
    /// Deprecated alias of `mana_value`
    #[serde(default)]
    pub cmc: Option<f64>,
    /// Whether the symbol appears in mana costs
    #[serde(default)]
    pub appears_in_mana_costs: bool,
    /// Whether the symbol is hybrid
    #[serde(default)]
    pub hybrid: bool,
    /// Whether the symbol is Phyrexian
    #[serde(default)]
    pub phyrexian: bool,
    /// Whether the symbol only appears on Un-cards
    #[serde(default)]
    pub funny: bool,
    /// Colors of the symbol
    #[serde(default)]
    pub colors: Vec<Color>,
    /// Notations Gatherer uses for the symbol
    #[serde(default)]
    pub gatherer_alternates: Option<Vec<String>>,
}

/// A mana cost normalized by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManaCost {
    /// Normalized cost
    pub cost: String,
    /// Mana value
    pub cmc: f64,
    /// Colors of the cost
    #[serde(default)]
    pub colors: Vec<Color>,
    /// Whether the cost is colorless
    #[serde(default)]
    pub colorless: bool,
    /// Whether the cost is a single color
    #[serde(default)]
    pub monocolored: bool,
    /// Whether the cost has several colors
    #[serde(default)]
    pub multicolored: bool,
}
