//! Catalogs of Magic datapoints.

use serde::{Deserialize, Serialize};

/// A list of strings, such as all known artist names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// API URI of this catalog; absent on autocomplete results
    #[serde(default)]
    pub uri: Option<String>,
    /// Number of entries
    pub total_values: u64,
    /// The entries
    pub data: Vec<String>,
}

/// Catalogs the API serves under `catalog/<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// All card names
    CardNames,
    /// All artist names
    ArtistNames,
    /// Words that could appear in a card name
    WordBank,
    /// Supertypes
    Supertypes,
    /// Card types
    CardTypes,
    /// Creature types
    CreatureTypes,
    /// Planeswalker types
    PlaneswalkerTypes,
    /// Land types
    LandTypes,
    /// Artifact types
    ArtifactTypes,
    /// Battle types
    BattleTypes,
    /// Enchantment types
    EnchantmentTypes,
    /// Spell types
    SpellTypes,
    /// Power values
    Powers,
    /// Toughness values
    Toughnesses,
    /// Loyalty values
    Loyalties,
    /// Keyword abilities
    KeywordAbilities,
    /// Keyword actions
    KeywordActions,
    /// Ability words
    AbilityWords,
    /// Flavor words
    FlavorWords,
    /// Watermarks
    Watermarks,
}

impl CatalogKind {
    /// Every catalog, in API documentation order.
    pub const ALL: [CatalogKind; 20] = [
        CatalogKind::CardNames,
        CatalogKind::ArtistNames,
        CatalogKind::WordBank,
        CatalogKind::Supertypes,
        CatalogKind::CardTypes,
        CatalogKind::CreatureTypes,
        CatalogKind::PlaneswalkerTypes,
        CatalogKind::LandTypes,
        CatalogKind::ArtifactTypes,
        CatalogKind::BattleTypes,
        CatalogKind::EnchantmentTypes,
        CatalogKind::SpellTypes,
        CatalogKind::Powers,
        CatalogKind::Toughnesses,
        CatalogKind::Loyalties,
        CatalogKind::KeywordAbilities,
        CatalogKind::KeywordActions,
        CatalogKind::AbilityWords,
        CatalogKind::FlavorWords,
        CatalogKind::Watermarks,
    ];

    /// Path segment of the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::CardNames => "card-names",
            CatalogKind::ArtistNames => "artist-names",
            CatalogKind::WordBank => "word-bank",
            CatalogKind::Supertypes => "supertypes",
            CatalogKind::CardTypes => "card-types",
            CatalogKind::CreatureTypes => "creature-types",
            CatalogKind::PlaneswalkerTypes => "planeswalker-types",
            CatalogKind::LandTypes => "land-types",
            CatalogKind::ArtifactTypes => "artifact-types",
            CatalogKind::BattleTypes => "battle-types",
            CatalogKind::EnchantmentTypes => "enchantment-types",
            CatalogKind::SpellTypes => "spell-types",
            CatalogKind::Powers => "powers",
            CatalogKind::Toughnesses => "toughnesses",
            CatalogKind::Loyalties => "loyalties",
            CatalogKind::KeywordAbilities => "keyword-abilities",
            CatalogKind::KeywordActions => "keyword-actions",
            CatalogKind::AbilityWords => "ability-words",
            CatalogKind::FlavorWords => "flavor-words",
            CatalogKind::Watermarks => "watermarks",
        }
    }
}
