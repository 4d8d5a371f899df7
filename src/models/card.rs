//! Card models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    Color, Component, Finish, Frame, FrameEffect, ImageStatus, Lang, Layout, Legality, Rarity,
};
use super::primitives::Date;

/// A single printing of a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    // Core fields
    /// Scryfall ID of this printing
    pub id: String,
    /// Oracle ID shared by all printings; absent on reversible cards
    #[serde(default)]
    pub oracle_id: Option<String>,
    /// Printed language
    pub lang: Lang,
    /// MTG Arena ID
    #[serde(default)]
    pub arena_id: Option<u64>,
    /// Multiverse IDs on Gatherer
    #[serde(default)]
    pub multiverse_ids: Vec<u64>,
    /// MTGO ID
    #[serde(default)]
    pub mtgo_id: Option<u64>,
    /// MTGO foil ID
    #[serde(default)]
    pub mtgo_foil_id: Option<u64>,
    /// TCGplayer product ID
    #[serde(default)]
    pub tcgplayer_id: Option<u64>,
    /// TCGplayer product ID of the etched version
    #[serde(default)]
    pub tcgplayer_etched_id: Option<u64>,
    /// Cardmarket product ID
    #[serde(default)]
    pub cardmarket_id: Option<u64>,
    /// API URI of this card
    pub uri: String,
    /// Scryfall web page of this card
    pub scryfall_uri: String,
    /// API URI listing all printings
    pub prints_search_uri: String,
    /// API URI of this card's rulings
    pub rulings_uri: String,
    /// Layout
    pub layout: Layout,

    // Gameplay fields
    /// Name; faces are joined with ` // `
    pub name: String,
    /// Localized name
    #[serde(default)]
    pub printed_name: Option<String>,
    /// Mana value
    #[serde(default)]
    pub cmc: f64,
    /// Type line; absent on some multi-faced cards
    #[serde(default)]
    pub type_line: Option<String>,
    /// Localized type line
    #[serde(default)]
    pub printed_type_line: Option<String>,
    /// Oracle text; absent on multi-faced cards
    #[serde(default)]
    pub oracle_text: Option<String>,
    /// Localized text
    #[serde(default)]
    pub printed_text: Option<String>,
    /// Mana cost; absent on multi-faced cards
    #[serde(default)]
    pub mana_cost: Option<String>,
    /// Power
    #[serde(default)]
    pub power: Option<String>,
    /// Toughness
    #[serde(default)]
    pub toughness: Option<String>,
    /// Starting loyalty
    #[serde(default)]
    pub loyalty: Option<String>,
    /// Battle defense
    #[serde(default)]
    pub defense: Option<String>,
    /// Vanguard life modifier
    #[serde(default)]
    pub life_modifier: Option<String>,
    /// Vanguard hand modifier
    #[serde(default)]
    pub hand_modifier: Option<String>,
    /// Colors
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    /// Color indicator
    #[serde(default)]
    pub color_indicator: Option<Vec<Color>>,
    /// Color identity
    #[serde(default)]
    pub color_identity: Vec<Color>,
    /// Keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Mana this card can produce
    #[serde(default)]
    pub produced_mana: Option<Vec<Color>>,
    /// Related cards (tokens, meld parts, combo pieces)
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedCard>>,
    /// Faces of multi-faced cards
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
    /// Format legalities
    pub legalities: Legalities,
    /// Whether the card is on the Reserved List
    #[serde(default)]
    pub reserved: bool,
    /// EDHREC popularity rank
    #[serde(default)]
    pub edhrec_rank: Option<u64>,
    /// Penny Dreadful popularity rank
    #[serde(default)]
    pub penny_rank: Option<u64>,

    // Print fields
    /// Set code
    pub set: String,
    /// Set name
    pub set_name: String,
    /// Set ID
    pub set_id: String,
    /// API URI of the set
    pub set_uri: String,
    /// API URI searching the set
    pub set_search_uri: String,
    /// Scryfall web page of the set
    pub scryfall_set_uri: String,
    /// Collector number; may contain non-digits
    pub collector_number: String,
    /// Rarity
    pub rarity: Rarity,
    /// Release date of this printing
    pub released_at: Date,
    /// Whether this is a reprint
    #[serde(default)]
    pub reprint: bool,
    /// Whether this is a digital-only printing
    #[serde(default)]
    pub digital: bool,
    /// Whether a foil version exists
    #[serde(default)]
    pub foil: bool,
    /// Whether a non-foil version exists
    #[serde(default)]
    pub nonfoil: bool,
    /// Available finishes
    #[serde(default)]
    pub finishes: Vec<Finish>,
    /// Whether the card is oversized
    #[serde(default)]
    pub oversized: bool,
    /// Whether this is a promotional printing
    #[serde(default)]
    pub promo: bool,
    /// Promo categories
    #[serde(default)]
    pub promo_types: Vec<String>,
    /// Whether it is found in boosters
    #[serde(default)]
    pub booster: bool,
    /// Whether Scryfall has a high-resolution image
    #[serde(default)]
    pub highres_image: bool,
    /// Image quality
    #[serde(default)]
    pub image_status: Option<ImageStatus>,
    /// Image URIs; absent when faces carry their own
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    /// Flavor text
    #[serde(default)]
    pub flavor_text: Option<String>,
    /// Flavor name
    #[serde(default)]
    pub flavor_name: Option<String>,
    /// Artist
    #[serde(default)]
    pub artist: Option<String>,
    /// Illustration ID
    #[serde(default)]
    pub illustration_id: Option<String>,
    /// Border color
    #[serde(default)]
    pub border_color: Option<String>,
    /// Frame edition
    #[serde(default)]
    pub frame: Option<Frame>,
    /// Frame treatments
    #[serde(default)]
    pub frame_effects: Vec<FrameEffect>,
    /// Whether the art covers the whole card
    #[serde(default)]
    pub full_art: bool,
    /// Whether the art is textless
    #[serde(default)]
    pub textless: bool,
    /// Watermark
    #[serde(default)]
    pub watermark: Option<String>,
    /// Preview information
    #[serde(default)]
    pub preview: Option<Preview>,
    /// Story spotlight number
    #[serde(default)]
    pub story_spotlight_number: Option<u64>,
    /// Story spotlight URI
    #[serde(default)]
    pub story_spotlight_uri: Option<String>,
    /// Attraction lights
    #[serde(default)]
    pub attraction_lights: Option<Vec<u8>>,
    /// Whether the card should be displayed with a content warning
    #[serde(default)]
    pub content_warning: Option<bool>,
    /// Prices
    #[serde(default)]
    pub prices: Prices,
    /// Links to other resources
    #[serde(default)]
    pub related_uris: RelatedUris,
    /// Purchase links
    #[serde(default)]
    pub purchase_uris: Option<PurchaseUris>,
}

impl Card {
    /// Image URIs of the card, or of its front face for double-faced cards.
    pub fn front_image(&self) -> Option<&ImageUris> {
        self.image_uris.as_ref().or_else(|| {
            self.card_faces
                .as_ref()
                .and_then(|faces| faces.first())
                .and_then(|face| face.image_uris.as_ref())
        })
    }

    /// Legality in a format by its API name, e.g. `"commander"`.
    pub fn legality(&self, format: &str) -> Legality {
        self.legalities.get(format)
    }
}

/// A card related to another one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedCard {
    /// Scryfall ID of the related card
    pub id: String,
    /// Relationship
    pub component: Component,
    /// Name
    pub name: String,
    /// Type line
    pub type_line: String,
    /// API URI
    pub uri: String,
}

/// One face of a multi-faced card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFace {
    /// Face name
    pub name: String,
    /// Localized name
    #[serde(default)]
    pub printed_name: Option<String>,
    /// Type line
    #[serde(default)]
    pub type_line: Option<String>,
    /// Localized type line
    #[serde(default)]
    pub printed_type_line: Option<String>,
    /// Oracle text
    #[serde(default)]
    pub oracle_text: Option<String>,
    /// Localized text
    #[serde(default)]
    pub printed_text: Option<String>,
    /// Mana cost
    #[serde(default)]
    pub mana_cost: String,
    /// Mana value of this face
    #[serde(default)]
    pub cmc: Option<f64>,
    /// Colors
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    /// Color indicator
    #[serde(default)]
    pub color_indicator: Option<Vec<Color>>,
    /// Power
    #[serde(default)]
    pub power: Option<String>,
    /// Toughness
    #[serde(default)]
    pub toughness: Option<String>,
    /// Loyalty
    #[serde(default)]
    pub loyalty: Option<String>,
    /// Defense
    #[serde(default)]
    pub defense: Option<String>,
    /// Face layout
    #[serde(default)]
    pub layout: Option<Layout>,
    /// Oracle ID for reversible cards
    #[serde(default)]
    pub oracle_id: Option<String>,
    /// Flavor text
    #[serde(default)]
    pub flavor_text: Option<String>,
    /// Artist
    #[serde(default)]
    pub artist: Option<String>,
    /// Illustration ID
    #[serde(default)]
    pub illustration_id: Option<String>,
    /// Image URIs
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// Image URIs in the sizes Scryfall serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUris {
    /// 146 × 204 JPG
    #[serde(default)]
    pub small: Option<String>,
    /// 488 × 680 JPG
    #[serde(default)]
    pub normal: Option<String>,
    /// 672 × 936 JPG
    #[serde(default)]
    pub large: Option<String>,
    /// 745 × 1040 transparent PNG
    #[serde(default)]
    pub png: Option<String>,
    /// Art-only crop
    #[serde(default)]
    pub art_crop: Option<String>,
    /// Full card with corners cropped
    #[serde(default)]
    pub border_crop: Option<String>,
}

/// Daily price snapshot. Missing prices are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    /// USD
    #[serde(default)]
    pub usd: Option<Decimal>,
    /// USD foil
    #[serde(default)]
    pub usd_foil: Option<Decimal>,
    /// USD etched
    #[serde(default)]
    pub usd_etched: Option<Decimal>,
    /// EUR
    #[serde(default)]
    pub eur: Option<Decimal>,
    /// EUR foil
    #[serde(default)]
    pub eur_foil: Option<Decimal>,
    /// EUR etched
    #[serde(default)]
    pub eur_etched: Option<Decimal>,
    /// MTGO tickets
    #[serde(default)]
    pub tix: Option<Decimal>,
}

/// Legality per format.
///
/// The common constructed formats are named fields; any other format the
/// API reports lands in [`other`](Self::other).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Legalities {
    /// Standard
    #[serde(default)]
    pub standard: Legality,
    /// Future standard
    #[serde(default)]
    pub future: Legality,
    /// Pioneer
    #[serde(default)]
    pub pioneer: Legality,
    /// Modern
    #[serde(default)]
    pub modern: Legality,
    /// Legacy
    #[serde(default)]
    pub legacy: Legality,
    /// Pauper
    #[serde(default)]
    pub pauper: Legality,
    /// Vintage
    #[serde(default)]
    pub vintage: Legality,
    /// Penny Dreadful
    #[serde(default)]
    pub penny: Legality,
    /// Commander
    #[serde(default)]
    pub commander: Legality,
    /// Duel Commander
    #[serde(default)]
    pub duel: Legality,
    /// All other formats
    #[serde(flatten)]
    pub other: HashMap<String, Legality>,
}

impl Legalities {
    /// Legality in a format by its API name; `NotLegal` if unlisted.
    pub fn get(&self, format: &str) -> Legality {
        match format {
            "standard" => self.standard,
            "future" => self.future,
            "pioneer" => self.pioneer,
            "modern" => self.modern,
            "legacy" => self.legacy,
            "pauper" => self.pauper,
            "vintage" => self.vintage,
            "penny" => self.penny,
            "commander" => self.commander,
            "duel" => self.duel,
            other => self.other.get(other).copied().unwrap_or_default(),
        }
    }
}

/// Links to third-party resources about the card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedUris {
    /// Gatherer page
    #[serde(default)]
    pub gatherer: Option<String>,
    /// TCGplayer Infinite articles
    #[serde(default)]
    pub tcgplayer_infinite_articles: Option<String>,
    /// TCGplayer Infinite decks
    #[serde(default)]
    pub tcgplayer_infinite_decks: Option<String>,
    /// EDHREC page
    #[serde(default)]
    pub edhrec: Option<String>,
}

/// Links to buy the card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseUris {
    /// TCGplayer
    #[serde(default)]
    pub tcgplayer: Option<String>,
    /// Cardmarket
    #[serde(default)]
    pub cardmarket: Option<String>,
    /// Cardhoarder
    #[serde(default)]
    pub cardhoarder: Option<String>,
}

/// Where and when a card was previewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    /// Preview date
    #[serde(default)]
    pub previewed_at: Option<Date>,
    /// Link to the preview
    #[serde(default)]
    pub source_uri: Option<String>,
    /// Name of the previewer
    #[serde(default)]
    pub source: Option<String>,
}

/// One page of card search results.
///
/// Use [`CardsService::next_page`](crate::api::CardsService::next_page) to
/// fetch the following page; nothing is fetched automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardList {
    /// Cards on this page
    pub data: Vec<Card>,
    /// Whether another page follows
    #[serde(default)]
    pub has_more: bool,
    /// API URI of the next page
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total number of cards matching the search
    #[serde(default)]
    pub total_cards: Option<u64>,
    /// Non-fatal issues with the query
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Identifies one card in a collection request.
///
/// Build with one of the constructors; each matches a combination the API
/// accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdentifier {
    /// Scryfall ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// MTGO ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtgo_id: Option<u64>,
    /// Multiverse ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiverse_id: Option<u64>,
    /// Oracle ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_id: Option<String>,
    /// Illustration ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration_id: Option<String>,
    /// Card name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Set code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    /// Collector number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,
}

impl CardIdentifier {
    /// By Scryfall ID.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// By MTGO ID.
    pub fn mtgo_id(id: u64) -> Self {
        Self {
            mtgo_id: Some(id),
            ..Default::default()
        }
    }

    /// By multiverse ID.
    pub fn multiverse_id(id: u64) -> Self {
        Self {
            multiverse_id: Some(id),
            ..Default::default()
        }
    }

    /// By Oracle ID.
    pub fn oracle_id(id: impl Into<String>) -> Self {
        Self {
            oracle_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// By illustration ID.
    pub fn illustration_id(id: impl Into<String>) -> Self {
        Self {
            illustration_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// By exact name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// By name within a set.
    pub fn name_in_set(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            set: Some(set.into()),
            ..Default::default()
        }
    }

    /// By set code and collector number.
    pub fn set_and_number(set: impl Into<String>, collector_number: impl Into<String>) -> Self {
        Self {
            set: Some(set.into()),
            collector_number: Some(collector_number.into()),
            ..Default::default()
        }
    }
}

/// Result of a collection lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse {
    /// Identifiers that matched no card
    #[serde(default)]
    pub not_found: Vec<CardIdentifier>,
    /// Matched cards, in request order
    pub data: Vec<Card>,
}
