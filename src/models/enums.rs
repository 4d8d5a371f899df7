//! Enumeration types for the Scryfall API.
//!
//! Every enum carries an `Unknown` fallback so new values added by the API
//! do not break decoding.

use serde::{Deserialize, Serialize};

/// A color of Magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// White
    #[serde(rename = "W")]
    White,
    /// Blue
    #[serde(rename = "U")]
    Blue,
    /// Black
    #[serde(rename = "B")]
    Black,
    /// Red
    #[serde(rename = "R")]
    Red,
    /// Green
    #[serde(rename = "G")]
    Green,
    /// Colorless, only seen in `produced_mana`
    #[serde(rename = "C")]
    Colorless,
    /// Unknown color
    #[serde(other)]
    Unknown,
}

/// Language a card is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// German
    De,
    /// Italian
    It,
    /// Portuguese
    Pt,
    /// Japanese
    Ja,
    /// Korean
    Ko,
    /// Russian
    Ru,
    /// Simplified Chinese
    Zhs,
    /// Traditional Chinese
    Zht,
    /// Hebrew
    He,
    /// Latin
    La,
    /// Ancient Greek
    Grc,
    /// Arabic
    Ar,
    /// Sanskrit
    Sa,
    /// Phyrexian
    Ph,
    /// Unknown language
    #[serde(other)]
    Unknown,
}

impl Lang {
    /// The language code used in URLs, e.g. `ja`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::It => "it",
            Lang::Pt => "pt",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
            Lang::Ru => "ru",
            Lang::Zhs => "zhs",
            Lang::Zht => "zht",
            Lang::He => "he",
            Lang::La => "la",
            Lang::Grc => "grc",
            Lang::Ar => "ar",
            Lang::Sa => "sa",
            Lang::Ph => "ph",
            Lang::Unknown => "unknown",
        }
    }
}

/// Card layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// A standard card
    Normal,
    /// Split-faced card
    Split,
    /// Cards that invert vertically with the flip keyword
    Flip,
    /// Double-sided card that transforms
    Transform,
    /// Modal double-faced card
    ModalDfc,
    /// Meld card part
    Meld,
    /// Level Up card
    Leveler,
    /// Class-type enchantment
    Class,
    /// Case-type enchantment
    Case,
    /// Saga
    Saga,
    /// Card with an Adventure spell
    Adventure,
    /// Mutate card
    Mutate,
    /// Prototype card
    Prototype,
    /// Battle
    Battle,
    /// Plane or phenomenon
    Planar,
    /// Scheme
    Scheme,
    /// Vanguard
    Vanguard,
    /// Token
    Token,
    /// Double-faced token
    DoubleFacedToken,
    /// Emblem
    Emblem,
    /// Augment
    Augment,
    /// Host
    Host,
    /// Art Series collectable
    ArtSeries,
    /// Card with two sides that are unrelated
    ReversibleCard,
    /// Unknown layout
    #[serde(other)]
    Unknown,
}

impl Layout {
    /// Returns `true` if the card has two physical faces.
    pub fn is_double_faced(&self) -> bool {
        matches!(
            self,
            Layout::Transform
                | Layout::ModalDfc
                | Layout::DoubleFacedToken
                | Layout::ArtSeries
                | Layout::ReversibleCard
        )
    }
}

/// Legality of a card in a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    /// Legal
    Legal,
    /// Not legal
    #[default]
    NotLegal,
    /// Banned
    Banned,
    /// Restricted to one copy
    Restricted,
    /// Unknown legality
    #[serde(other)]
    Unknown,
}

/// Card frame edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// The original frame
    #[serde(rename = "1993")]
    Frame1993,
    /// Updated classic frame
    #[serde(rename = "1997")]
    Frame1997,
    /// The "modern" frame
    #[serde(rename = "2003")]
    Frame2003,
    /// Holofoil-stamp frame
    #[serde(rename = "2015")]
    Frame2015,
    /// Time Spiral "timeshifted" frame
    #[serde(rename = "future")]
    Future,
    /// Unknown frame
    #[serde(other)]
    Unknown,
}

/// Additional frame treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameEffect {
    /// Legendary crown
    Legendary,
    /// Miracle frame
    Miracle,
    /// Nyx-touched enchantment frame
    Enchantment,
    /// Draft-matters frame
    Draft,
    /// Devoid frame
    Devoid,
    /// Odyssey tombstone mark
    Tombstone,
    /// Colorshifted frame
    ColorShifted,
    /// FNM-style inverted frame
    Inverted,
    /// Sun and moon transform marks
    SunMoonDfc,
    /// Compass and land transform marks
    CompassLandDfc,
    /// Origins planeswalker transform marks
    OriginPwDfc,
    /// Moon and Eldrazi transform marks
    MoonEldraziDfc,
    /// Waxing and waning moon transform marks
    WaxingAndWaningMoonDfc,
    /// Showcase frame
    Showcase,
    /// Extended art frame
    ExtendedArt,
    /// Companion frame
    Companion,
    /// Etched foil treatment
    Etched,
    /// Snowy frame
    Snow,
    /// Lesson type line
    Lesson,
    /// Shattered glass frame
    ShatteredGlass,
    /// More Than Meets the Eye transform marks
    ConvertDfc,
    /// Fan transform marks
    FanDfc,
    /// Upside-down transform marks
    UpsideDownDfc,
    /// Spree frame
    Spree,
    /// Unknown frame effect
    #[serde(other)]
    Unknown,
}

/// Relationship of a related card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Token the card creates
    Token,
    /// One half of a meld pair
    MeldPart,
    /// The melded card
    MeldResult,
    /// Card that references or is referenced by this one
    ComboPiece,
    /// Unknown component
    #[serde(other)]
    Unknown,
}

/// Card rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Common
    Common,
    /// Uncommon
    Uncommon,
    /// Rare
    Rare,
    /// Special
    Special,
    /// Mythic rare
    Mythic,
    /// Bonus
    Bonus,
    /// Unknown rarity
    #[serde(other)]
    Unknown,
}

/// Printing finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    /// Traditional foil
    Foil,
    /// Non-foil
    Nonfoil,
    /// Etched foil
    Etched,
    /// Unknown finish
    #[serde(other)]
    Unknown,
}

/// Quality of the card image Scryfall holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    /// No image
    Missing,
    /// Placeholder image
    Placeholder,
    /// Low resolution image
    Lowres,
    /// High resolution scan
    HighresScan,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

/// Which printings of a card a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniqueMode {
    /// One result per card (default)
    Cards,
    /// One result per unique artwork
    Art,
    /// Every printing
    Prints,
}

impl UniqueMode {
    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueMode::Cards => "cards",
            UniqueMode::Art => "art",
            UniqueMode::Prints => "prints",
        }
    }
}

/// Sort field for card searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// By name
    Name,
    /// By set and collector number
    Set,
    /// By rarity
    Rarity,
    /// By color
    Color,
    /// By USD price
    Usd,
    /// By MTGO ticket price
    Tix,
    /// By EUR price
    Eur,
    /// By mana value
    Cmc,
    /// By power
    Power,
    /// By toughness
    Toughness,
    /// By EDHREC rank
    Edhrec,
    /// By artist name
    Artist,
}

impl SortOrder {
    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Set => "set",
            SortOrder::Rarity => "rarity",
            SortOrder::Color => "color",
            SortOrder::Usd => "usd",
            SortOrder::Tix => "tix",
            SortOrder::Eur => "eur",
            SortOrder::Cmc => "cmc",
            SortOrder::Power => "power",
            SortOrder::Toughness => "toughness",
            SortOrder::Edhrec => "edhrec",
            SortOrder::Artist => "artist",
        }
    }
}

/// Sort direction for card searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Direction chosen by the API for the sort field
    Auto,
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Auto => "auto",
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Kind of set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    /// Yearly core set
    Core,
    /// Rotational expansion
    Expansion,
    /// Arena-only Alchemy set
    Alchemy,
    /// Reprint set
    Masters,
    /// Masterpiece series
    Masterpiece,
    /// Arsenal
    Arsenal,
    /// From the Vault
    FromTheVault,
    /// Spellbook
    Spellbook,
    /// Premium deck series
    PremiumDeck,
    /// Duel deck
    DuelDeck,
    /// Special draft set
    DraftInnovation,
    /// MTGO treasure chest
    TreasureChest,
    /// Commander
    Commander,
    /// Planechase
    Planechase,
    /// Archenemy
    Archenemy,
    /// Vanguard
    Vanguard,
    /// Un-set or playtest
    Funny,
    /// Starter or introductory set
    Starter,
    /// Gift box
    #[serde(rename = "box")]
    GiftBox,
    /// Promo
    Promo,
    /// Tokens
    Token,
    /// Memorabilia
    Memorabilia,
    /// Minigame
    #[serde(rename = "minigame")]
    MiniGame,
    /// Unknown set type
    #[serde(other)]
    Unknown,
}

/// Who published a ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulingSource {
    /// Wizards of the Coast
    Wotc,
    /// Scryfall
    Scryfall,
    /// Unknown source
    #[serde(other)]
    Unknown,
}
