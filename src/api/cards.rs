//! Cards service for card lookups and searches.

use std::sync::Arc;

use crate::client::{ClientInner, RequestContext};
use crate::models::{
    Card, CardIdentifier, CardList, Catalog, CollectionResponse, Lang, SortDirection, SortOrder,
    UniqueMode,
};
use crate::{Error, Result};

/// Maximum number of identifiers the collection endpoint accepts.
pub const MAX_COLLECTION_IDENTIFIERS: usize = 75;

/// Options for [`CardsService::search`].
///
/// # Example
///
/// ```
/// use scryfall_rs::api::SearchOptions;
/// use scryfall_rs::models::{SortOrder, UniqueMode};
///
/// let options = SearchOptions::new()
///     .unique(UniqueMode::Prints)
///     .order(SortOrder::Usd)
///     .page(2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// How to collapse duplicate printings
    pub unique: Option<UniqueMode>,
    /// Sort field
    pub order: Option<SortOrder>,
    /// Sort direction
    pub dir: Option<SortDirection>,
    /// Include tokens, emblems and other extras
    pub include_extras: bool,
    /// Include non-English printings
    pub include_multilingual: bool,
    /// Include rare variant printings
    pub include_variations: bool,
    /// Page number, starting at 1
    pub page: Option<u32>,
}

impl SearchOptions {
    /// Options with API defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unique mode.
    pub fn unique(mut self, unique: UniqueMode) -> Self {
        self.unique = Some(unique);
        self
    }

    /// Set the sort field.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the sort direction.
    pub fn dir(mut self, dir: SortDirection) -> Self {
        self.dir = Some(dir);
        self
    }

    /// Include extras such as tokens.
    pub fn include_extras(mut self, include: bool) -> Self {
        self.include_extras = include;
        self
    }

    /// Include non-English printings.
    pub fn include_multilingual(mut self, include: bool) -> Self {
        self.include_multilingual = include;
        self
    }

    /// Include variant printings.
    pub fn include_variations(mut self, include: bool) -> Self {
        self.include_variations = include;
        self
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    fn query_string(&self, query: &str) -> String {
        let mut params = vec![format!("q={}", urlencoding::encode(query))];

        if let Some(unique) = self.unique {
            params.push(format!("unique={}", unique.as_str()));
        }
        if let Some(order) = self.order {
            params.push(format!("order={}", order.as_str()));
        }
        if let Some(dir) = self.dir {
            params.push(format!("dir={}", dir.as_str()));
        }
        if self.include_extras {
            params.push("include_extras=true".to_string());
        }
        if self.include_multilingual {
            params.push("include_multilingual=true".to_string());
        }
        if self.include_variations {
            params.push("include_variations=true".to_string());
        }
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }

        params.join("&")
    }
}

/// How [`CardsService::named`] matches a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Case-insensitive exact match
    Exact,
    /// Best match for a partial or misspelled name
    Fuzzy,
}

/// Service for card operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: scryfall_rs::ScryfallClient) -> scryfall_rs::Result<()> {
/// use scryfall_rs::api::SearchOptions;
///
/// // Single lookups
/// let bolt = client.cards().named_exact("Lightning Bolt").await?;
/// let opt = client.cards().by_set_and_number("xln", "65").await?;
///
/// // One page of search results
/// let page = client.cards().search("t:goblin c:r", &SearchOptions::new()).await?;
/// println!("{} of {:?} goblins", page.data.len(), page.total_cards);
/// # Ok(())
/// # }
/// ```
pub struct CardsService {
    inner: Arc<ClientInner>,
    ctx: RequestContext,
}

impl CardsService {
    pub(crate) fn new(inner: Arc<ClientInner>, ctx: RequestContext) -> Self {
        Self { inner, ctx }
    }

    /// Run a full-text search and return one page of results.
    ///
    /// A search that matches nothing is reported by the API as a 404
    /// [`Error::Api`].
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<CardList> {
        self.inner
            .get(
                &self.ctx,
                &format!("cards/search?{}", options.query_string(query)),
            )
            .await
    }

    /// Fetch the page after `list`, or `None` if it was the last one.
    ///
    /// The configured credential is only sent if `next_page` points at the
    /// client's base origin.
    pub async fn next_page(&self, list: &CardList) -> Result<Option<CardList>> {
        match (&list.next_page, list.has_more) {
            (Some(next), true) => self.inner.get(&self.ctx, next).await.map(Some),
            _ => Ok(None),
        }
    }

    /// Look up a card by name, optionally restricted to one set.
    pub async fn named(&self, name: &str, matching: NameMatch, set: Option<&str>) -> Result<Card> {
        let key = match matching {
            NameMatch::Exact => "exact",
            NameMatch::Fuzzy => "fuzzy",
        };
        let mut path = format!("cards/named?{}={}", key, urlencoding::encode(name));
        if let Some(set) = set {
            path.push_str(&format!("&set={}", urlencoding::encode(set)));
        }
        self.inner.get(&self.ctx, &path).await
    }

    /// Look up a card by its exact name.
    pub async fn named_exact(&self, name: &str) -> Result<Card> {
        self.named(name, NameMatch::Exact, None).await
    }

    /// Look up a card by a partial or misspelled name.
    pub async fn named_fuzzy(&self, name: &str) -> Result<Card> {
        self.named(name, NameMatch::Fuzzy, None).await
    }

    /// Up to 20 card names starting with or containing `query`.
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        let catalog: Catalog = self
            .inner
            .get(
                &self.ctx,
                &format!("cards/autocomplete?q={}", urlencoding::encode(query)),
            )
            .await?;
        Ok(catalog.data)
    }

    /// A random card.
    pub async fn random(&self) -> Result<Card> {
        self.inner.get(&self.ctx, "cards/random").await
    }

    /// Look up to 75 cards in one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without sending a request when
    /// `identifiers` is empty or longer than
    /// [`MAX_COLLECTION_IDENTIFIERS`].
    pub async fn collection(&self, identifiers: &[CardIdentifier]) -> Result<CollectionResponse> {
        if identifiers.is_empty() || identifiers.len() > MAX_COLLECTION_IDENTIFIERS {
            return Err(Error::InvalidInput(format!(
                "collection requests take 1 to {} identifiers, got {}",
                MAX_COLLECTION_IDENTIFIERS,
                identifiers.len()
            )));
        }

        #[derive(serde::Serialize)]
        struct Request<'a> {
            identifiers: &'a [CardIdentifier],
        }

        self.inner
            .post(&self.ctx, "cards/collection", Some(&Request { identifiers }))
            .await
    }

    /// Look up a printing by set code and collector number.
    pub async fn by_set_and_number(&self, set: &str, collector_number: &str) -> Result<Card> {
        self.inner
            .get(
                &self.ctx,
                &format!(
                    "cards/{}/{}",
                    urlencoding::encode(set),
                    urlencoding::encode(collector_number)
                ),
            )
            .await
    }

    /// Look up a printing by set code, collector number and language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without sending a request when
    /// `lang` is [`Lang::Unknown`].
    pub async fn by_set_and_number_in_lang(
        &self,
        set: &str,
        collector_number: &str,
        lang: Lang,
    ) -> Result<Card> {
        if lang == Lang::Unknown {
            return Err(Error::InvalidInput(
                "cannot look up a printing in an unknown language".to_string(),
            ));
        }
        self.inner
            .get(
                &self.ctx,
                &format!(
                    "cards/{}/{}/{}",
                    urlencoding::encode(set),
                    urlencoding::encode(collector_number),
                    lang.as_str()
                ),
            )
            .await
    }

    /// Look up a card by multiverse ID.
    pub async fn by_multiverse_id(&self, id: u64) -> Result<Card> {
        self.inner
            .get(&self.ctx, &format!("cards/multiverse/{}", id))
            .await
    }

    /// Look up a card by MTGO ID.
    pub async fn by_mtgo_id(&self, id: u64) -> Result<Card> {
        self.inner.get(&self.ctx, &format!("cards/mtgo/{}", id)).await
    }

    /// Look up a card by MTG Arena ID.
    pub async fn by_arena_id(&self, id: u64) -> Result<Card> {
        self.inner.get(&self.ctx, &format!("cards/arena/{}", id)).await
    }

    /// Look up a card by TCGplayer product ID.
    pub async fn by_tcgplayer_id(&self, id: u64) -> Result<Card> {
        self.inner
            .get(&self.ctx, &format!("cards/tcgplayer/{}", id))
            .await
    }

    /// Look up a card by Scryfall ID.
    pub async fn get(&self, id: &str) -> Result<Card> {
        self.inner
            .get(&self.ctx, &format!("cards/{}", urlencoding::encode(id)))
            .await
    }

    /// Look up a card from its Scryfall web page URI, e.g.
    /// `https://scryfall.com/card/xln/65/opt`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the URI does not have the
    /// `.../<set>/<number>/<slug>` shape.
    pub async fn from_uri(&self, uri: &str) -> Result<Card> {
        let (set, collector_number) = parse_card_page_uri(uri)?;
        self.by_set_and_number(set, collector_number).await
    }
}

/// Extract set code and collector number from a card page URI.
fn parse_card_page_uri(uri: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = uri.split('/').collect();
    if parts.len() < 6 {
        return Err(Error::InvalidInput(format!(
            "invalid card URI format: {}",
            uri
        )));
    }
    Ok((parts[parts.len() - 3], parts[parts.len() - 2]))
}
