//! Rulings service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestContext};
use crate::models::Ruling;
use crate::Result;

/// Service for card rulings.
///
/// Every method returns the rulings in the order the API lists them.
pub struct RulingsService {
    inner: Arc<ClientInner>,
    ctx: RequestContext,
}

impl RulingsService {
    pub(crate) fn new(inner: Arc<ClientInner>, ctx: RequestContext) -> Self {
        Self { inner, ctx }
    }

    /// Rulings for a card by Scryfall ID.
    pub async fn for_card(&self, id: &str) -> Result<Vec<Ruling>> {
        self.list(&format!("cards/{}/rulings", urlencoding::encode(id)))
            .await
    }

    /// Rulings for a card by multiverse ID.
    pub async fn by_multiverse_id(&self, id: u64) -> Result<Vec<Ruling>> {
        self.list(&format!("cards/multiverse/{}/rulings", id)).await
    }

    /// Rulings for a card by MTGO ID.
    pub async fn by_mtgo_id(&self, id: u64) -> Result<Vec<Ruling>> {
        self.list(&format!("cards/mtgo/{}/rulings", id)).await
    }

    /// Rulings for a card by MTG Arena ID.
    pub async fn by_arena_id(&self, id: u64) -> Result<Vec<Ruling>> {
        self.list(&format!("cards/arena/{}/rulings", id)).await
    }

    /// Rulings for a card by set code and collector number.
    pub async fn by_set_and_number(
        &self,
        set: &str,
        collector_number: &str,
    ) -> Result<Vec<Ruling>> {
        self.list(&format!(
            "cards/{}/{}/rulings",
            urlencoding::encode(set),
            urlencoding::encode(collector_number)
        ))
        .await
    }

    async fn list(&self, path: &str) -> Result<Vec<Ruling>> {
        self.inner.list_get(&self.ctx, path).await
    }
}
