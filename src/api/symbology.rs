//! Symbology service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestContext};
use crate::models::{CardSymbol, ManaCost};
use crate::Result;

/// Service for card symbols and mana costs.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: scryfall_rs::ScryfallClient) -> scryfall_rs::Result<()> {
/// let cost = client.symbology().parse_mana("2ww").await?;
/// assert_eq!(cost.cost, "{2}{W}{W}");
/// # Ok(())
/// # }
/// ```
pub struct SymbologyService {
    inner: Arc<ClientInner>,
    ctx: RequestContext,
}

impl SymbologyService {
    pub(crate) fn new(inner: Arc<ClientInner>, ctx: RequestContext) -> Self {
        Self { inner, ctx }
    }

    /// List every card symbol.
    pub async fn list(&self) -> Result<Vec<CardSymbol>> {
        self.inner.list_get(&self.ctx, "symbology").await
    }

    /// Normalize a mana cost written in shorthand, e.g. `"RUx"`.
    pub async fn parse_mana(&self, cost: &str) -> Result<ManaCost> {
        self.inner
            .get(
                &self.ctx,
                &format!("symbology/parse-mana?cost={}", urlencoding::encode(cost)),
            )
            .await
    }
}
