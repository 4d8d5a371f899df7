//! Sets service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestContext};
use crate::models::Set;
use crate::Result;

/// Service for set lookups.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: scryfall_rs::ScryfallClient) -> scryfall_rs::Result<()> {
/// let sets = client.sets().list().await?;
/// println!("{} sets", sets.len());
///
/// let ixalan = client.sets().get("xln").await?;
/// println!("{} has {} cards", ixalan.name, ixalan.card_count);
/// # Ok(())
/// # }
/// ```
pub struct SetsService {
    inner: Arc<ClientInner>,
    ctx: RequestContext,
}

impl SetsService {
    pub(crate) fn new(inner: Arc<ClientInner>, ctx: RequestContext) -> Self {
        Self { inner, ctx }
    }

    /// List every set.
    pub async fn list(&self) -> Result<Vec<Set>> {
        self.inner.list_get(&self.ctx, "sets").await
    }

    /// Get a set by its code or Scryfall ID.
    ///
    /// # Arguments
    ///
    /// * `code` - Three to five letter set code, e.g. `"xln"`
    pub async fn get(&self, code: &str) -> Result<Set> {
        self.inner
            .get(&self.ctx, &format!("sets/{}", urlencoding::encode(code)))
            .await
    }
}
