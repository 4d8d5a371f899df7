//! Catalogs service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestContext};
use crate::models::{Catalog, CatalogKind};
use crate::Result;

/// Service for catalogs.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: scryfall_rs::ScryfallClient) -> scryfall_rs::Result<()> {
/// use scryfall_rs::models::CatalogKind;
///
/// let watermarks = client.catalogs().get(CatalogKind::Watermarks).await?;
/// for name in &watermarks.data {
///     println!("{}", name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CatalogsService {
    inner: Arc<ClientInner>,
    ctx: RequestContext,
}

impl CatalogsService {
    pub(crate) fn new(inner: Arc<ClientInner>, ctx: RequestContext) -> Self {
        Self { inner, ctx }
    }

    /// Fetch one catalog.
    pub async fn get(&self, kind: CatalogKind) -> Result<Catalog> {
        self.inner
            .get(&self.ctx, &format!("catalog/{}", kind.as_str()))
            .await
    }
}
