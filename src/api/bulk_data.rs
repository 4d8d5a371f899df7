//! Bulk data service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestContext};
use crate::models::BulkData;
use crate::Result;

/// Service for bulk data file metadata.
///
/// The files themselves are plain downloads from
/// [`BulkData::download_uri`] and are not fetched through this client.
pub struct BulkDataService {
    inner: Arc<ClientInner>,
    ctx: RequestContext,
}

impl BulkDataService {
    pub(crate) fn new(inner: Arc<ClientInner>, ctx: RequestContext) -> Self {
        Self { inner, ctx }
    }

    /// List all bulk data files.
    pub async fn list(&self) -> Result<Vec<BulkData>> {
        self.inner.list_get(&self.ctx, "bulk-data").await
    }

    /// Get a bulk data file by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<BulkData> {
        self.inner
            .get(&self.ctx, &format!("bulk-data/{}", urlencoding::encode(id)))
            .await
    }

    /// Get a bulk data file by type, e.g. `"oracle_cards"`.
    pub async fn get_by_type(&self, bulk_type: &str) -> Result<BulkData> {
        self.inner
            .get(
                &self.ctx,
                &format!("bulk-data/{}", urlencoding::encode(bulk_type)),
            )
            .await
    }
}
