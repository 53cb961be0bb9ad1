//! Category service

use tracing::info;

use crate::error::SaveyResult;
use crate::extract::{CategoryExtractor, Extractor};
use crate::models::Category;
use crate::session::client::MANAGE_PATH;
use crate::session::{Client, HttpTransport, Transport};

/// Service for category listing
pub struct CategoryService<'a, T: Transport = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> CategoryService<'a, T> {
    /// Create a new category service
    pub fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Get all categories, in page order
    ///
    /// Categories share the manage page with accounts; use
    /// [`SnapshotService`](super::SnapshotService) when both are needed so
    /// the page is fetched once.
    pub fn list(&self) -> SaveyResult<Vec<Category>> {
        let page = self.client.fetch(MANAGE_PATH)?;
        let categories = CategoryExtractor.extract(&page.document())?;
        info!(count = categories.len(), "listed categories");
        Ok(categories)
    }
}
