//! Category extraction from the manage page

use scraper::Html;

use super::{Extractor, ManageLayout};
use crate::error::SaveyResult;
use crate::models::{Category, CategoryId};

const CATEGORIES: ManageLayout = ManageLayout {
    entity: "Category",
    blocks: ".setup-categories .section.group:not(.setup-heading)",
};

/// Extracts categories from the manage page
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryExtractor;

impl Extractor for CategoryExtractor {
    type Item = Category;

    fn extract(&self, document: &Html) -> SaveyResult<Vec<Category>> {
        Ok(CATEGORIES
            .rows(document)?
            .into_iter()
            .map(|row| Category::new(CategoryId::new(row.id), row.title, row.label))
            .collect())
    }
}
