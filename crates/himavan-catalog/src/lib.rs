//! Himavan Product Catalog
//!
//! Static per-category product catalogs bundled with the site, and the
//! normalization that turns their source records into render-ready
//! display products.

pub mod category;
pub mod contact;
pub mod loader;
pub mod product;
pub mod record;

use thiserror::Error;

pub use category::Category;
pub use contact::QuoteLink;
pub use loader::Catalog;
pub use product::{DisplayProduct, StarRating, DEFAULT_RATING, PLACEHOLDER_IMAGE};
pub use record::{BagasseRecord, CatalogRecord, PaperRecord, Weight};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Parse error in {category} catalog: {source}")]
    Parse {
        category: Category,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate serial number {serial} in {category} catalog")]
    DuplicateSerial { category: Category, serial: u32 },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Normalize the bundled catalog for a category
pub fn normalize(category: Category) -> Vec<DisplayProduct> {
    Catalog::embedded().normalize(category)
}

/// Normalize the bundled catalog for a category label.
///
/// Labels that do not name a category yield an empty list.
pub fn normalize_label(label: &str) -> Vec<DisplayProduct> {
    match Category::from_label(label) {
        Some(category) => normalize(category),
        None => {
            tracing::debug!(label, "unknown category label");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_normalizes() {
        assert_eq!(
            normalize(Category::Paper).len(),
            Catalog::embedded().len(Category::Paper)
        );
        assert_eq!(
            normalize(Category::Bagasse).len(),
            Catalog::embedded().len(Category::Bagasse)
        );
        assert!(!normalize(Category::Paper).is_empty());
        assert!(!normalize(Category::Bagasse).is_empty());
    }

    #[test]
    fn test_unknown_labels_are_empty() {
        assert!(normalize_label("Plastic Free").is_empty());
        assert!(normalize_label("Papr").is_empty());
        assert!(normalize_label("").is_empty());
        assert!(!normalize_label("Paper").is_empty());
    }

    #[test]
    fn test_bundled_ratings_are_constant() {
        for category in Category::ALL {
            for product in normalize(category) {
                assert_eq!(product.rating, DEFAULT_RATING);
            }
        }
    }
}
