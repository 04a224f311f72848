//! Catalog loading and normalization

use crate::category::Category;
use crate::product::DisplayProduct;
use crate::record::{BagasseRecord, CatalogRecord, PaperRecord};
use crate::{CatalogError, CatalogResult};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const PAPER_JSON: &str = include_str!("../assets/paper_products.json");
const BAGASSE_JSON: &str = include_str!("../assets/bagasse_products.json");

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| Catalog::from_json_lossy(PAPER_JSON, BAGASSE_JSON));

/// Immutable source records for every category with a backing catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    paper: Vec<CatalogRecord>,
    bagasse: Vec<CatalogRecord>,
}

impl Catalog {
    /// Catalog built from the JSON bundled into the binary
    pub fn embedded() -> &'static Catalog {
        &EMBEDDED
    }

    /// Parse the per-category JSON sources, rejecting any bad row
    pub fn from_json(paper_json: &str, bagasse_json: &str) -> CatalogResult<Self> {
        let paper = parse::<PaperRecord>(Category::Paper, paper_json)?
            .into_iter()
            .map(CatalogRecord::Paper)
            .collect::<Vec<_>>();
        let bagasse = parse::<BagasseRecord>(Category::Bagasse, bagasse_json)?
            .into_iter()
            .map(CatalogRecord::Bagasse)
            .collect::<Vec<_>>();

        check_unique(Category::Paper, &paper)?;
        check_unique(Category::Bagasse, &bagasse)?;

        tracing::debug!(
            paper = paper.len(),
            bagasse = bagasse.len(),
            "catalog loaded"
        );

        Ok(Self { paper, bagasse })
    }

    /// Parse the per-category JSON sources, keeping every row that loads.
    ///
    /// Categories load independently. Rows that fail to deserialize and rows
    /// repeating an earlier serial are skipped; a source that is not a JSON
    /// array leaves only its own category empty.
    pub fn from_json_lossy(paper_json: &str, bagasse_json: &str) -> Self {
        let paper = load_lossy(Category::Paper, paper_json, CatalogRecord::Paper);
        let bagasse = load_lossy(Category::Bagasse, bagasse_json, CatalogRecord::Bagasse);

        tracing::debug!(
            paper = paper.len(),
            bagasse = bagasse.len(),
            "catalog loaded"
        );

        Self { paper, bagasse }
    }

    /// Source records for a category, in source order
    pub fn records(&self, category: Category) -> &[CatalogRecord] {
        match category {
            Category::Paper => &self.paper,
            Category::Bagasse => &self.bagasse,
            Category::PlasticFree => &[],
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.records(category).len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.records(category).is_empty()
    }

    /// Display products for a category, one per source record
    pub fn normalize(&self, category: Category) -> Vec<DisplayProduct> {
        self.records(category)
            .iter()
            .map(DisplayProduct::from_record)
            .collect()
    }
}

fn parse<T: DeserializeOwned>(category: Category, json: &str) -> CatalogResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { category, source })
}

fn load_lossy<T: DeserializeOwned>(
    category: Category,
    json: &str,
    wrap: fn(T) -> CatalogRecord,
) -> Vec<CatalogRecord> {
    let rows = match parse::<serde_json::Value>(category, json) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "catalog source unreadable, serving empty category");
            return Vec::new();
        }
    };

    let mut seen = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.into_iter().enumerate() {
        let record = match serde_json::from_value::<T>(value) {
            Ok(record) => wrap(record),
            Err(source) => {
                let err = CatalogError::Parse { category, source };
                tracing::error!(row, error = %err, "skipping catalog row");
                continue;
            }
        };
        if !seen.insert(record.serial()) {
            let err = CatalogError::DuplicateSerial {
                category,
                serial: record.serial(),
            };
            tracing::error!(row, error = %err, "skipping catalog row");
            continue;
        }
        records.push(record);
    }
    records
}

fn check_unique(category: Category, records: &[CatalogRecord]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.serial()) {
            return Err(CatalogError::DuplicateSerial {
                category,
                serial: record.serial(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER: &str = r#"[
        {"Serial No.": 3, "Product Name": "6-inch Fork", "Weight (gms)": 4.2,
         "Length": 150, "Breadth": 20, "Height": 5},
        {"Serial No.": 1, "Product Name": "Paper Spoon", "Weight (gms)": 3.8, "Volume (ml)": null,
         "Length": 140, "Breadth": 30, "Height": 6, "Price/Pc (INR)": 0.85}
    ]"#;

    const BAGASSE: &str = r#"[
        {"Serial No.": 7, "Product Name": "Bagasse Plate", "Weight (gms)": 12,
         "Dimensions": "180x180x18", "Box Qty": 50}
    ]"#;

    #[test]
    fn test_normalize_preserves_source_order() {
        let catalog = Catalog::from_json(PAPER, BAGASSE).unwrap();
        let products = catalog.normalize(Category::Paper);
        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(products[0].description, "Dimensions: 150x20x5 mm | Weight: 4.2");
    }

    #[test]
    fn test_plastic_free_is_empty() {
        let catalog = Catalog::from_json(PAPER, BAGASSE).unwrap();
        assert!(catalog.normalize(Category::PlasticFree).is_empty());
        assert!(catalog.is_empty(Category::PlasticFree));
        assert_eq!(catalog.len(Category::Bagasse), 1);
    }

    #[test]
    fn test_duplicate_serial_rejected() {
        let paper = r#"[
            {"Serial No.": 2, "Product Name": "A", "Weight (gms)": 1, "Length": 1, "Breadth": 1, "Height": 1},
            {"Serial No.": 2, "Product Name": "B", "Weight (gms)": 1, "Length": 1, "Breadth": 1, "Height": 1}
        ]"#;
        let err = Catalog::from_json(paper, BAGASSE).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateSerial { category: Category::Paper, serial: 2 }
        ));
    }

    #[test]
    fn test_same_serial_across_categories_allowed() {
        let bagasse = r#"[
            {"Serial No.": 3, "Product Name": "Tray", "Weight (gms)": 15, "Dimensions": "240x160x20"}
        ]"#;
        assert!(Catalog::from_json(PAPER, bagasse).is_ok());
    }

    #[test]
    fn test_malformed_source_reports_category() {
        let err = Catalog::from_json(PAPER, "[{\"Serial No.\": 1}]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { category: Category::Bagasse, .. }));
        assert!(err.to_string().contains("Bagasse"));
    }

    #[test]
    fn test_lossy_load_isolates_bad_category() {
        let bagasse = r#"[
            {"Serial No.": 7, "Product Name": "Bagasse Plate", "Weight (gms)": 12,
             "Length": 180, "Breadth": 180, "Height": 18}
        ]"#;
        assert!(Catalog::from_json(PAPER, bagasse).is_err());

        let catalog = Catalog::from_json_lossy(PAPER, bagasse);
        assert_eq!(catalog.len(Category::Paper), 2);
        assert!(catalog.is_empty(Category::Bagasse));
    }

    #[test]
    fn test_lossy_load_skips_only_bad_rows() {
        let bagasse = r#"[
            {"Serial No.": 6, "Product Name": "Bowl", "Weight (gms)": 10},
            {"Serial No.": 7, "Product Name": "Bagasse Plate", "Weight (gms)": 12,
             "Dimensions": "180x180x18"},
            {"Serial No.": 7, "Product Name": "Plate Copy", "Weight (gms)": 12,
             "Dimensions": "180x180x18"}
        ]"#;
        let catalog = Catalog::from_json_lossy(PAPER, bagasse);
        let products = catalog.normalize(Category::Bagasse);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 7);
        assert_eq!(products[0].name, "Bagasse Plate");
    }

    #[test]
    fn test_lossy_load_unreadable_source() {
        let catalog = Catalog::from_json_lossy("not json", BAGASSE);
        assert!(catalog.is_empty(Category::Paper));
        assert_eq!(catalog.len(Category::Bagasse), 1);
    }

    #[test]
    fn test_embedded_catalog_matches_sources() {
        let catalog = Catalog::embedded();
        for category in [Category::Paper, Category::Bagasse] {
            let products = catalog.normalize(category);
            assert_eq!(products.len(), catalog.len(category));
            for (product, record) in products.iter().zip(catalog.records(category)) {
                assert_eq!(product.id, record.serial());
                assert_eq!(product.name, record.name());
            }
        }
    }

    #[test]
    fn test_embedded_catalog_has_reference_rows() {
        let paper = Catalog::embedded().normalize(Category::Paper);
        let fork = paper.iter().find(|p| p.id == 3).unwrap();
        assert_eq!(fork.name, "6-inch Fork");
        assert_eq!(fork.description, "Dimensions: 150x20x5 mm | Weight: 4.2");

        let bagasse = Catalog::embedded().normalize(Category::Bagasse);
        let plate = bagasse.iter().find(|p| p.id == 7).unwrap();
        assert_eq!(plate.name, "Bagasse Plate");
        assert!(!plate.description.contains("Volume"));
    }
}
