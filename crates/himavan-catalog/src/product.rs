//! Render-ready products

use crate::record::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Rating shown on every card; the catalogs carry no rating data
pub const DEFAULT_RATING: f32 = 4.5;

/// Image shown on every card until product photos are wired up
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Normalized product as displayed in a category grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProduct {
    /// Source serial number, unique within a category
    pub id: u32,
    pub name: String,
    pub image_ref: String,
    pub rating: f32,
    pub description: String,
}

impl DisplayProduct {
    pub fn from_record(record: &CatalogRecord) -> Self {
        Self {
            id: record.serial(),
            name: record.name().to_string(),
            image_ref: PLACEHOLDER_IMAGE.to_string(),
            rating: DEFAULT_RATING,
            description: record.description(),
        }
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Breakdown of a rating into five star glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub const MAX: u8 = 5;

    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, Self::MAX as f32)
        } else {
            0.0
        };
        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        let empty = Self::MAX - rating.ceil() as u8;
        Self { full, half, empty }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PaperRecord, Weight};

    #[test]
    fn test_from_record() {
        let record = CatalogRecord::Paper(PaperRecord {
            serial: 3,
            name: "6-inch Fork".into(),
            category: Some("Paper".into()),
            weight: Weight::Grams(4.2),
            volume_ml: None,
            length_mm: 150.0,
            breadth_mm: 20.0,
            height_mm: 5.0,
            inner_pack: None,
            pack_size: None,
            price_inr: Some(0.9),
        });
        let product = DisplayProduct::from_record(&record);
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "6-inch Fork");
        assert_eq!(product.image_ref, PLACEHOLDER_IMAGE);
        assert_eq!(product.rating, 4.5);
        assert_eq!(product.description, "Dimensions: 150x20x5 mm | Weight: 4.2");
        assert_eq!(
            product.stars(),
            StarRating { full: 4, half: true, empty: 0 }
        );
    }

    #[test]
    fn test_star_breakdown() {
        assert_eq!(
            StarRating::from_rating(4.5),
            StarRating { full: 4, half: true, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(3.0),
            StarRating { full: 3, half: false, empty: 2 }
        );
        assert_eq!(
            StarRating::from_rating(0.0),
            StarRating { full: 0, half: false, empty: 5 }
        );
    }

    #[test]
    fn test_star_breakdown_always_five() {
        for tenths in 0..=50 {
            let stars = StarRating::from_rating(tenths as f32 / 10.0);
            assert_eq!(stars.full + stars.half as u8 + stars.empty, StarRating::MAX);
        }
        let clamped = StarRating::from_rating(9.0);
        assert_eq!(clamped.full, 5);
        assert_eq!(StarRating::from_rating(f32::NAN).empty, 5);
    }
}
