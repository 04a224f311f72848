//! Source catalog records
//!
//! Each category ships its own JSON schema. Records are deserialized into the
//! schema for their category and wrapped in [`CatalogRecord`], so building a
//! description is an exhaustive match over the known schemas rather than a
//! lookup of loosely-typed fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product weight in grams, either a number or a free-text range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Grams(f64),
    Text(String),
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Grams(grams) => write!(f, "{grams}"),
            Weight::Text(text) => f.write_str(text),
        }
    }
}

/// Paper catalog entry: separate length/breadth/height columns and a unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "Serial No.")]
    pub serial: u32,
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Weight (gms)")]
    pub weight: Weight,
    #[serde(rename = "Volume (ml)", default)]
    pub volume_ml: Option<f64>,
    #[serde(rename = "Length")]
    pub length_mm: f64,
    #[serde(rename = "Breadth")]
    pub breadth_mm: f64,
    #[serde(rename = "Height")]
    pub height_mm: f64,
    #[serde(rename = "Inner Pack", default)]
    pub inner_pack: Option<u32>,
    #[serde(rename = "Pack Size", default)]
    pub pack_size: Option<u32>,
    #[serde(rename = "Price/Pc (INR)", default)]
    pub price_inr: Option<f64>,
}

impl PaperRecord {
    pub fn description(&self) -> String {
        format!(
            "Dimensions: {}x{}x{} mm | Weight: {}{}",
            self.length_mm,
            self.breadth_mm,
            self.height_mm,
            self.weight,
            volume_segment(self.volume_ml)
        )
    }
}

/// Bagasse catalog entry: one dimensions string and box/carton quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagasseRecord {
    #[serde(rename = "Serial No.")]
    pub serial: u32,
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Weight (gms)")]
    pub weight: Weight,
    #[serde(rename = "Volume (ml)", default)]
    pub volume_ml: Option<f64>,
    #[serde(rename = "Dimensions")]
    pub dimensions: String,
    #[serde(rename = "Box Qty", default)]
    pub box_qty: Option<u32>,
    #[serde(rename = "Carton Qty", default)]
    pub carton_qty: Option<u32>,
}

impl BagasseRecord {
    pub fn description(&self) -> String {
        // Some rows already carry the unit
        let dimensions = self.dimensions.trim();
        let dimensions = dimensions.strip_suffix("mm").unwrap_or(dimensions).trim_end();
        format!(
            "Dimensions: {} mm | Weight: {}{}",
            dimensions,
            self.weight,
            volume_segment(self.volume_ml)
        )
    }
}

/// A source record tagged with the schema it was read from
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRecord {
    Paper(PaperRecord),
    Bagasse(BagasseRecord),
}

impl CatalogRecord {
    pub fn serial(&self) -> u32 {
        match self {
            CatalogRecord::Paper(r) => r.serial,
            CatalogRecord::Bagasse(r) => r.serial,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogRecord::Paper(r) => &r.name,
            CatalogRecord::Bagasse(r) => &r.name,
        }
    }

    /// Description built from whichever measurements the schema carries
    pub fn description(&self) -> String {
        match self {
            CatalogRecord::Paper(r) => r.description(),
            CatalogRecord::Bagasse(r) => r.description(),
        }
    }
}

/// Zero and missing volumes are both left out
fn volume_segment(volume_ml: Option<f64>) -> String {
    match volume_ml {
        Some(ml) if ml.is_finite() && ml != 0.0 => format!(" | Volume: {ml} ml"),
        _ => String::new(),
    }
}
