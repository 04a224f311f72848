//! Product categories

use serde::{Deserialize, Serialize};

/// Product grouping that selects a catalog source and a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Paper,
    Bagasse,
    #[serde(rename = "Plastic Free")]
    PlasticFree,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Paper, Category::Bagasse, Category::PlasticFree];

    /// Human-readable label, also used as the catalog's `Category` field
    pub fn label(&self) -> &'static str {
        match self {
            Category::Paper => "Paper",
            Category::Bagasse => "Bagasse",
            Category::PlasticFree => "Plastic Free",
        }
    }

    /// Route path of the category page
    pub fn path(&self) -> &'static str {
        match self {
            Category::Paper => "/paper",
            Category::Bagasse => "/bagasse",
            Category::PlasticFree => "/plastic-free",
        }
    }

    /// Exact, case-sensitive label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(Category::from_label("Paper"), Some(Category::Paper));
        assert_eq!(Category::from_label("Plastic Free"), Some(Category::PlasticFree));
        assert_eq!(Category::from_label("paper"), None);
        assert_eq!(Category::from_label("Plastic-Free"), None);
    }

    #[test]
    fn test_paths_are_distinct() {
        assert_eq!(Category::Paper.path(), "/paper");
        assert_eq!(Category::Bagasse.path(), "/bagasse");
        assert_eq!(Category::PlasticFree.path(), "/plastic-free");
    }
}
