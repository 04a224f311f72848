//! Client-side route table

use himavan_catalog::Category;

/// Every page the site can show. The set is closed: there is no fallback route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    Category(Category),
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 4] = [
        SiteRoute::Home,
        SiteRoute::Category(Category::Paper),
        SiteRoute::Category(Category::Bagasse),
        SiteRoute::Category(Category::PlasticFree),
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Category(category) => category.path(),
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            SiteRoute::Home => None,
            SiteRoute::Category(category) => Some(*category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_paths_resolve() {
        assert_eq!(SiteRoute::from_path("/"), Some(SiteRoute::Home));
        assert_eq!(
            SiteRoute::from_path("/paper"),
            Some(SiteRoute::Category(Category::Paper))
        );
        assert_eq!(
            SiteRoute::from_path("/bagasse"),
            Some(SiteRoute::Category(Category::Bagasse))
        );
        assert_eq!(
            SiteRoute::from_path("/plastic-free"),
            Some(SiteRoute::Category(Category::PlasticFree))
        );
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_route_set_is_closed() {
        assert_eq!(SiteRoute::from_path("/Paper"), None);
        assert_eq!(SiteRoute::from_path("/paper/"), None);
        assert_eq!(SiteRoute::from_path("/plastic_free"), None);
        assert_eq!(SiteRoute::from_path("/checkout"), None);
        assert_eq!(SiteRoute::from_path(""), None);
    }

    #[test]
    fn test_category_routes_cover_every_category() {
        let categories: Vec<Category> = SiteRoute::ALL.iter().filter_map(|r| r.category()).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }
}
