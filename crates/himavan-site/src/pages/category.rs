//! Per-category product listing

use himavan_catalog::{Category, DisplayProduct};
use leptos::*;
use leptos_router::A;
use crate::animation::use_mount_reveal;
use crate::components::ProductCard;
use crate::config::use_config;

/// What the product grid shows for a normalized product list
#[derive(Debug, Clone, PartialEq)]
pub enum GridState {
    /// Nothing to list: show the "No Products Found" placeholder
    Empty,
    Cards(Vec<DisplayProduct>),
}

impl GridState {
    pub fn from_products(products: Vec<DisplayProduct>) -> Self {
        if products.is_empty() {
            GridState::Empty
        } else {
            GridState::Cards(products)
        }
    }

    pub fn for_category(category: Category) -> Self {
        Self::from_products(himavan_catalog::normalize(category))
    }

    pub fn card_count(&self) -> usize {
        match self {
            GridState::Empty => 0,
            GridState::Cards(products) => products.len(),
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        matches!(self, GridState::Empty)
    }
}

#[component]
pub fn CategoryPage(category: Category) -> impl IntoView {
    let config = use_config();
    let quote_link = config.quote_link();
    let stagger_ms = config.card_stagger_ms;
    let grid = GridState::for_category(category);
    tracing::info!(
        %category,
        products = grid.card_count(),
        placeholder = grid.shows_placeholder(),
        "category view mounted"
    );

    let visible = use_mount_reveal();

    let body = match grid {
        GridState::Empty => view! {
            <div class="text-center py-20 bg-white rounded-xl shadow-lg mt-8">
                <h2 class="text-2xl font-bold text-gray-700">"No Products Found"</h2>
                <p class="text-gray-500 mt-2">"Check the category spelling or try another section."</p>
            </div>
        }
        .into_view(),
        GridState::Cards(products) => view! {
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-10">
                <For
                    each=move || products.clone().into_iter().enumerate()
                    key=|(_, product)| product.id
                    children=move |(index, product)| view! {
                        <ProductCard
                            product=product
                            index=index
                            stagger_ms=stagger_ms
                            quote_link=quote_link.clone()
                            visible=visible
                        />
                    }
                />
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="bg-gradient-to-r from-blue-600 to-blue-800 text-white py-16">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <A href="/" class="flex items-center text-blue-200 hover:text-white mb-6 transition-colors duration-300 font-medium">
                        "← Back to Home"
                    </A>
                    <h1 class="text-4xl md:text-5xl font-extrabold mb-4 tracking-tight">
                        {category.label()} " Eco-Friendly Solutions 🌎"
                    </h1>
                    <p class="text-xl text-blue-200 max-w-3xl">
                        "Explore our sustainable collection of biodegradable and compostable "
                        <strong>{category.label().to_lowercase()}</strong>
                        " products."
                    </p>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                {body}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_shows_placeholder() {
        let grid = GridState::from_products(Vec::new());
        assert!(grid.shows_placeholder());
        assert_eq!(grid.card_count(), 0);
    }

    #[test]
    fn test_plastic_free_shows_placeholder() {
        let grid = GridState::for_category(Category::PlasticFree);
        assert_eq!(grid, GridState::Empty);
    }

    #[test]
    fn test_catalog_categories_show_cards() {
        for category in [Category::Paper, Category::Bagasse] {
            let grid = GridState::for_category(category);
            assert!(!grid.shows_placeholder());
            assert_eq!(grid.card_count(), himavan_catalog::normalize(category).len());
        }
    }

    #[test]
    fn test_card_keys_are_unique() {
        for category in Category::ALL {
            if let GridState::Cards(products) = GridState::for_category(category) {
                let mut ids: Vec<u32> = products.iter().map(|p| p.id).collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), products.len());
            }
        }
    }
}
