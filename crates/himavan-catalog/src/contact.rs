//! Outbound WhatsApp quote links

use crate::product::DisplayProduct;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "919008392267";

const WHATSAPP_BASE: &str = "https://wa.me";

/// Builds pre-filled WhatsApp links asking for a quote on a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLink {
    phone: String,
}

impl QuoteLink {
    /// `phone` is the international number without `+` or separators
    pub fn new(phone: impl Into<String>) -> Self {
        Self { phone: phone.into() }
    }

    pub fn message(name: &str, id: u32) -> String {
        format!("Hello, I am interested in a quote for the {name} product (ID: {id}).")
    }

    pub fn url(&self, name: &str, id: u32) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_BASE,
            self.phone,
            urlencoding::encode(&Self::message(name, id))
        )
    }

    pub fn for_product(&self, product: &DisplayProduct) -> String {
        self.url(&product.name, product.id)
    }
}

impl Default for QuoteLink {
    fn default() -> Self {
        Self::new(DEFAULT_WHATSAPP_NUMBER)
    }
}
