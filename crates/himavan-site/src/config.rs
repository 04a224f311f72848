//! Site configuration

use himavan_catalog::contact::DEFAULT_WHATSAPP_NUMBER;
use himavan_catalog::QuoteLink;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const BUNDLED_CONFIG: &str = include_str!("../assets/site.json");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Timing and contact settings shared by every view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// WhatsApp number for quote links, digits only
    pub whatsapp_number: String,
    /// How long the loading screen stays up
    pub loading_ms: u64,
    /// Loading progress tick period
    pub progress_tick_ms: u64,
    /// Upper bound of the random progress increment per tick
    pub progress_max_step: f64,
    /// Period of the highlighted-story rotation
    pub story_rotation_ms: u64,
    /// Scroll offset (px) past which the navbar turns opaque
    pub nav_scroll_threshold: f64,
    /// Delay between successive product cards on mount
    pub card_stagger_ms: u64,
    /// Delay between successive items in a scroll-revealed section
    pub reveal_stagger_ms: u64,
    /// Fraction of the viewport height a section's top must cross to reveal
    pub reveal_viewport_fraction: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            loading_ms: 3000,
            progress_tick_ms: 100,
            progress_max_step: 15.0,
            story_rotation_ms: 4000,
            nav_scroll_threshold: 50.0,
            card_stagger_ms: 100,
            reveal_stagger_ms: 200,
            reveal_viewport_fraction: 0.8,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration bundled with the site, or defaults if it is unusable
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "bundled site config rejected, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_number.is_empty()
            || !self.whatsapp_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::Invalid(format!(
                "whatsapp_number must be digits only, got {:?}",
                self.whatsapp_number
            )));
        }
        if self.progress_tick_ms == 0 || self.story_rotation_ms == 0 {
            return Err(ConfigError::Invalid("timer periods must be non-zero".into()));
        }
        if !(self.progress_max_step > 0.0 && self.progress_max_step.is_finite()) {
            return Err(ConfigError::Invalid(
                "progress_max_step must be positive".into(),
            ));
        }
        if !(self.reveal_viewport_fraction > 0.0 && self.reveal_viewport_fraction <= 1.0) {
            return Err(ConfigError::Invalid(
                "reveal_viewport_fraction must be in (0, 1]".into(),
            ));
        }
        Ok(())
    }

    pub fn quote_link(&self) -> QuoteLink {
        QuoteLink::new(self.whatsapp_number.clone())
    }

    pub fn loading(&self) -> Duration {
        Duration::from_millis(self.loading_ms)
    }

    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    pub fn story_rotation(&self) -> Duration {
        Duration::from_millis(self.story_rotation_ms)
    }
}

/// Configuration provided by the root component
pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = SiteConfig::from_json(BUNDLED_CONFIG).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SiteConfig::from_json(r#"{"loading_ms": 1500}"#).unwrap();
        assert_eq!(config.loading(), Duration::from_millis(1500));
        assert_eq!(config.story_rotation_ms, 4000);
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_rejects_bad_phone() {
        let err = SiteConfig::from_json(r#"{"whatsapp_number": "+91 900"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_fraction_and_ticks() {
        assert!(SiteConfig::from_json(r#"{"reveal_viewport_fraction": 0}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"reveal_viewport_fraction": 1.5}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"progress_tick_ms": 0}"#).is_err());
        assert!(SiteConfig::from_json(r#"{"progress_max_step": -1.0}"#).is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_quote_link_uses_configured_number() {
        let config = SiteConfig {
            whatsapp_number: "15550100".into(),
            ..SiteConfig::default()
        };
        assert!(config.quote_link().url("Fork", 1).starts_with("https://wa.me/15550100?"));
    }
}
