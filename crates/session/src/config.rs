//! Session configuration.

use serde::Deserialize;

use shopfront_core::DomainResult;
use shopfront_products::PriceStyle;

pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How prices are shown on product cards.
    pub price_style: PriceStyle,
    /// Text passed to the confirmation capability before a delete.
    pub delete_prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            price_style: PriceStyle::default(),
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
        }
    }
}

impl SessionConfig {
    /// Read `SHOPFRONT_PRICE_STYLE` and `SHOPFRONT_DELETE_PROMPT`.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();
        if let Some(style) = lookup("SHOPFRONT_PRICE_STYLE") {
            config.price_style = style.parse()?;
        }
        if let Some(prompt) = lookup("SHOPFRONT_DELETE_PROMPT").filter(|p| !p.trim().is_empty()) {
            config.delete_prompt = prompt;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::DomainError;

    #[test]
    fn unset_environment_gives_defaults() {
        let config = SessionConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.price_style, PriceStyle::TwoDecimals);
    }

    #[test]
    fn reads_overrides() {
        let config = SessionConfig::from_lookup(|key| match key {
            "SHOPFRONT_PRICE_STYLE" => Some("whole".to_string()),
            "SHOPFRONT_DELETE_PROMPT" => Some("Really?".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.price_style, PriceStyle::Whole);
        assert_eq!(config.delete_prompt, "Really?");
    }

    #[test]
    fn invalid_price_style_is_a_validation_error() {
        let err = SessionConfig::from_lookup(|key| {
            (key == "SHOPFRONT_PRICE_STYLE").then(|| "cents".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: SessionConfig = serde_json::from_str(r#"{ "price_style": "whole" }"#).unwrap();
        assert_eq!(config.price_style, PriceStyle::Whole);
        assert_eq!(config.delete_prompt, DEFAULT_DELETE_PROMPT);
    }
}
