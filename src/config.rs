//! Site settings shared by the components through Leptos context.
use leptos::logging::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::store::DEFAULT_STORAGE_KEY;

/// Used when no endpoint is configured at build time. Relative, so a plain
/// static host answers 404 and the review is kept locally only.
pub const DEFAULT_FORM_ENDPOINT: &str = "/reviews";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub reviews_storage_key: String,
    pub form_endpoint: String,
    pub form_method: FormMethod,
    pub notification_timeout_ms: u64,
    pub typing_speed_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            reviews_storage_key: DEFAULT_STORAGE_KEY.to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            form_method: FormMethod::Post,
            notification_timeout_ms: 5000,
            typing_speed_ms: 80,
        }
    }
}

impl SiteConfig {
    /// Defaults, then the build-time `SITE_CONFIG` JSON document, then
    /// `REVIEW_FORM_ENDPOINT`.
    pub fn load() -> Self {
        Self::resolve(option_env!("SITE_CONFIG"), option_env!("REVIEW_FORM_ENDPOINT"))
    }

    /// Layers the overrides over the defaults. An invalid document is ignored.
    pub fn resolve(overrides: Option<&str>, endpoint: Option<&str>) -> Self {
        let mut config = match overrides.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                warn!("[CONFIG] Ignoring SITE_CONFIG: {}", err);
                SiteConfig::default()
            }),
            None => SiteConfig::default(),
        };
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            config.form_endpoint = endpoint.to_string();
        }
        config
    }

    /// Parses a partial JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// True while submissions go to the bundled placeholder, which the
    /// site host does not answer.
    pub fn uses_default_endpoint(&self) -> bool {
        self.form_endpoint == DEFAULT_FORM_ENDPOINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.reviews_storage_key, "snowDesignReviews");
        assert_eq!(config.form_method, FormMethod::Post);
        assert_eq!(config.notification_timeout_ms, 5000);
    }

    #[test]
    fn test_partial_json_override() {
        let config = SiteConfig::from_json(
            r#"{"form_endpoint":"https://forms.example.com/f/abc","form_method":"get"}"#,
        )
        .unwrap();
        assert_eq!(config.form_endpoint, "https://forms.example.com/f/abc");
        assert_eq!(config.form_method, FormMethod::Get);
        assert_eq!(config.typing_speed_ms, 80);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteConfig::from_json(r#"{"form_method":"put"}"#).is_err());
        assert!(SiteConfig::from_json("nope").is_err());
    }

    #[test]
    fn test_resolve_layers_overrides() {
        let config = SiteConfig::resolve(
            Some(r#"{"notification_timeout_ms":3000,"form_endpoint":"https://a.example/f"}"#),
            Some("https://b.example/f"),
        );
        assert_eq!(config.notification_timeout_ms, 3000);
        // The dedicated endpoint variable wins over the document.
        assert_eq!(config.form_endpoint, "https://b.example/f");
        assert!(!config.uses_default_endpoint());

        let config = SiteConfig::resolve(Some(r#"{"form_method":"get"}"#), Some(""));
        assert_eq!(config.form_method, FormMethod::Get);
        assert!(config.uses_default_endpoint());
    }

    #[test]
    fn test_resolve_ignores_invalid_document() {
        let config = SiteConfig::resolve(Some("{not json"), None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(SiteConfig::resolve(Some("  "), None), SiteConfig::default());
        assert!(SiteConfig::default().uses_default_endpoint());
    }
}
