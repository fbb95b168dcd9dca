use std::str::FromStr;

use log::Level;
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::reveal::{ViewportOptions, DEFAULT_THRESHOLD};

const SITE_JSON: &str = include_str!("../site.json");

pub const DEFAULT_IMAGE_FALLBACK: &str = "https://via.placeholder.com/400?text=מסעדה+אלפא";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.json is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("about.threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Copy overrides for the hero. Missing fields keep the component defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cta_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub hero_background: String,
    pub about_image: String,
    pub image_fallback: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            hero_background: "/assets/restaurant-atmosphere.jpg".to_string(),
            about_image: "/assets/restaurant-quality.svg".to_string(),
            image_fallback: DEFAULT_IMAGE_FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub threshold: f64,
    pub root_margin: Option<String>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: None,
        }
    }
}

impl AboutConfig {
    pub fn viewport_options(&self) -> ViewportOptions {
        let options = ViewportOptions::new(self.threshold);
        match &self.root_margin {
            Some(margin) => options.with_root_margin(margin.clone()),
            None => options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub hero: HeroCopy,
    pub assets: Assets,
    pub about: AboutConfig,
    pub log_level: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "מסעדה אלפא".to_string(),
            hero: HeroCopy::default(),
            assets: Assets::default(),
            about: AboutConfig::default(),
            log_level: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;

        if !(0.0..=1.0).contains(&config.about.threshold) {
            return Err(ConfigError::InvalidThreshold(config.about.threshold));
        }
        if let Some(level) = &config.log_level {
            Level::from_str(level).map_err(|_| ConfigError::UnknownLogLevel(level.clone()))?;
        }

        Ok(config)
    }

    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| Level::from_str(level).ok())
            .unwrap_or_else(default_log_level)
    }
}

static SITE: Lazy<Result<SiteConfig, ConfigError>> = Lazy::new(|| SiteConfig::from_json(SITE_JSON));
static FALLBACK_SITE: Lazy<SiteConfig> = Lazy::new(SiteConfig::default);

/// The embedded site configuration, or the defaults if it did not load.
pub fn site() -> &'static SiteConfig {
    (*SITE).as_ref().unwrap_or(&*FALLBACK_SITE)
}

pub fn site_error() -> Option<&'static ConfigError> {
    (*SITE).as_ref().err()
}

#[cfg(debug_assertions)]
pub fn default_log_level() -> Level {
    Level::Debug  // Local builds
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_json_loads() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.brand, "מסעדה אלפא");
        assert_eq!(config.about.threshold, 0.1);
        assert_eq!(config.assets.image_fallback, DEFAULT_IMAGE_FALLBACK);
        assert!(site_error().is_none());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.hero, HeroCopy::default());
        assert_eq!(config.assets.about_image, "/assets/restaurant-quality.svg");
    }

    #[test]
    fn partial_hero_override() {
        let config = SiteConfig::from_json(r#"{ "hero": { "title": "ארוחת ערב" } }"#).unwrap();
        assert_eq!(config.hero.title.as_deref(), Some("ארוחת ערב"));
        assert_eq!(config.hero.subtitle, None);
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "about": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(t) if t == 1.5));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLogLevel(ref level) if level == "loud"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ brand: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("site.json is not valid"));
    }

    #[test]
    fn log_level_falls_back_to_profile_default() {
        let config = SiteConfig::from_json(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(config.log_level(), Level::Warn);
        assert_eq!(SiteConfig::default().log_level(), default_log_level());
    }

    #[test]
    fn about_options_carry_root_margin() {
        let about = AboutConfig {
            threshold: 0.25,
            root_margin: Some("0px 0px -50px 0px".to_string()),
        };
        let options = about.viewport_options();
        assert_eq!(options.threshold, 0.25);
        assert_eq!(options.root_margin.as_deref(), Some("0px 0px -50px 0px"));
    }
}
