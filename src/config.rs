//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. All options have defaults,
//! so a config file is only needed to override them; a missing file means
//! "all defaults". Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_file = "content.json"        # Content snapshot (document-store export)
//! translations_file = "translations.json"
//! templates_dir = "templates"          # Page templates (home.html, ...)
//! partials_dir = "templates/partials"  # header.html, footer.html, mobile-menu.html
//! images_dir = "images"                # Pre-downloaded images, copied into output
//! assets_dir = "assets"                # css/js/icons, copied into output if present
//!
//! default_lang = "fr"                  # Root redirect target: fr | en | ar
//! include_drafts = true                # Show draft galleries on the galleries index
//! ```
//!
//! The output directory is a CLI flag, not a config key — the same content
//! tree is routinely built into different destinations.

use crate::i18n::Lang;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Content snapshot exported from the document store.
    pub content_file: PathBuf,
    /// UI translation table.
    pub translations_file: PathBuf,
    /// Directory holding the five page templates.
    pub templates_dir: PathBuf,
    /// Directory holding the three shared partials.
    pub partials_dir: PathBuf,
    /// Local image tree, copied verbatim into the output under `images/`.
    pub images_dir: PathBuf,
    /// Static assets (css, js, icons), copied into the output if present.
    pub assets_dir: PathBuf,
    /// Language the root redirect document points at.
    pub default_lang: Lang,
    /// Whether draft galleries appear on the galleries index. The source
    /// system never filtered them; flip this once that policy changes.
    pub include_drafts: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content_file: PathBuf::from("content.json"),
            translations_file: PathBuf::from("translations.json"),
            templates_dir: PathBuf::from("templates"),
            partials_dir: PathBuf::from("templates/partials"),
            images_dir: PathBuf::from("images"),
            assets_dir: PathBuf::from("assets"),
            default_lang: Lang::FALLBACK,
            include_drafts: true,
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("content_file", &self.content_file),
            ("translations_file", &self.translations_file),
            ("templates_dir", &self.templates_dir),
            ("partials_dir", &self.partials_dir),
            ("images_dir", &self.images_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Load `config.toml` from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, written by `trifolio scaffold`.
pub fn stock_config_toml() -> String {
    r#"# trifolio site configuration
# All options are optional - the values below are the defaults.

# Content snapshot exported from the document store by the admin pipeline.
content_file = "content.json"

# UI translation table (nested key -> { fr, en, ar } strings).
translations_file = "translations.json"

# Page templates and shared partials.
templates_dir = "templates"
partials_dir = "templates/partials"

# Pre-downloaded images, copied verbatim into the output under images/.
images_dir = "images"

# Static assets (css, js, icons), copied into the output when present.
assets_dir = "assets"

# Language the root redirect points at: fr | en | ar.
default_lang = "fr"

# Draft galleries on the public galleries index. The legacy site never
# filtered them out, so the default preserves that behavior.
include_drafts = true
"#
    .to_string()
}
