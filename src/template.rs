//! Template loading and token substitution.
//!
//! Pages are produced by splicing values into static HTML templates. Each
//! template is a text blob carrying two token families, both written as
//! `{{NAME}}`:
//!
//! - **Partial tokens** (`{{HEADER}}`, `{{FOOTER}}`, `{{MOBILE_MENU}}`):
//!   replaced exactly once with a shared HTML fragment.
//! - **Field tokens** (`{{GALLERY_TITLE}}`, `{{TRAD_NAV_GALLERIES}}`, ...):
//!   every occurrence replaced with a language-resolved scalar or a pre-built
//!   HTML list fragment.
//!
//! Partials are inserted before the field pass, so field tokens inside a
//! partial (nav labels, language links) are resolved like any other. Partials
//! must not themselves contain partial tokens. Field token names are disjoint
//! literals, so ordering within the field pass does not matter.
//!
//! ## Stock templates
//!
//! The default template set ships embedded in the binary (`static/`), the
//! same way the site stylesheet and nav script are embedded in simple static
//! generators. `trifolio scaffold` writes them out for customization;
//! [`TemplateSet::load`] prefers the on-disk copies.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub const STOCK_TRANSLATIONS: &str = include_str!("../static/translations.json");

const STOCK_HOME: &str = include_str!("../static/templates/home.html");
const STOCK_GALLERIES: &str = include_str!("../static/templates/galleries.html");
const STOCK_GALLERY_DETAIL: &str = include_str!("../static/templates/gallery-detail.html");
const STOCK_ABOUT: &str = include_str!("../static/templates/about.html");
const STOCK_CONTACT: &str = include_str!("../static/templates/contact.html");
const STOCK_HEADER: &str = include_str!("../static/partials/header.html");
const STOCK_FOOTER: &str = include_str!("../static/partials/footer.html");
const STOCK_MOBILE_MENU: &str = include_str!("../static/partials/mobile-menu.html");

/// The five page templates plus the three shared partials.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub home: String,
    pub galleries: String,
    pub gallery_detail: String,
    pub about: String,
    pub contact: String,
    pub header: String,
    pub footer: String,
    pub mobile_menu: String,
}

impl TemplateSet {
    /// Read the template set from disk.
    pub fn load(templates_dir: &Path, partials_dir: &Path) -> Result<Self, TemplateError> {
        let read = |path: PathBuf| {
            std::fs::read_to_string(&path).map_err(|source| TemplateError::Read { path, source })
        };
        Ok(TemplateSet {
            home: read(templates_dir.join("home.html"))?,
            galleries: read(templates_dir.join("galleries.html"))?,
            gallery_detail: read(templates_dir.join("gallery-detail.html"))?,
            about: read(templates_dir.join("about.html"))?,
            contact: read(templates_dir.join("contact.html"))?,
            header: read(partials_dir.join("header.html"))?,
            footer: read(partials_dir.join("footer.html"))?,
            mobile_menu: read(partials_dir.join("mobile-menu.html"))?,
        })
    }

    /// The embedded default template set.
    pub fn stock() -> Self {
        TemplateSet {
            home: STOCK_HOME.to_string(),
            galleries: STOCK_GALLERIES.to_string(),
            gallery_detail: STOCK_GALLERY_DETAIL.to_string(),
            about: STOCK_ABOUT.to_string(),
            contact: STOCK_CONTACT.to_string(),
            header: STOCK_HEADER.to_string(),
            footer: STOCK_FOOTER.to_string(),
            mobile_menu: STOCK_MOBILE_MENU.to_string(),
        }
    }
}

/// Write the stock templates, partials, and translation table into `root`.
///
/// Creates `templates/`, `templates/partials/`, and `translations.json`.
/// Existing files are overwritten.
pub fn write_stock(root: &Path) -> std::io::Result<()> {
    let templates = root.join("templates");
    let partials = templates.join("partials");
    std::fs::create_dir_all(&partials)?;

    std::fs::write(templates.join("home.html"), STOCK_HOME)?;
    std::fs::write(templates.join("galleries.html"), STOCK_GALLERIES)?;
    std::fs::write(templates.join("gallery-detail.html"), STOCK_GALLERY_DETAIL)?;
    std::fs::write(templates.join("about.html"), STOCK_ABOUT)?;
    std::fs::write(templates.join("contact.html"), STOCK_CONTACT)?;
    std::fs::write(partials.join("header.html"), STOCK_HEADER)?;
    std::fs::write(partials.join("footer.html"), STOCK_FOOTER)?;
    std::fs::write(partials.join("mobile-menu.html"), STOCK_MOBILE_MENU)?;
    std::fs::write(root.join("translations.json"), STOCK_TRANSLATIONS)?;
    Ok(())
}

/// A typed set of substitutions to apply to one template.
///
/// Built per page, applied once. Collecting values behind a builder (rather
/// than ad-hoc string replacement at call sites) keeps the token vocabulary
/// in one place per page renderer and makes the partial-before-field order
/// structural instead of a calling convention.
#[derive(Debug, Default)]
pub struct Substitutions {
    partials: Vec<(&'static str, String)>,
    fields: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a partial fragment, replaced exactly once.
    pub fn partial(mut self, name: &'static str, html: impl Into<String>) -> Self {
        self.partials.push((name, html.into()));
        self
    }

    /// Set a field value, replacing every `{{name}}` occurrence.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Apply to a template: partials first, then all field tokens.
    ///
    /// Unknown tokens are left in place — visible in the output rather than
    /// an error, mirroring the translation-table fallback policy.
    pub fn apply(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (name, html) in &self.partials {
            out = out.replacen(&token(name), html, 1);
        }
        for (name, value) in &self.fields {
            out = out.replace(&token(name), value);
        }
        out
    }
}

fn token(name: &str) -> String {
    format!("{{{{{name}}}}}")
}
