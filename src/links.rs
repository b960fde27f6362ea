//! Language-switcher link computation.
//!
//! Every page carries links to its own equivalent in the other two languages.
//! Top-level pages share one file name across languages (`galeries.html`,
//! `a-propos.html`, `contact.html` — only gallery detail pages get
//! per-language slugs), so the switcher just swaps the language directory.
//! Gallery detail pages live one folder deeper (`{lang}/galeries/`), hence
//! the extra `../`, and resolve the target language's own slug.

use crate::i18n::{Lang, Localized};
use std::collections::BTreeMap;

/// The kind of page being rendered, as far as link computation cares.
#[derive(Debug, Clone, Copy)]
pub enum PageKind<'a> {
    Home,
    Galleries,
    About,
    Contact,
    /// Gallery detail page; carries the gallery's per-language slug map.
    GalleryDetail(&'a Localized),
}

impl PageKind<'_> {
    /// Output file name shared by all languages (top-level pages only).
    fn page_file(&self) -> Option<&'static str> {
        match self {
            PageKind::Galleries => Some("galeries"),
            PageKind::About => Some("a-propos"),
            PageKind::Contact => Some("contact"),
            PageKind::Home | PageKind::GalleryDetail(_) => None,
        }
    }
}

/// Compute the relative switcher link for each supported language.
///
/// Always returns exactly one entry per language in [`Lang::ALL`]. A gallery
/// slug that resolves for no language degrades to that language's galleries
/// index — content validation normally rejects such a gallery before
/// rendering starts.
pub fn lang_links(kind: PageKind<'_>) -> BTreeMap<Lang, String> {
    Lang::ALL
        .into_iter()
        .map(|lang| {
            let link = match kind {
                PageKind::GalleryDetail(slug) => match slug.get(lang) {
                    Some(slug) => format!("../../{lang}/galeries/{slug}.html"),
                    None => format!("../../{lang}/galeries.html"),
                },
                PageKind::Home => format!("../{lang}/"),
                _ => {
                    // page_file is Some for every remaining kind
                    let page = kind.page_file().unwrap_or("index");
                    format!("../{lang}/{page}.html")
                }
            };
            (lang, link)
        })
        .collect()
}
