//! Content snapshot loading and validation.
//!
//! The portfolio's content lives in a remote document store managed through a
//! separate admin console. The build consumes a local export of that store —
//! `content.json` — so the renderer never talks to the network. This module is
//! the provider boundary from the renderer's point of view: it deserializes
//! the snapshot, sorts every list by its `order` field, splits exhibitions
//! into past/upcoming buckets, and hands the result over as a read-only
//! [`ContentTree`].
//!
//! ## Snapshot layout
//!
//! ```json
//! {
//!   "settings": { "photographer": {...}, "homepage": {...}, "contact": {...} },
//!   "galleries": [ { "id": "...", "slug": {...}, "photos": [...] } ],
//!   "exhibitions": [ { "type": "past", ... } ],
//!   "publications": [ ... ],
//!   "collaborations": [ ... ]
//! }
//! ```
//!
//! ## Ordering
//!
//! Every list entity carries an integer `order`. Sorting happens exactly once,
//! here, with a stable sort — downstream code iterates in display order and
//! never re-sorts. Exhibition order is scoped within its type bucket.
//!
//! ## Validation
//!
//! [`ContentTree::validate`] enforces what the admin console cannot: gallery
//! ids are unique, every gallery has a resolvable URL slug, and slugs are
//! unique within each language's output tree (two galleries writing the same
//! `fr/galeries/x.html` would silently clobber each other). Featured-gallery
//! ids that match nothing are reported as warnings — the home page just skips
//! them.

use crate::i18n::{Lang, Localized};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate gallery id: {0}")]
    DuplicateGalleryId(String),
    #[error("Gallery '{0}' has no resolvable slug for language '{1}'")]
    MissingSlug(String, Lang),
    #[error("Duplicate slug '{slug}' for language '{lang}' (galleries '{first}' and '{second}')")]
    DuplicateSlug {
        slug: String,
        lang: Lang,
        first: String,
        second: String,
    },
}

/// Publication state of a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
}

/// Whether an exhibition already happened or is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionKind {
    Past,
    Upcoming,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub photographer: Photographer,
    pub homepage: Homepage,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photographer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub social: SocialLinks,
    #[serde(default)]
    pub bio_short: Localized,
    pub bio_long: Localized,
    pub profile_image: String,
    pub interview_video_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Homepage {
    pub hero_image: String,
    pub hero_title: Localized,
    pub hero_subtitle: Localized,
    pub hero_cta: Localized,
    #[serde(default)]
    pub carousel: Vec<CarouselSlide>,
    #[serde(default)]
    pub featured_galleries: Vec<String>,
}

/// One slide of the home-page carousel. Slides render in list order.
#[derive(Debug, Clone, Deserialize)]
pub struct CarouselSlide {
    pub image: String,
    #[serde(default)]
    pub caption: Option<Localized>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub intro_text: Localized,
    pub form_endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gallery {
    pub id: String,
    pub slug: Localized,
    pub title: Localized,
    pub description_short: Localized,
    #[serde(default)]
    pub description_long: Option<Localized>,
    pub cover_image: String,
    pub status: Status,
    pub order: i64,
    #[serde(default)]
    pub show_video: bool,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub show_map: bool,
    #[serde(default)]
    pub map_location: Option<MapLocation>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Coordinates for the optional gallery map embed. Both coordinates are
/// required whenever the object is present; the place name falls back to a
/// translated generic label at render time.
#[derive(Debug, Clone, Deserialize)]
pub struct MapLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub place_name: Option<Localized>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<Localized>,
    pub order: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Exhibition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ExhibitionKind,
    pub title: Localized,
    pub location: Localized,
    pub year: String,
    pub description: Localized,
    pub image: String,
    pub order: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: Localized,
    pub publisher: String,
    pub year: String,
    pub description: Localized,
    pub cover_image: String,
    pub external_url: String,
    pub order: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Collaboration {
    pub id: String,
    pub organization: String,
    pub role: Localized,
    pub description: Localized,
    pub logo_image: String,
    pub order: i64,
}

/// Raw snapshot shape as exported from the document store.
#[derive(Debug, Deserialize)]
struct Snapshot {
    settings: Settings,
    #[serde(default)]
    galleries: Vec<Gallery>,
    #[serde(default)]
    exhibitions: Vec<Exhibition>,
    #[serde(default)]
    publications: Vec<Publication>,
    #[serde(default)]
    collaborations: Vec<Collaboration>,
}

/// In-memory content for one build run. Built once, read-only thereafter.
#[derive(Debug, Clone)]
pub struct ContentTree {
    pub settings: Settings,
    pub galleries: Vec<Gallery>,
    pub exhibitions_past: Vec<Exhibition>,
    pub exhibitions_upcoming: Vec<Exhibition>,
    pub publications: Vec<Publication>,
    pub collaborations: Vec<Collaboration>,
}

/// Load and sort a content snapshot from a JSON file.
pub fn load(path: &Path) -> Result<ContentTree, ContentError> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

/// Parse a content snapshot from a JSON string.
pub fn from_json(json: &str) -> Result<ContentTree, ContentError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    Ok(ContentTree::from_snapshot(snapshot))
}

impl ContentTree {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        let Snapshot {
            settings,
            mut galleries,
            mut exhibitions,
            mut publications,
            mut collaborations,
        } = snapshot;

        galleries.sort_by_key(|g| g.order);
        for gallery in &mut galleries {
            gallery.photos.sort_by_key(|p| p.order);
        }
        exhibitions.sort_by_key(|e| e.order);
        publications.sort_by_key(|p| p.order);
        collaborations.sort_by_key(|c| c.order);

        let (exhibitions_past, exhibitions_upcoming) = exhibitions
            .into_iter()
            .partition(|e| e.kind == ExhibitionKind::Past);

        ContentTree {
            settings,
            galleries,
            exhibitions_past,
            exhibitions_upcoming,
            publications,
            collaborations,
        }
    }

    /// Look up a gallery by document id.
    pub fn gallery_by_id(&self, id: &str) -> Option<&Gallery> {
        self.galleries.iter().find(|g| g.id == id)
    }

    /// Check structural invariants. Returns non-fatal warnings.
    ///
    /// Errors: duplicate gallery ids, unresolvable slugs, slug collisions
    /// within a language. Warnings: featured ids with no matching gallery
    /// (the home page omits those slots silently).
    pub fn validate(&self) -> Result<Vec<String>, ContentError> {
        let mut ids = BTreeSet::new();
        for gallery in &self.galleries {
            if !ids.insert(gallery.id.as_str()) {
                return Err(ContentError::DuplicateGalleryId(gallery.id.clone()));
            }
        }

        for lang in Lang::ALL {
            let mut seen: Vec<(&str, &str)> = Vec::new();
            for gallery in &self.galleries {
                let slug = gallery
                    .slug
                    .get(lang)
                    .ok_or_else(|| ContentError::MissingSlug(gallery.id.clone(), lang))?;
                if let Some((_, first)) = seen.iter().find(|(s, _)| *s == slug) {
                    return Err(ContentError::DuplicateSlug {
                        slug: slug.to_string(),
                        lang,
                        first: first.to_string(),
                        second: gallery.id.clone(),
                    });
                }
                seen.push((slug, &gallery.id));
            }
        }

        let mut warnings = Vec::new();
        for id in &self.settings.homepage.featured_galleries {
            if self.gallery_by_id(id).is_none() {
                warnings.push(format!(
                    "featured gallery '{id}' does not match any gallery; its card will be omitted"
                ));
            }
        }
        Ok(warnings)
    }
}
