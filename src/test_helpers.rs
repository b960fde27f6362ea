//! Shared test utilities for the trifolio test suite.
//!
//! Provides a canonical content snapshot covering every rendering path
//! (drafts, video/map gating, missing captions, out-of-order lists) plus
//! lookup helpers that panic with a clear message on miss.

use crate::content::{self, ContentTree, Gallery};
use crate::i18n::Translations;

/// A snapshot exercising every entity kind.
///
/// Lists are deliberately out of `order` so loader sorting is observable:
/// galleries appear as 2,1,3 and past exhibitions as 2,1.
pub fn sample_snapshot_json() -> String {
    r#"{
        "settings": {
            "photographer": {
                "name": "Nadia Karim",
                "email": "studio@nadiakarim.example",
                "phone": "+33 6 00 00 00 00",
                "social": {
                    "instagram": "https://instagram.com/nadiakarim"
                },
                "bio_short": { "fr": "Photographe documentaire." },
                "bio_long": {
                    "fr": "Première ligne.\nSeconde ligne.",
                    "en": "First line.\nSecond line."
                },
                "profile_image": "images/profile.jpg",
                "interview_video_url": "https://player.example/embed/interview"
            },
            "homepage": {
                "hero_image": "images/hero.jpg",
                "hero_title": { "fr": "Regards", "en": "Gazes", "ar": "نظرات" },
                "hero_subtitle": { "fr": "Photographie documentaire" },
                "hero_cta": { "fr": "Voir les galeries", "en": "View galleries" },
                "carousel": [
                    { "image": "images/carousel-1.jpg", "caption": { "fr": "Aube" } },
                    { "image": "images/carousel-2.jpg" }
                ],
                "featured_galleries": ["g2", "g1"]
            },
            "contact": {
                "intro_text": { "fr": "Écrivez-moi.", "en": "Write to me." },
                "form_endpoint": "https://formspree.example/f/abc"
            }
        },
        "galleries": [
            {
                "id": "g2",
                "slug": { "fr": "marges", "en": "margins", "ar": "hawamish" },
                "title": { "fr": "Marges", "en": "Margins" },
                "description_short": { "fr": "En marge.", "en": "At the margin." },
                "description_long": { "fr": "Texte long sur les marges." },
                "cover_image": "images/marges/cover.jpg",
                "status": "published",
                "order": 2,
                "show_video": true,
                "video_url": "https://player.example/embed/marges",
                "show_map": true,
                "map_location": {
                    "latitude": 15.3694,
                    "longitude": 44.191,
                    "place_name": { "fr": "Sanaa", "en": "Sana'a" }
                },
                "photos": [
                    {
                        "id": "p2",
                        "image_url": "images/marges/deux.jpg",
                        "order": 2
                    },
                    {
                        "id": "p1",
                        "image_url": "images/marges/un.jpg",
                        "caption": { "fr": "Légende", "en": "Caption" },
                        "order": 1
                    }
                ]
            },
            {
                "id": "g1",
                "slug": { "fr": "g-un", "en": "g-one", "ar": "g1" },
                "title": { "fr": "Titre", "en": "Title", "ar": "عنوان" },
                "description_short": { "fr": "Courte description." },
                "cover_image": "images/g-un/cover.jpg",
                "status": "published",
                "order": 1,
                "photos": [
                    {
                        "id": "p3",
                        "image_url": "images/a.jpg",
                        "caption": { "fr": "Légende" },
                        "order": 1
                    }
                ]
            },
            {
                "id": "g3",
                "slug": { "fr": "brouillon", "en": "draft", "ar": "musawwada" },
                "title": { "fr": "Brouillon" },
                "description_short": { "fr": "Pas encore prêt." },
                "cover_image": "images/brouillon/cover.jpg",
                "status": "draft",
                "order": 3,
                "show_video": true,
                "photos": []
            }
        ],
        "exhibitions": [
            {
                "id": "e2",
                "type": "past",
                "title": { "fr": "Seconde", "en": "Second" },
                "location": { "fr": "Paris" },
                "year": "2023",
                "description": { "fr": "Exposition collective." },
                "image": "images/expo-2.jpg",
                "order": 2
            },
            {
                "id": "e1",
                "type": "past",
                "title": { "fr": "Première", "en": "First" },
                "location": { "fr": "Marseille" },
                "year": "2021",
                "description": { "fr": "Exposition personnelle." },
                "image": "images/expo-1.jpg",
                "order": 1
            },
            {
                "id": "e3",
                "type": "upcoming",
                "title": { "fr": "Prochaine" },
                "location": { "fr": "Beyrouth" },
                "year": "2027",
                "description": { "fr": "À venir." },
                "image": "images/expo-3.jpg",
                "order": 1
            }
        ],
        "publications": [
            {
                "id": "pub1",
                "title": { "fr": "Monographie", "en": "Monograph" },
                "publisher": "Éditions Lumière",
                "year": "2022",
                "description": { "fr": "Un livre." },
                "cover_image": "images/pub-1.jpg",
                "external_url": "https://editions.example/monographie",
                "order": 1
            }
        ],
        "collaborations": [
            {
                "id": "c1",
                "organization": "Agence Presse",
                "role": { "fr": "Photographe associée", "en": "Associate photographer" },
                "description": { "fr": "Reportages réguliers." },
                "logo_image": "images/logo-agence.png",
                "order": 1
            }
        ]
    }"#
    .to_string()
}

/// Parse [`sample_snapshot_json`] into a sorted tree.
pub fn sample_tree() -> ContentTree {
    content::from_json(&sample_snapshot_json()).unwrap()
}

/// The embedded stock translation table.
pub fn stock_translations() -> Translations {
    Translations::from_json(crate::template::STOCK_TRANSLATIONS).unwrap()
}

/// Find a gallery by id. Panics if not found.
pub fn find_gallery<'a>(tree: &'a ContentTree, id: &str) -> &'a Gallery {
    tree.gallery_by_id(id).unwrap_or_else(|| {
        let ids: Vec<&str> = tree.galleries.iter().map(|g| g.id.as_str()).collect();
        panic!("gallery '{id}' not found. Available: {ids:?}")
    })
}
