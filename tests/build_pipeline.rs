//! End-to-end pipeline tests: snapshot in, static file tree out.

use std::path::Path;
use tempfile::TempDir;
use trifolio::content;
use trifolio::i18n::{Lang, Translations};
use trifolio::render::{self, RenderOptions};
use trifolio::template::{self, TemplateSet};

/// Minimal but complete snapshot: one published gallery with one captioned
/// photo, one draft gallery, two past exhibitions declared out of order.
const SNAPSHOT: &str = r#"{
    "settings": {
        "photographer": {
            "name": "Nadia Karim",
            "email": "studio@nadiakarim.example",
            "phone": "+33 6 00 00 00 00",
            "social": { "instagram": "https://instagram.com/nadiakarim" },
            "bio_long": { "fr": "Ligne un.\nLigne deux." },
            "profile_image": "images/profile.jpg",
            "interview_video_url": "https://player.example/embed/interview"
        },
        "homepage": {
            "hero_image": "images/hero.jpg",
            "hero_title": { "fr": "Regards" },
            "hero_subtitle": { "fr": "Photographie" },
            "hero_cta": { "fr": "Voir" },
            "carousel": [],
            "featured_galleries": ["g1"]
        },
        "contact": {
            "intro_text": { "fr": "Écrivez-moi." },
            "form_endpoint": "https://formspree.example/f/abc"
        }
    },
    "galleries": [
        {
            "id": "g1",
            "slug": { "fr": "g-un", "en": "g-one", "ar": "g1" },
            "title": { "fr": "Titre", "en": "Title", "ar": "عنوان" },
            "description_short": { "fr": "Courte." },
            "cover_image": "images/g-un/cover.jpg",
            "status": "published",
            "order": 1,
            "photos": [
                {
                    "id": "p1",
                    "image_url": "images/a.jpg",
                    "caption": { "fr": "Légende" },
                    "order": 1
                }
            ]
        },
        {
            "id": "g2",
            "slug": { "fr": "brouillon", "en": "draft-one", "ar": "musawwada" },
            "title": { "fr": "Brouillon" },
            "description_short": { "fr": "Pas fini." },
            "cover_image": "images/brouillon/cover.jpg",
            "status": "draft",
            "order": 2,
            "photos": []
        }
    ],
    "exhibitions": [
        {
            "id": "e2", "type": "past",
            "title": { "fr": "Seconde exposition" },
            "location": { "fr": "Paris" },
            "year": "2023",
            "description": { "fr": "Collective." },
            "image": "images/expo-2.jpg",
            "order": 2
        },
        {
            "id": "e1", "type": "past",
            "title": { "fr": "Première exposition" },
            "location": { "fr": "Marseille" },
            "year": "2021",
            "description": { "fr": "Personnelle." },
            "image": "images/expo-1.jpg",
            "order": 1
        }
    ],
    "publications": [],
    "collaborations": []
}"#;

fn render_into(dir: &Path, options: RenderOptions) {
    let tree = content::from_json(SNAPSHOT).unwrap();
    tree.validate().unwrap();
    let translations = Translations::from_json(template::STOCK_TRANSLATIONS).unwrap();
    let templates = TemplateSet::stock();
    render::render_site(&tree, &translations, &templates, dir, options).unwrap();
}

fn read(dir: &Path, relative: &str) -> String {
    std::fs::read_to_string(dir.join(relative))
        .unwrap_or_else(|e| panic!("missing {relative}: {e}"))
}

#[test]
fn writes_the_full_page_tree_for_all_languages() {
    let tmp = TempDir::new().unwrap();
    render_into(tmp.path(), RenderOptions::default());

    for lang in ["fr", "en", "ar"] {
        for page in ["index.html", "galeries.html", "a-propos.html", "contact.html"] {
            assert!(
                tmp.path().join(lang).join(page).exists(),
                "{lang}/{page} missing"
            );
        }
    }
    assert!(tmp.path().join("fr/galeries/g-un.html").exists());
    assert!(tmp.path().join("en/galeries/g-one.html").exists());
    assert!(tmp.path().join("ar/galeries/g1.html").exists());
    assert!(tmp.path().join("index.html").exists());
}

#[test]
fn gallery_detail_contains_title_image_and_caption() {
    let tmp = TempDir::new().unwrap();
    render_into(tmp.path(), RenderOptions::default());

    let html = read(tmp.path(), "fr/galeries/g-un.html");
    assert!(html.contains("Titre"));
    assert!(html.contains(r#"src="/images/a.jpg""#));
    assert!(html.contains("Légende"));
}

#[test]
fn language_switcher_links_match_written_files() {
    let tmp = TempDir::new().unwrap();
    render_into(tmp.path(), RenderOptions::default());

    // The fr detail page links to each language's own slugged file, and
    // those files exist where the links point (two levels up, then down).
    let html = read(tmp.path(), "fr/galeries/g-un.html");
    for target in [
        "../../fr/galeries/g-un.html",
        "../../en/galeries/g-one.html",
        "../../ar/galeries/g1.html",
    ] {
        assert!(html.contains(target), "missing switcher link {target}");
        let resolved = tmp.path().join("fr/galeries").join(target);
        let resolved = resolved.canonicalize().unwrap();
        assert!(resolved.exists());
    }
}

#[test]
fn root_redirect_targets_default_language() {
    let tmp = TempDir::new().unwrap();
    render_into(tmp.path(), RenderOptions::default());

    let html = read(tmp.path(), "index.html");
    assert!(html.contains("url=fr/index.html"));
    assert!(html.contains("window.location.href = 'fr/index.html'"));
    assert!(html.contains("Nadia Karim"));
}

#[test]
fn root_redirect_honours_configured_language() {
    let tmp = TempDir::new().unwrap();
    render_into(
        tmp.path(),
        RenderOptions {
            default_lang: Lang::En,
            ..RenderOptions::default()
        },
    );
    assert!(read(tmp.path(), "index.html").contains("url=en/index.html"));
}

#[test]
fn draft_galleries_listed_by_default_and_filterable() {
    let unfiltered = TempDir::new().unwrap();
    render_into(unfiltered.path(), RenderOptions::default());
    assert!(read(unfiltered.path(), "fr/galeries.html").contains("galeries/brouillon.html"));

    let filtered = TempDir::new().unwrap();
    render_into(
        filtered.path(),
        RenderOptions {
            include_drafts: false,
            ..RenderOptions::default()
        },
    );
    let html = read(filtered.path(), "fr/galeries.html");
    assert!(!html.contains("galeries/brouillon.html"));
    // Detail pages are still written for drafts; only the listing filters.
    assert!(filtered.path().join("fr/galeries/brouillon.html").exists());
}

#[test]
fn past_exhibitions_render_in_order_field_sequence() {
    let tmp = TempDir::new().unwrap();
    render_into(tmp.path(), RenderOptions::default());

    let html = read(tmp.path(), "fr/a-propos.html");
    let first = html.find("Première exposition").unwrap();
    let second = html.find("Seconde exposition").unwrap();
    assert!(first < second);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    render_into(a.path(), RenderOptions::default());
    render_into(b.path(), RenderOptions::default());

    for entry in walk_files(a.path()) {
        let relative = entry.strip_prefix(a.path()).unwrap().to_path_buf();
        let left = std::fs::read(&entry).unwrap();
        let right = std::fs::read(b.path().join(&relative)).unwrap();
        assert_eq!(left, right, "output differs for {}", relative.display());
    }
}

fn walk_files(root: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}
