//! Static page rendering.
//!
//! Takes the loaded [`ContentTree`], the translation table, and a
//! [`TemplateSet`] and writes the final site: one page per (language × page
//! kind), one detail page per (language × gallery), and a root redirect
//! document.
//!
//! ## Output layout
//!
//! ```text
//! dist/
//! ├── index.html                  # redirect to the default language
//! ├── fr/
//! │   ├── index.html              # home
//! │   ├── galeries.html           # galleries index
//! │   ├── a-propos.html           # about
//! │   ├── contact.html            # contact
//! │   └── galeries/
//! │       └── {slug.fr}.html      # one per gallery
//! ├── en/ ...
//! └── ar/ ...
//! ```
//!
//! ## How a page is produced
//!
//! Every page goes through the same two layers:
//!
//! 1. A **global pass** shared by all pages: language code, photographer
//!    identity, social links (`#` for absent networks), the three
//!    language-switcher links, and the full UI translation vocabulary.
//! 2. A **page pass** adding that template's own fields — scalars resolved
//!    for the page's language, and list fragments (cards, figures, slides)
//!    built with maud so their interpolations are entity-escaped.
//!
//! Scalar tokens are substituted verbatim: content is operator-authored
//! through the admin console, not untrusted input.
//!
//! ## Failure semantics
//!
//! A localized field that resolves for neither the page's language nor
//! French is a content error and aborts the whole build. Missing translation
//! keys never abort — they degrade to the raw key string in the HTML. No
//! partial output is cleaned up on failure.

use crate::content::{ContentTree, Exhibition, Gallery, Photo};
use crate::i18n::{Lang, Localized, Translations};
use crate::links::{PageKind, lang_links};
use crate::template::{Substitutions, TemplateSet};
use maud::{Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{entity}: '{field}' has no '{lang}' or 'fr' value")]
    MissingField {
        entity: String,
        field: &'static str,
        lang: Lang,
    },
}

/// Knobs the caller controls; everything else is fixed layout.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Whether draft galleries appear on the galleries index. Defaults to
    /// `true`, matching the source system's observed (unfiltered) behavior.
    pub include_drafts: bool,
    /// Target of the root redirect document.
    pub default_lang: Lang,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            include_drafts: true,
            default_lang: Lang::FALLBACK,
        }
    }
}

/// Paths written during one render, relative to the output root.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub pages: Vec<String>,
}

/// Fixed Google Maps embed prefix; latitude/longitude are interpolated in.
const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d";

/// Every UI token of the global pass and its translation-table key.
const UI_TOKENS: &[(&str, &str)] = &[
    ("TRAD_NAV_GALLERIES", "nav.galleries"),
    ("TRAD_NAV_ABOUT", "nav.about"),
    ("TRAD_NAV_CONTACT", "nav.contact"),
    ("TRAD_HOME_LATEST_WORK", "home.latest_work"),
    ("TRAD_HOME_VIEW_ALL", "home.view_all_galleries"),
    ("TRAD_GALLERY_BACK", "gallery.back_to_galleries"),
    ("TRAD_GALLERY_VIEW", "gallery.view_gallery"),
    ("TRAD_GALLERY_DOCUMENTARY", "gallery.documentary"),
    ("TRAD_GALLERY_LOCATION", "gallery.location"),
    ("TRAD_ABOUT_TITLE", "about.title"),
    ("TRAD_ABOUT_BIOGRAPHY", "about.biography"),
    ("TRAD_ABOUT_INTERVIEW", "about.interview"),
    ("TRAD_ABOUT_PAST_EXHIBITIONS", "about.past_exhibitions"),
    ("TRAD_ABOUT_UPCOMING", "about.upcoming_exhibitions"),
    ("TRAD_ABOUT_PRESS", "about.press_publications"),
    ("TRAD_ABOUT_COLLABORATIONS", "about.collaborations"),
    ("TRAD_ABOUT_VIEW_PUB", "about.view_publication"),
    ("TRAD_CONTACT_TITLE", "contact.title"),
    ("TRAD_CONTACT_SEND_MESSAGE", "contact.send_message"),
    ("TRAD_CONTACT_PROFESSIONAL", "contact.professional_info"),
    ("TRAD_CONTACT_NAME", "contact.name"),
    ("TRAD_CONTACT_EMAIL", "contact.email"),
    ("TRAD_CONTACT_SUBJECT", "contact.subject"),
    ("TRAD_CONTACT_MESSAGE", "contact.message"),
    ("TRAD_CONTACT_SEND", "contact.send"),
    ("TRAD_CONTACT_PHONE", "contact.phone"),
    ("TRAD_CONTACT_FOLLOW", "contact.follow_me"),
    ("TRAD_CONTACT_SENDING", "contact.sending"),
    ("TRAD_CONTACT_SUCCESS", "contact.success"),
    ("TRAD_CONTACT_ERROR", "contact.error"),
    ("TRAD_FOOTER_RIGHTS", "footer.all_rights_reserved"),
    ("TRAD_FOOTER_NAV", "footer.navigation"),
    ("TRAD_FOOTER_FOLLOW", "footer.follow_me"),
    ("TRAD_FOOTER_HOME", "footer.home"),
    ("TRAD_FOOTER_COPYRIGHT", "footer.copyright"),
    ("TRAD_FOOTER_DESIGN_DEV", "footer.design_dev"),
];

/// Resolve a required localized field, with French fallback.
fn required<'a>(
    value: &'a Localized,
    lang: Lang,
    entity: &str,
    field: &'static str,
) -> Result<&'a str, RenderError> {
    value.get(lang).ok_or_else(|| RenderError::MissingField {
        entity: entity.to_string(),
        field,
        lang,
    })
}

/// Rewrite an image reference root-relative. Absolute URLs and paths that
/// already start at the root pass through unchanged.
fn root_relative(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// A social link, with `#` standing in for absent or empty networks.
fn social_href(url: Option<&str>) -> &str {
    url.filter(|u| !u.is_empty()).unwrap_or("#")
}

/// Renders all pages for one content tree.
pub struct Renderer<'a> {
    pub tree: &'a ContentTree,
    pub translations: &'a Translations,
    pub templates: &'a TemplateSet,
}

impl Renderer<'_> {
    fn t(&self, key: &str, lang: Lang) -> String {
        self.translations.translate(key, lang)
    }

    /// The substitution set shared by every page: partials, identity,
    /// social links, language-switcher links, UI translations.
    fn global(&self, lang: Lang, kind: PageKind<'_>) -> Substitutions {
        let photographer = &self.tree.settings.photographer;
        let links = lang_links(kind);

        let mut subs = Substitutions::new()
            .partial("HEADER", &self.templates.header)
            .partial("FOOTER", &self.templates.footer)
            .partial("MOBILE_MENU", &self.templates.mobile_menu)
            .set("LANG", lang.code())
            .set("PHOTOGRAPHER_NAME", &photographer.name)
            .set("PHOTOGRAPHER_EMAIL", &photographer.email)
            .set("PHOTOGRAPHER_PHONE", &photographer.phone)
            .set(
                "INSTAGRAM_URL",
                social_href(Some(&photographer.social.instagram)),
            )
            .set(
                "FACEBOOK_URL",
                social_href(photographer.social.facebook.as_deref()),
            )
            .set(
                "TWITTER_URL",
                social_href(photographer.social.twitter.as_deref()),
            )
            .set("LANG_LINK_FR", &links[&Lang::Fr])
            .set("LANG_LINK_EN", &links[&Lang::En])
            .set("LANG_LINK_AR", &links[&Lang::Ar]);

        for (token, key) in UI_TOKENS {
            subs = subs.set(*token, self.t(key, lang));
        }
        subs
    }

    /// Home page: hero, carousel, featured gallery cards.
    pub fn home(&self, lang: Lang) -> Result<String, RenderError> {
        let homepage = &self.tree.settings.homepage;
        let entity = "settings.homepage";

        let mut featured = String::new();
        // Featured order follows the id list; ids with no matching gallery
        // are omitted without leaving broken markup behind.
        for id in &homepage.featured_galleries {
            if let Some(gallery) = self.tree.gallery_by_id(id) {
                featured.push_str(&self.gallery_card(gallery, lang)?.into_string());
            }
        }

        let subs = self
            .global(lang, PageKind::Home)
            .set("HERO_IMAGE", root_relative(&homepage.hero_image))
            .set(
                "HERO_TITLE",
                required(&homepage.hero_title, lang, entity, "hero_title")?,
            )
            .set(
                "HERO_SUBTITLE",
                required(&homepage.hero_subtitle, lang, entity, "hero_subtitle")?,
            )
            .set(
                "HERO_CTA",
                required(&homepage.hero_cta, lang, entity, "hero_cta")?,
            )
            .set("CAROUSEL_SLIDES", self.carousel_slides(lang).into_string())
            .set("FEATURED_GALLERIES", featured);

        Ok(subs.apply(&self.templates.home))
    }

    /// Galleries index: one card per gallery, in gallery order.
    pub fn galleries_index(
        &self,
        lang: Lang,
        include_drafts: bool,
    ) -> Result<String, RenderError> {
        let mut cards = String::new();
        for gallery in &self.tree.galleries {
            if !include_drafts && gallery.status == crate::content::Status::Draft {
                continue;
            }
            cards.push_str(&self.gallery_card(gallery, lang)?.into_string());
        }

        let subs = self
            .global(lang, PageKind::Galleries)
            .set("GALLERIES_LIST", cards);
        Ok(subs.apply(&self.templates.galleries))
    }

    /// Gallery detail page for one (language, gallery) pair.
    pub fn gallery_detail(&self, gallery: &Gallery, lang: Lang) -> Result<String, RenderError> {
        let entity = format!("gallery '{}'", gallery.id);

        let description = match gallery
            .description_long
            .as_ref()
            .and_then(|long| long.get(lang))
        {
            Some(long) => long.to_string(),
            None => {
                required(&gallery.description_short, lang, &entity, "description_short")?
                    .to_string()
            }
        };

        let subs = self
            .global(lang, PageKind::GalleryDetail(&gallery.slug))
            .set(
                "GALLERY_TITLE",
                required(&gallery.title, lang, &entity, "title")?,
            )
            .set("GALLERY_COVER", root_relative(&gallery.cover_image))
            .set("GALLERY_DESCRIPTION", description)
            .set(
                "GALLERY_PHOTOS",
                photo_figures(&gallery.photos, lang).into_string(),
            )
            .set(
                "GALLERY_VIDEO",
                self.video_block(gallery, lang)
                    .map(Markup::into_string)
                    .unwrap_or_default(),
            )
            .set(
                "GALLERY_MAP",
                self.map_block(gallery, lang)
                    .map(Markup::into_string)
                    .unwrap_or_default(),
            );

        Ok(subs.apply(&self.templates.gallery_detail))
    }

    /// About page: bio, interview, exhibitions, publications, collaborations.
    pub fn about(&self, lang: Lang) -> Result<String, RenderError> {
        let photographer = &self.tree.settings.photographer;
        let entity = "settings.photographer";

        // Newlines in the authored bio become paragraph boundaries; the
        // template wraps the whole value in a <p> pair.
        let bio = required(&photographer.bio_long, lang, entity, "bio_long")?
            .replace('\n', "</p><p>");

        let mut past = String::new();
        for expo in &self.tree.exhibitions_past {
            past.push_str(&exhibition_card(expo, lang, false)?.into_string());
        }
        let mut upcoming = String::new();
        for expo in &self.tree.exhibitions_upcoming {
            upcoming.push_str(&exhibition_card(expo, lang, true)?.into_string());
        }
        let mut publications = String::new();
        for publication in &self.tree.publications {
            publications.push_str(&self.publication_card(publication, lang)?.into_string());
        }
        let mut collaborations = String::new();
        for collaboration in &self.tree.collaborations {
            collaborations.push_str(&collaboration_card(collaboration, lang)?.into_string());
        }

        let subs = self
            .global(lang, PageKind::About)
            .set("BIO_LONG", bio)
            .set("PROFILE_IMAGE", root_relative(&photographer.profile_image))
            .set("INTERVIEW_VIDEO", &photographer.interview_video_url)
            .set("PAST_EXHIBITIONS", past)
            .set("UPCOMING_EXHIBITIONS", upcoming)
            .set("PUBLICATIONS", publications)
            .set("COLLABORATIONS", collaborations);

        Ok(subs.apply(&self.templates.about))
    }

    /// Contact page: intro text and the external form endpoint.
    pub fn contact(&self, lang: Lang) -> Result<String, RenderError> {
        let contact = &self.tree.settings.contact;
        let subs = self
            .global(lang, PageKind::Contact)
            .set(
                "CONTACT_INTRO",
                required(&contact.intro_text, lang, "settings.contact", "intro_text")?,
            )
            .set("CONTACT_FORM_ENDPOINT", &contact.form_endpoint);
        Ok(subs.apply(&self.templates.contact))
    }

    fn carousel_slides(&self, lang: Lang) -> Markup {
        let slides = &self.tree.settings.homepage.carousel;
        html! {
            @for slide in slides {
                @let caption = slide.caption.as_ref().and_then(|c| c.get(lang)).unwrap_or("");
                div class="swiper-slide" {
                    img src=(root_relative(&slide.image)) alt=(caption);
                }
            }
        }
    }

    /// One card linking to a gallery's detail page, used on the home page
    /// and the galleries index (both live at the language root).
    fn gallery_card(&self, gallery: &Gallery, lang: Lang) -> Result<Markup, RenderError> {
        let entity = format!("gallery '{}'", gallery.id);
        let slug = required(&gallery.slug, lang, &entity, "slug")?;
        let title = required(&gallery.title, lang, &entity, "title")?;
        let description = required(&gallery.description_short, lang, &entity, "description_short")?;
        let view_label = self.t("gallery.view_gallery", lang);

        Ok(html! {
            a href={ "galeries/" (slug) ".html" } class="gallery-card" {
                div class="gallery-card-image" {
                    img src=(root_relative(&gallery.cover_image)) alt=(title);
                }
                div class="gallery-card-overlay" {
                    h3 class="gallery-card-title" { (title) }
                    p class="gallery-card-description" { (description) }
                    span class="gallery-card-link" { (view_label) " →" }
                }
            }
        })
    }

    /// Video block, present only when the gallery enables it and carries a
    /// non-empty URL.
    fn video_block(&self, gallery: &Gallery, lang: Lang) -> Option<Markup> {
        if !gallery.show_video {
            return None;
        }
        let url = gallery.video_url.as_deref().filter(|u| !u.is_empty())?;
        let heading = self.t("gallery.documentary", lang);
        Some(html! {
            section class="gallery-video" {
                h3 class="section-title" { (heading) }
                div class="video-container" {
                    iframe src=(url) allowfullscreen {}
                }
            }
        })
    }

    /// Map block, present only when enabled and a location is set. The place
    /// name falls back to the translated generic location label.
    fn map_block(&self, gallery: &Gallery, lang: Lang) -> Option<Markup> {
        if !gallery.show_map {
            return None;
        }
        let location = gallery.map_location.as_ref()?;
        let heading = location
            .place_name
            .as_ref()
            .and_then(|n| n.get(lang))
            .map(str::to_string)
            .unwrap_or_else(|| self.t("gallery.location", lang));
        let embed_url = format!(
            "{MAP_EMBED_URL}{}!2d{}",
            location.latitude, location.longitude
        );
        Some(html! {
            section class="gallery-map" {
                h3 class="section-title" { (heading) }
                div class="video-container" {
                    iframe src=(embed_url) allowfullscreen loading="lazy" {}
                }
            }
        })
    }

    fn publication_card(
        &self,
        publication: &crate::content::Publication,
        lang: Lang,
    ) -> Result<Markup, RenderError> {
        let entity = format!("publication '{}'", publication.id);
        let title = required(&publication.title, lang, &entity, "title")?;
        let description = required(&publication.description, lang, &entity, "description")?;
        let link_label = self.t("about.view_publication", lang);

        Ok(html! {
            div class="card card-publication" {
                img src=(root_relative(&publication.cover_image)) alt=(title) class="card-image";
                div class="card-content" {
                    h3 class="card-title" { (title) }
                    p class="card-meta" { (publication.publisher) " • " (publication.year) }
                    p class="card-description" { (description) }
                    a href=(publication.external_url) target="_blank" rel="noopener" class="card-link" {
                        (link_label)
                    }
                }
            }
        })
    }
}

/// One figure per photo, in photo order. An empty photo list yields an
/// empty fragment, not an error.
fn photo_figures(photos: &[Photo], lang: Lang) -> Markup {
    html! {
        @for photo in photos {
            @let caption = photo.caption.as_ref().and_then(|c| c.get(lang)).unwrap_or("");
            figure class="gallery-image-item" {
                img src=(root_relative(&photo.image_url)) alt=(caption);
                figcaption class="gallery-image-caption" { (caption) }
            }
        }
    }
}

/// Exhibition card. Upcoming exhibitions show the year as a badge rather
/// than inline with the location.
fn exhibition_card(expo: &Exhibition, lang: Lang, upcoming: bool) -> Result<Markup, RenderError> {
    let entity = format!("exhibition '{}'", expo.id);
    let title = required(&expo.title, lang, &entity, "title")?;
    let location = required(&expo.location, lang, &entity, "location")?;
    let description = required(&expo.description, lang, &entity, "description")?;

    Ok(html! {
        div class="card card-exhibition" {
            img src=(root_relative(&expo.image)) alt=(title) class="card-image";
            div class="card-content" {
                @if upcoming {
                    span class="card-badge" { (expo.year) }
                    h3 class="card-title" { (title) }
                    p class="card-meta" { (location) }
                } @else {
                    h3 class="card-title" { (title) }
                    p class="card-meta" { (location) " • " (expo.year) }
                }
                p class="card-description" { (description) }
            }
        }
    })
}

fn collaboration_card(
    collaboration: &crate::content::Collaboration,
    lang: Lang,
) -> Result<Markup, RenderError> {
    let entity = format!("collaboration '{}'", collaboration.id);
    let role = required(&collaboration.role, lang, &entity, "role")?;
    let description = required(&collaboration.description, lang, &entity, "description")?;

    Ok(html! {
        div class="card card-collaboration" {
            img src=(root_relative(&collaboration.logo_image)) alt=(collaboration.organization) class="card-image";
            div class="card-content" {
                h3 class="card-title" { (collaboration.organization) }
                p class="card-meta card-role" { (role) }
                p class="card-description" { (description) }
            }
        }
    })
}

/// The root redirect document: immediate client-side and meta-refresh
/// redirect to the default language's home page. Not template-driven.
pub fn redirect_page(site_name: &str, default_lang: Lang) -> String {
    let target = format!("{default_lang}/index.html");
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{default_lang}\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta http-equiv=\"refresh\" content=\"0; url={target}\">\n\
         \x20 <script>window.location.href = '{target}';</script>\n\
         </head>\n\
         <body>\n\
         \x20 <p><a href=\"{target}\">{site_name}</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Render the complete site into `out_dir`.
///
/// Writes every (language × page) combination plus the root redirect.
/// Page-render order is fixed for reproducible summaries, but each page
/// only touches its own output file.
pub fn render_site(
    tree: &ContentTree,
    translations: &Translations,
    templates: &TemplateSet,
    out_dir: &Path,
    options: RenderOptions,
) -> Result<RenderSummary, RenderError> {
    let renderer = Renderer {
        tree,
        translations,
        templates,
    };
    let mut summary = RenderSummary::default();

    let mut write = |relative: String, content: String| -> Result<(), RenderError> {
        fs::write(out_dir.join(&relative), content)?;
        summary.pages.push(relative);
        Ok(())
    };

    for lang in Lang::ALL {
        let lang_dir = out_dir.join(lang.code());
        fs::create_dir_all(lang_dir.join("galeries"))?;

        write(format!("{lang}/index.html"), renderer.home(lang)?)?;
        write(
            format!("{lang}/galeries.html"),
            renderer.galleries_index(lang, options.include_drafts)?,
        )?;
        for gallery in &tree.galleries {
            let entity = format!("gallery '{}'", gallery.id);
            let slug = required(&gallery.slug, lang, &entity, "slug")?;
            write(
                format!("{lang}/galeries/{slug}.html"),
                renderer.gallery_detail(gallery, lang)?,
            )?;
        }
        write(format!("{lang}/a-propos.html"), renderer.about(lang)?)?;
        write(format!("{lang}/contact.html"), renderer.contact(lang)?)?;
    }

    write(
        "index.html".to_string(),
        redirect_page(&tree.settings.photographer.name, options.default_lang),
    )?;

    Ok(summary)
}
