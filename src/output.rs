//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity is its semantic identity (title, position), with counts and
//! status as secondary context. Each surface has a `format_*` function that
//! returns lines (pure, testable) and a `print_*` wrapper that writes them
//! to stdout.
//!
//! ## Check / build inventory
//!
//! ```text
//! Galleries
//! 001 Titre (1 photo)
//! 002 Marges (2 photos)
//! 003 Brouillon (0 photos, draft)
//!
//! Exhibitions
//! 001 Première (past, 2021)
//! ...
//! ```
//!
//! ## Render summary
//!
//! ```text
//! fr: 7 pages
//! en: 7 pages
//! ar: 7 pages
//! Generated 22 pages (including root redirect)
//! ```

use crate::content::{ContentTree, Status};
use crate::i18n::Lang;
use crate::render::RenderSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display title for inventory lines: default-language text, id as fallback.
fn display_title<'a>(localized: &'a crate::i18n::Localized, id: &'a str) -> &'a str {
    localized.get(Lang::FALLBACK).unwrap_or(id)
}

/// Format the content inventory shown by `check` and `build`.
pub fn format_content_output(tree: &ContentTree) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Galleries".to_string());
    for (idx, gallery) in tree.galleries.iter().enumerate() {
        let title = display_title(&gallery.title, &gallery.id);
        let photos = gallery.photos.len();
        let noun = if photos == 1 { "photo" } else { "photos" };
        let detail = match gallery.status {
            Status::Draft => format!("({photos} {noun}, draft)"),
            Status::Published => format!("({photos} {noun})"),
        };
        lines.push(format!("{} {} {}", format_index(idx + 1), title, detail));
    }

    if !tree.exhibitions_past.is_empty() || !tree.exhibitions_upcoming.is_empty() {
        lines.push(String::new());
        lines.push("Exhibitions".to_string());
        let all = tree
            .exhibitions_past
            .iter()
            .map(|e| (e, "past"))
            .chain(tree.exhibitions_upcoming.iter().map(|e| (e, "upcoming")));
        for (idx, (expo, kind)) in all.enumerate() {
            let title = display_title(&expo.title, &expo.id);
            lines.push(format!(
                "{} {} ({kind}, {})",
                format_index(idx + 1),
                title,
                expo.year
            ));
        }
    }

    if !tree.publications.is_empty() {
        lines.push(String::new());
        lines.push("Publications".to_string());
        for (idx, publication) in tree.publications.iter().enumerate() {
            let title = display_title(&publication.title, &publication.id);
            lines.push(format!(
                "{} {} ({}, {})",
                format_index(idx + 1),
                title,
                publication.publisher,
                publication.year
            ));
        }
    }

    if !tree.collaborations.is_empty() {
        lines.push(String::new());
        lines.push("Collaborations".to_string());
        for (idx, collaboration) in tree.collaborations.iter().enumerate() {
            lines.push(format!(
                "{} {}",
                format_index(idx + 1),
                collaboration.organization
            ));
        }
    }

    lines
}

/// Format validation warnings (dangling featured ids and the like).
pub fn format_warnings(warnings: &[String]) -> Vec<String> {
    warnings.iter().map(|w| format!("Warning: {w}")).collect()
}

/// Format the per-language page counts after a render.
pub fn format_render_output(summary: &RenderSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for lang in Lang::ALL {
        let prefix = format!("{lang}/");
        let count = summary
            .pages
            .iter()
            .filter(|p| p.starts_with(&prefix))
            .count();
        lines.push(format!("{lang}: {count} pages"));
    }
    lines.push(format!(
        "Generated {} pages (including root redirect)",
        summary.pages.len()
    ));
    lines
}

pub fn print_content_output(tree: &ContentTree) {
    for line in format_content_output(tree) {
        println!("{line}");
    }
}

pub fn print_warnings(warnings: &[String]) {
    for line in format_warnings(warnings) {
        eprintln!("{line}");
    }
}

pub fn print_render_output(summary: &RenderSummary) {
    for line in format_render_output(summary) {
        println!("{line}");
    }
}
