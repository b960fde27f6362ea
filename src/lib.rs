//! # Trifolio
//!
//! A trilingual static site generator for photography portfolios. Content is
//! authored in a remote document store through a separate admin console; a
//! local export of that store (`content.json`) plus static HTML templates and
//! a translation table are rendered into a fixed page tree in three
//! languages (`fr`, `en`, `ar`).
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Stage assets   images/ + assets/  →  dist/          (verbatim copy)
//! 2. Load content   content.json       →  ContentTree    (sort + validate)
//! 3. Render         templates + i18n   →  dist/{lang}/   (token substitution)
//! ```
//!
//! The stages are sequential and independent: staging never reads content,
//! and the renderer never performs network or image I/O — by the time it
//! runs, every image it references is a local path. Each page render touches
//! only its own output file, so page order is irrelevant to correctness;
//! rendering the same inputs twice produces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading and validation, stock config text |
//! | [`content`] | snapshot deserialization, ordering, validation (`ContentTree`) |
//! | [`i18n`] | languages, localized strings with `fr` fallback, translation table |
//! | [`template`] | template/partial loading and the `{{TOKEN}}` substitution engine |
//! | [`links`] | language-switcher link computation per page kind |
//! | [`render`] | per-page renderers, global token pass, site orchestration |
//! | [`assets`] | output cleaning and recursive copy of images/assets |
//! | [`output`] | CLI output formatting — content inventory and render summary |
//!
//! # Design Decisions
//!
//! ## Templates On Disk, Fragments In Code
//!
//! Page skeletons are operator-editable HTML files with `{{TOKEN}}`
//! placeholders — the deployment artifact designers actually touch. The
//! repeated structures spliced into them (gallery cards, photo figures,
//! carousel slides) are built with [Maud](https://maud.lambda.xyz/), so list
//! markup is compile-time checked and interpolations are entity-escaped,
//! while the surrounding page stays a plain file. A stock template set is
//! embedded in the binary and written out by `trifolio scaffold`.
//!
//! ## One Fallback Rule
//!
//! Every localized value resolves as requested-language → French. That rule
//! lives in exactly one accessor ([`i18n::Localized::get`]) instead of being
//! re-spelled at each of the few dozen call sites. Content that resolves for
//! no language is an error and aborts the build; a missing UI translation
//! key merely leaves the key literal visible in the page.
//!
//! ## Snapshot As The Provider Boundary
//!
//! The document store and blob store are external collaborators. The build
//! consumes their local exports, which keeps the binary free of network
//! dependencies and makes every build reproducible from a directory you can
//! check in, diff, and copy around.
//!
//! ## Fail The Whole Build
//!
//! There is no partial-success mode: the first content or I/O error aborts
//! with a non-zero exit, and previously written files are left as-is for
//! inspection. Static hosting makes retries pointless — you fix the content
//! and rebuild.

pub mod assets;
pub mod config;
pub mod content;
pub mod i18n;
pub mod links;
pub mod output;
pub mod render;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
