use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use trifolio::{assets, config, content, i18n, output, render, template};

/// Version shown by `--version`: the package version on a release tag,
/// `dev@<hash>` otherwise. Both env vars come from build.rs.
fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // clap wants 'static; one small leak at startup is fine
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "trifolio")]
#[command(about = "Static site generator for multilingual photo portfolios")]
#[command(long_about = "\
Static site generator for multilingual photo portfolios

Renders a content snapshot into fixed HTML pages in three languages
(fr, en, ar) by substituting tokens into static templates.

Expected working directory layout (paths configurable in config.toml):

  config.toml          # Site config (optional, defaults shown by 'scaffold')
  content.json         # Content snapshot exported from the document store
  translations.json    # UI strings per language
  templates/           # home.html, galleries.html, gallery-detail.html,
  │                    # about.html, contact.html
  │   └── partials/    # header.html, footer.html, mobile-menu.html
  images/              # Pre-downloaded images → copied to dist/images/
  assets/              # css/js/icons → copied into dist/ (optional)

Output: dist/{fr,en,ar}/ page trees plus a root redirect document.

Run 'trifolio scaffold' to write the stock templates and config.")]
#[command(version = version_string())]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: clean output, stage assets, render pages
    Build,
    /// Render pages only (no cleaning, no asset staging)
    Render,
    /// Validate content, translations, and templates without writing
    Check,
    /// Write the stock templates, translations, and config.toml
    Scaffold,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            let inputs = load_inputs(&config)?;

            println!("==> Stage 1: Staging assets → {}", cli.output.display());
            assets::clean_output(&cli.output)?;
            let staged = assets::stage(&config.images_dir, &config.assets_dir, &cli.output)?;
            println!(
                "Copied {} image files, {} asset files",
                staged.images, staged.assets
            );

            println!("==> Stage 2: Content");
            output::print_content_output(&inputs.tree);

            println!("==> Stage 3: Rendering → {}", cli.output.display());
            let summary = render_all(&config, &inputs, &cli.output)?;
            output::print_render_output(&summary);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Render => {
            let config = config::load_config(&cli.config)?;
            let inputs = load_inputs(&config)?;
            std::fs::create_dir_all(&cli.output)?;
            let summary = render_all(&config, &inputs, &cli.output)?;
            output::print_render_output(&summary);
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            println!("==> Checking content and templates");
            let inputs = load_inputs(&config)?;
            output::print_content_output(&inputs.tree);
            println!("==> Content is valid");
        }
        Command::Scaffold => {
            let root = Path::new(".");
            template::write_stock(root)?;
            println!("Wrote templates/ and translations.json");
            let config_path = root.join("config.toml");
            if config_path.exists() {
                println!("config.toml already exists, leaving it untouched");
            } else {
                std::fs::write(&config_path, config::stock_config_toml())?;
                println!("Wrote config.toml");
            }
        }
    }

    Ok(())
}

/// Everything the renderer consumes, loaded and validated.
struct Inputs {
    tree: content::ContentTree,
    translations: i18n::Translations,
    templates: template::TemplateSet,
}

fn load_inputs(config: &config::SiteConfig) -> Result<Inputs, Box<dyn std::error::Error>> {
    let tree = content::load(&config.content_file)?;
    let warnings = tree.validate()?;
    output::print_warnings(&warnings);
    let translations = i18n::Translations::load(&config.translations_file)?;
    let templates = template::TemplateSet::load(&config.templates_dir, &config.partials_dir)?;
    Ok(Inputs {
        tree,
        translations,
        templates,
    })
}

fn render_all(
    config: &config::SiteConfig,
    inputs: &Inputs,
    out_dir: &Path,
) -> Result<render::RenderSummary, render::RenderError> {
    render::render_site(
        &inputs.tree,
        &inputs.translations,
        &inputs.templates,
        out_dir,
        render::RenderOptions {
            include_drafts: config.include_drafts,
            default_lang: config.default_lang,
        },
    )
}
