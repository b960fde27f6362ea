//! Output staging: cleaning the destination and copying static files.
//!
//! The renderer only ever references image paths; the bytes themselves are
//! staged here. Two local trees are copied into the output before rendering:
//!
//! - `images/` — the image tree previously downloaded from the blob store by
//!   the admin pipeline, copied to `{out}/images/`.
//! - `assets/` — stylesheets, scripts, and icons, copied into the output
//!   root preserving structure (`assets/css/style.css` → `{out}/css/style.css`).
//!
//! A missing source tree copies zero files rather than failing: a portfolio
//! without custom assets is legal, and `render` can be pointed at an output
//! directory whose images were staged by an earlier `build`.

use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Files copied per source tree during staging.
#[derive(Debug, Default)]
pub struct AssetSummary {
    pub images: usize,
    pub assets: usize,
}

/// Remove and recreate the output directory.
pub fn clean_output(out_dir: &Path) -> std::io::Result<()> {
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir)?;
    }
    std::fs::create_dir_all(out_dir)
}

/// Copy `images_dir` and `assets_dir` into the output tree.
pub fn stage(
    images_dir: &Path,
    assets_dir: &Path,
    out_dir: &Path,
) -> Result<AssetSummary, AssetError> {
    Ok(AssetSummary {
        images: copy_tree(images_dir, &out_dir.join("images"))?,
        assets: copy_tree(assets_dir, out_dir)?,
    })
}

/// Recursively copy a directory tree. Returns the number of files copied;
/// a missing source is zero files, not an error.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
