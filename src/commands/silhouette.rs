//! Silhouette command

use crate::database::FishDatabase;
use crate::error::Result;
use crate::silhouette::{self, DirAssetSource, Silhouette};
use std::path::Path;

/// Silhouette for the fish named `name`
///
/// With `assets`, the fish's own asset is tried first; otherwise, or when it is
/// missing, the procedural outline is used.
///
/// # Errors
/// Returns `FishdleError::NotFound` if no fish has that name.
pub fn render_silhouette(
    database: &FishDatabase,
    name: &str,
    assets: Option<&Path>,
) -> Result<Silhouette> {
    let fish = database.find_by_name(name)?;
    Ok(match assets {
        Some(root) => silhouette::resolve(&DirAssetSource::new(root), fish),
        None => silhouette::fallback(fish),
    })
}
