// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading program images from disk.
//!
//! Any format the `image` crate can decode is accepted. Pixels are
//! normalised to 8-bit RGB before classification, so alpha and palette
//! images behave like their flattened RGB form. One pixel is one codel.

use crate::error::LoadError;
use crate::geometry::{Classifier, Rgb, StandardPalette};
use crate::memo::Grid;
use std::path::Path;
use tracing::debug;

/// Decode the image at `path` and classify it with the standard palette.
///
/// # Errors
///
/// [`LoadError::Image`] if the file is missing or cannot be decoded,
/// [`LoadError::Grid`] if it has no pixels.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    load_grid_with(path, &StandardPalette)
}

/// Decode the image at `path`, classifying pixels with `classifier`.
pub fn load_grid_with<C>(path: impl AsRef<Path>, classifier: &C) -> Result<Grid, LoadError>
where
    C: Classifier + ?Sized,
{
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|source| LoadError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    let (width, height) = image.dimensions();
    debug!(path = %path.display(), width, height, "decoded program image");
    let pixels = image.pixels().map(|p| Rgb(p[0], p[1], p[2]));
    Ok(Grid::load(width as usize, height as usize, pixels, classifier)?)
}
