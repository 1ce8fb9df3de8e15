/// Verification and in-place swap
///
/// Re-opens the converted file, reports its mode and channel count and,
/// when it really is RGBA, moves it over the original.

use super::convert::open_image;
use super::mode::ColorInfo;
use crate::error::{IconError, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// What `verify_and_swap` did with the converted file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Original deleted, converted file renamed into its place
    Replaced,
    /// Converted file failed the check; both files were left alone
    Skipped(ColorInfo),
}

/// Decode the image at `path` and report its color layout
pub fn inspect(path: &Path) -> Result<ColorInfo> {
    let img = open_image(path)?;
    Ok(ColorInfo::from_color_type(img.color()))
}

/// Check `converted` and, if it is 8-bit RGBA with 4 channels, replace `original` with it.
///
/// A failed check is not an error: the converted file stays next to the
/// untouched original and `SwapOutcome::Skipped` is returned.
pub fn verify_and_swap(original: &Path, converted: &Path) -> Result<SwapOutcome> {
    let color = inspect(converted)?;

    println!("Image mode: {}", color.mode);
    println!("Number of channels: {}", color.channels);

    if !color.is_rgba() {
        warn!(
            "⚠️  {} is {} with {} channels, leaving {} in place",
            converted.display(),
            color.mode,
            color.channels,
            original.display()
        );
        return Ok(SwapOutcome::Skipped(color));
    }

    fs::remove_file(original).map_err(|source| IconError::Remove {
        path: original.to_path_buf(),
        source,
    })?;
    println!("old {} removed", original.display());

    fs::rename(converted, original).map_err(|source| IconError::Rename {
        from: converted.to_path_buf(),
        to: original.to_path_buf(),
        source,
    })?;

    info!("✅ {} replaced with RGBA version", original.display());
    Ok(SwapOutcome::Replaced)
}
