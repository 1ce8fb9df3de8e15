/// Icon conversion module
///
/// This module handles:
/// - Naming the color layout of an image (mode.rs)
/// - Converting an icon to 8-bit RGBA PNG (convert.rs)
/// - Verifying the result and swapping it over the original (verify.rs)

pub mod convert;
pub mod mode;
pub mod verify;

use crate::error::Result;
use log::info;
use std::path::Path;
use verify::SwapOutcome;

/// Convert `input` to RGBA and replace it in place.
///
/// The converted copy is written next to `input` under the derived name
/// first, then verified and renamed over `input`.
pub fn process(input: &Path) -> Result<SwapOutcome> {
    let output = convert::derive_output_path(input)?;
    info!("🔍 Converting {} -> {}", input.display(), output.display());

    convert::convert_to_rgba(input, &output)?;
    verify::verify_and_swap(input, &output)
}
