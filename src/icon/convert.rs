/// RGBA conversion
///
/// Decodes the source icon, expands it to 8-bit RGBA and writes it as a PNG
/// next to the original under a derived name.

use crate::error::{IconError, Result};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the stem of the converted file
const OUTPUT_SUFFIX: &str = "o.png";

/// Derive the intermediate output path for `input`.
///
/// Everything in the file name up to the first `.` is kept and `o.png` is
/// appended, so `128x128@2x.png` becomes `128x128@2xo.png`. The directory is
/// left as is.
pub fn derive_output_path(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IconError::InvalidPath(input.to_path_buf()))?;

    let stem = file_name.split('.').next().unwrap_or(file_name);

    Ok(input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX)))
}

/// Open and decode an image, detecting the format from its content.
///
/// The extension is ignored, so a JPEG saved as `*.png` still decodes.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| IconError::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}

/// Convert the image at `input` to RGBA and save it as a PNG at `output`.
///
/// Nothing is left behind on failure: a missing or undecodable `input`
/// writes nothing, and a partially written `output` is removed.
pub fn convert_to_rgba(input: &Path, output: &Path) -> Result<()> {
    let img = open_image(input)?;
    let source_color = img.color();

    let rgba = img.into_rgba8();
    debug!(
        "Decoded {} ({}x{}, {:?})",
        input.display(),
        rgba.width(),
        rgba.height(),
        source_color
    );

    if let Err(source) = rgba.save_with_format(output, ImageFormat::Png) {
        if output.is_file() {
            warn!("⚠️  Removing partial {}", output.display());
            let _ = fs::remove_file(output);
        }
        return Err(IconError::Encode {
            path: output.to_path_buf(),
            source,
        });
    }

    info!("🎨 Wrote RGBA copy to {}", output.display());
    Ok(())
}
