/// Color mode classification
///
/// Maps the decoder's `ColorType` onto the short mode names image tools
/// print ("L", "RGB", "RGBA", ...) so the console report reads the same
/// regardless of which library produced the file.

use image::ColorType;
use std::fmt;

/// Pixel layout of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    L,
    La,
    Rgb,
    Rgba,
    L16,
    La16,
    Rgb16,
    Rgba16,
    RgbF32,
    RgbaF32,
    /// Layout the decoder knows about but we have no name for
    Other,
}

impl ColorMode {
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::L8 => ColorMode::L,
            ColorType::La8 => ColorMode::La,
            ColorType::Rgb8 => ColorMode::Rgb,
            ColorType::Rgba8 => ColorMode::Rgba,
            ColorType::L16 => ColorMode::L16,
            ColorType::La16 => ColorMode::La16,
            ColorType::Rgb16 => ColorMode::Rgb16,
            ColorType::Rgba16 => ColorMode::Rgba16,
            ColorType::Rgb32F => ColorMode::RgbF32,
            ColorType::Rgba32F => ColorMode::RgbaF32,
            _ => ColorMode::Other,
        }
    }

    /// Short mode name, e.g. `"RGBA"` or `"I;16"`
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::L => "L",
            ColorMode::La => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::L16 => "I;16",
            ColorMode::La16 => "LA;16",
            ColorMode::Rgb16 => "RGB;16",
            ColorMode::Rgba16 => "RGBA;16",
            ColorMode::RgbF32 => "RGB;F",
            ColorMode::RgbaF32 => "RGBA;F",
            ColorMode::Other => "unknown",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What inspecting a file on disk reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorInfo {
    pub mode: ColorMode,
    pub channels: u8,
}

impl ColorInfo {
    pub fn from_color_type(color: ColorType) -> Self {
        ColorInfo {
            mode: ColorMode::from_color_type(color),
            channels: color.channel_count(),
        }
    }

    /// 8-bit RGBA with exactly four channels
    pub fn is_rgba(&self) -> bool {
        self.mode == ColorMode::Rgba && self.channels == 4
    }
}
