//! Frame icons.
//!
//! An icon is either a catalog entry identified by number (`i<id>` for static,
//! `a<id>` for animated icons) or an image supplied by the caller. Images are
//! shrunk to fit the 8x8 icon area and sent inline as a PNG data URI.

use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Whether this build can encode [`Icon::Image`].
pub const IMAGE_SUPPORT: bool = cfg!(feature = "image");

/// Icon edge length in pixels on the device.
pub const MAX_ICON_SIZE: u32 = 8;

/// Prefix of an inline icon.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// An icon shown at the left of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// An icon from the device catalog.
    Identified {
        /// Catalog number.
        id: u32,
        /// Whether the catalog entry is an animation.
        animated: bool,
    },
    /// A caller supplied image.
    Image(IconImage),
}

/// Source pixels of an image icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconImage {
    /// An encoded image file (PNG, JPEG, GIF or BMP).
    Encoded(Vec<u8>),
    /// Raw 8-bit RGBA pixels, row major.
    Rgba {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// `width * height * 4` bytes.
        pixels: Vec<u8>,
    },
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Identified {
            id: 0,
            animated: false,
        }
    }
}

impl Icon {
    /// A static catalog icon.
    pub fn new(id: u32) -> Self {
        Icon::Identified { id, animated: false }
    }

    /// An animated catalog icon.
    pub fn animated(id: u32) -> Self {
        Icon::Identified { id, animated: true }
    }

    /// An icon from an encoded image file.
    pub fn image(bytes: impl Into<Vec<u8>>) -> Self {
        Icon::Image(IconImage::Encoded(bytes.into()))
    }

    /// An icon from raw RGBA pixels.
    pub fn rgba(width: u32, height: u32, pixels: impl Into<Vec<u8>>) -> Self {
        Icon::Image(IconImage::Rgba {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Encode to the wire string.
    ///
    /// Image icons are downscaled and re-encoded here, so this is where
    /// [`ModelError::ImageEncodingFailed`] surfaces.
    pub fn encode(&self) -> Result<String> {
        match self {
            Icon::Identified { id, animated: true } => Ok(format!("a{}", id)),
            Icon::Identified { id, animated: false } => Ok(format!("i{}", id)),
            Icon::Image(image) => image_data_uri(image),
        }
    }
}

impl FromStr for Icon {
    type Err = ModelError;

    /// Parse `i<id>` or `a<id>`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let unknown = || ModelError::UnknownIcon(s.to_string());
        let (animated, digits) = if let Some(rest) = s.strip_prefix('i') {
            (false, rest)
        } else if let Some(rest) = s.strip_prefix('a') {
            (true, rest)
        } else {
            return Err(unknown());
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        let id = digits.parse().map_err(|_| unknown())?;
        Ok(Icon::Identified { id, animated })
    }
}

/// Dimensions that fit `width` x `height` inside a `max` square.
///
/// Aspect ratio is kept and images already inside the square are returned
/// unchanged. Neither side drops below one pixel.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let scale = (max as f64 / width as f64).min(max as f64 / height as f64);
    let scaled = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, max);
    (scaled(width), scaled(height))
}

#[cfg(feature = "image")]
fn image_data_uri(image: &IconImage) -> Result<String> {
    use std::io::Cursor;

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::imageops::FilterType;
    use image::{DynamicImage, ImageFormat, RgbaImage};

    let failed = |reason: String| ModelError::ImageEncodingFailed(reason);

    let source = match image {
        IconImage::Encoded(bytes) => {
            image::load_from_memory(bytes).map_err(|e| failed(e.to_string()))?
        }
        IconImage::Rgba {
            width,
            height,
            pixels,
        } => {
            let buffer = RgbaImage::from_raw(*width, *height, pixels.clone()).ok_or_else(|| {
                failed(format!(
                    "{} bytes is not a {}x{} RGBA buffer",
                    pixels.len(),
                    width,
                    height
                ))
            })?;
            DynamicImage::ImageRgba8(buffer)
        }
    };

    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(failed("image has no pixels".to_string()));
    }

    let (target_width, target_height) = fit_within(width, height, MAX_ICON_SIZE);
    let scaled = if (target_width, target_height) == (width, height) {
        source
    } else {
        log::trace!(
            "downscaling icon from {}x{} to {}x{}",
            width,
            height,
            target_width,
            target_height
        );
        source.resize_exact(target_width, target_height, FilterType::Lanczos3)
    };

    let mut png = Vec::new();
    scaled
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| failed(e.to_string()))?;

    Ok(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(&png)))
}

#[cfg(not(feature = "image"))]
fn image_data_uri(_image: &IconImage) -> Result<String> {
    Err(ModelError::ImageEncodingFailed(
        "image icons are not supported in this build".to_string(),
    ))
}
