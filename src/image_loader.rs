//! The one decoding path shared by thumbnails, previews and PDF export.

use crate::config::{PREVIEW_MAX_SIZE, THUMBNAIL_SIZE};
use crate::error::{AppError, Result};
use image::DynamicImage;
use image::imageops::FilterType;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded 8-bit RGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbPixels {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbPixels {
    fn from_image(image: &DynamicImage) -> Self {
        // Alpha is dropped; palette and greyscale sources are expanded.
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self {
            data: rgb.into_raw(),
            width,
            height,
        }
    }
}

fn decode(path: &Path) -> Result<DynamicImage> {
    image::ImageReader::open(path)
        .map_err(|e| AppError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| AppError::decode(path, e))?
        .decode()
        .map_err(|e| AppError::decode(path, e))
}

/// Decodes an image at full size as RGB8.
pub fn decode_rgb(path: &Path) -> Result<RgbPixels> {
    decode(path).map(|image| RgbPixels::from_image(&image))
}

/// Decodes an image into a fixed-size square list thumbnail.
pub fn load_thumbnail(path: &Path) -> Result<RgbPixels> {
    let image = decode(path)?;
    let thumbnail = image.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Triangle);
    Ok(RgbPixels::from_image(&thumbnail))
}

/// Decodes an image for the preview pane, shrinking it to fit while keeping
/// the aspect ratio.
pub fn load_preview(path: &Path) -> Result<RgbPixels> {
    let image = decode(path)?;
    if image.width() <= PREVIEW_MAX_SIZE && image.height() <= PREVIEW_MAX_SIZE {
        return Ok(RgbPixels::from_image(&image));
    }
    let scaled = image.resize(PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE, FilterType::Lanczos3);
    Ok(RgbPixels::from_image(&scaled))
}

/// Create a Slint Image from RGB8 pixel data
pub fn create_slint_image(pixels: &RgbPixels) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&pixels.data, pixels.width, pixels.height);
    Image::from_rgb8(buffer)
}
