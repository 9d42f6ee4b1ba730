//! Concatenates images into a single PDF, one page per image.
//!
//! Each page is exactly as large as its image (one point per pixel) and
//! shows a single RGB image XObject stretched over the whole page.

use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use crate::image_loader::{self, RgbPixels};
use log::{debug, info};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::path::{Path, PathBuf};

const PDF_VERSION: &str = "1.5";
const IMAGE_RESOURCE_NAME: &str = "Im0";

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub page_count: usize,
    pub destination: PathBuf,
}

/// Writes `paths`, in order, to a PDF at `destination`.
///
/// Returns `Ok(None)` without creating anything when `paths` is empty. All
/// images are decoded before the file is created, so a decode failure leaves
/// no output behind.
pub fn export_pdf(paths: &[PathBuf], destination: &Path) -> Result<Option<ExportSummary>> {
    if paths.is_empty() {
        debug!("Nothing to export");
        return Ok(None);
    }

    let pages = paths
        .iter()
        .map(|path| image_loader::decode_rgb(path))
        .collect::<Result<Vec<_>>>()?;
    let page_count = pages.len();

    let mut document = build_document(pages)?;
    document.save(destination).map_err(|e| {
        AppError::PdfWrite(format!("{}: {}", destination.display(), e))
    })?;

    info!(
        "Exported {} page(s) to {}",
        page_count,
        destination.format_for_log()
    );
    Ok(Some(ExportSummary {
        page_count,
        destination: destination.to_path_buf(),
    }))
}

fn build_document(pages: Vec<RgbPixels>) -> Result<Document> {
    let mut document = Document::with_version(PDF_VERSION);
    let pages_id = document.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for pixels in pages {
        let page_id = add_page(&mut document, pages_id, pixels)?;
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    document
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);
    document.compress();

    Ok(document)
}

fn add_page(document: &mut Document, pages_id: ObjectId, pixels: RgbPixels) -> Result<ObjectId> {
    let width = i64::from(pixels.width);
    let height = i64::from(pixels.height);

    let image_id = document.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
        },
        pixels.data,
    ));

    // The image unit square is scaled up to cover the full MediaBox.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(height),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = document.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width),
            Object::Integer(height),
        ],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_RESOURCE_NAME => image_id,
            },
        },
    });

    Ok(page_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn rgb_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        RgbImage::from_pixel(width, height, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    /// (width, height) of each page's MediaBox, in page order.
    fn page_sizes(path: &Path) -> Vec<(i64, i64)> {
        let document = Document::load(path).unwrap();
        document
            .get_pages()
            .values()
            .map(|page_id| {
                let page = document.get_object(*page_id).unwrap().as_dict().unwrap();
                let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
                (
                    media_box[2].as_i64().unwrap(),
                    media_box[3].as_i64().unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn pages_follow_input_order() {
        let dir = TempDir::new().unwrap();
        let a = rgb_png(&dir, "a.png", 10, 20);
        let b = rgb_png(&dir, "b.png", 30, 40);
        let c = rgb_png(&dir, "c.png", 50, 60);
        let out = dir.path().join("out.pdf");

        let summary = export_pdf(&[a, b, c], &out).unwrap().unwrap();

        assert_eq!(summary.page_count, 3);
        assert_eq!(summary.destination, out);
        assert_eq!(page_sizes(&out), vec![(10, 20), (30, 40), (50, 60)]);
    }

    #[test]
    fn reordered_input_reorders_pages() {
        let dir = TempDir::new().unwrap();
        let a = rgb_png(&dir, "a.png", 10, 20);
        let b = rgb_png(&dir, "b.png", 30, 40);
        let out = dir.path().join("out.pdf");

        export_pdf(&[b, a], &out).unwrap();

        assert_eq!(page_sizes(&out), vec![(30, 40), (10, 20)]);
    }

    #[test]
    fn empty_input_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.pdf");

        assert!(export_pdf(&[], &out).unwrap().is_none());
        assert!(!out.exists());
    }

    #[test]
    fn mixed_color_modes_are_normalized() {
        let dir = TempDir::new().unwrap();
        let rgba = dir.path().join("rgba.png");
        RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 128])).save(&rgba).unwrap();
        let grey = dir.path().join("grey.png");
        GrayImage::from_pixel(5, 2, Luma([200])).save(&grey).unwrap();
        let gif = dir.path().join("palette.gif");
        RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]))
            .save_with_format(&gif, ImageFormat::Gif)
            .unwrap();
        let out = dir.path().join("out.pdf");

        export_pdf(&[rgba, grey, gif], &out).unwrap();

        assert_eq!(page_sizes(&out), vec![(3, 3), (5, 2), (4, 4)]);
        let document = Document::load(&out).unwrap();
        for page_id in document.get_pages().values() {
            let page = document.get_object(*page_id).unwrap().as_dict().unwrap();
            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            let image_id = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
            let image = document.get_object(image_id).unwrap().as_stream().unwrap();
            assert_eq!(
                image.dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
                b"DeviceRGB"
            );
        }
    }

    #[test]
    fn one_bad_image_aborts_without_output() {
        let dir = TempDir::new().unwrap();
        let good = rgb_png(&dir, "good.png", 4, 4);
        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"not a png").unwrap();
        let out = dir.path().join("out.pdf");

        let result = export_pdf(&[good, bad.clone()], &out);

        match result {
            Err(AppError::ImageDecode { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected a decode error, got {other:?}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let a = rgb_png(&dir, "a.png", 4, 4);
        let out = dir.path().join("missing-dir").join("out.pdf");

        assert!(matches!(
            export_pdf(&[a], &out),
            Err(AppError::PdfWrite(_))
        ));
    }
}
