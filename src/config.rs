//! Application configuration constants.

/// Supported image file extensions for the "add images" dialog.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 7] =
    ["png", "jpg", "jpeg", "bmp", "gif", "tiff", "webp"];

/// Side-car file, relative to the working directory, holding the selection.
pub const SELECTION_FILE_NAME: &str = "selected_images.json";

/// Edge length of the square list thumbnails, in pixels.
pub const THUMBNAIL_SIZE: u32 = 80;

/// Previews are scaled down to fit in a square of this size.
pub const PREVIEW_MAX_SIZE: u32 = 500;

/// Number of decoded previews kept around.
pub const PREVIEW_CACHE_CAPACITY: usize = 8;

/// File name proposed by the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "images.pdf";
