use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Formatting helpers for paths in log lines.
pub trait PathExt {
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        format!("\"{}\"", self.display())
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Final path segment, shown in the list.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sorts paths by display name, ignoring case. Equal names keep their order.
pub fn sort_by_display_name(paths: &mut [PathBuf]) {
    paths.sort_by_cached_key(|path| display_name(path).to_lowercase());
}

/// Turns a relative path into an absolute one against the working directory.
pub fn to_absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::path::absolute(&path).unwrap_or(path)
}

/// Appends `.pdf` unless the path already ends with it.
pub fn ensure_pdf_extension(path: PathBuf) -> PathBuf {
    let has_pdf_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if has_pdf_extension {
        return path;
    }

    let mut raw: OsString = path.into_os_string();
    raw.push(".pdf");
    PathBuf::from(raw)
}
