//! Helper functions to set groups of ViewState properties together.
//!
//! The list rows, the export switch and the status line are always derived
//! from the collection in one place, so they cannot drift apart.

use crate::image_loader;
use crate::state::{ImageCollection, ImageEntry};
use log::error;
use slint::{ComponentHandle, ModelRc, VecModel};

fn entry_row(entry: &ImageEntry) -> crate::EntryRow {
    crate::EntryRow {
        name: entry.display_name().into(),
        thumbnail: entry
            .thumbnail()
            .map(image_loader::create_slint_image)
            .unwrap_or_default(),
        has_thumbnail: entry.thumbnail().is_some(),
    }
}

/// Short summary shown under the export button.
pub fn selection_summary(count: usize) -> String {
    match count {
        0 => "No images selected".to_string(),
        1 => "1 image selected".to_string(),
        n => format!("{} images selected", n),
    }
}

/// Rebuilds the list rows and re-derives export availability and the
/// status line from `collection`.
///
/// Groups: entries, export-enabled, status-message
pub fn refresh_entries(ui: &crate::AppWindow, collection: &ImageCollection) {
    let rows: Vec<crate::EntryRow> = collection.entries().iter().map(entry_row).collect();
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_entries(ModelRc::new(VecModel::from(rows)));
    view_state.set_export_enabled(collection.can_export());
    view_state.set_status_message(selection_summary(collection.len()).into());
}

/// Drops the selection and the preview image.
///
/// Groups: selected-index, preview-image, preview-loaded
pub fn clear_preview(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_selected_index(-1);
    view_state.set_preview_image(slint::Image::default());
    view_state.set_preview_loaded(false);
}

pub fn set_status(ui: &crate::AppWindow, message: &str) {
    ui.global::<crate::ViewState>()
        .set_status_message(message.into());
}

pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>()
        .set_error_message("".into());
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}
