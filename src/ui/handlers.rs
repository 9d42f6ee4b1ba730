//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (add_images, remove_selected, clear_all,
//! select_entry, move_entry, export_pdf). Every mutation goes through the
//! [`ImageCollection`](crate::state::ImageCollection) and the view is then
//! re-derived from it.

use crate::config::{DEFAULT_EXPORT_FILE_NAME, SUPPORTED_IMAGE_EXTENSIONS};
use crate::file_utils::{self, PathExt};
use crate::pdf_export;
use crate::state::AppState;
use crate::ui::preview::show_preview;
use crate::ui::{clear_error, clear_preview, refresh_entries, set_error_with_prefix, set_status};
use log::{debug, warn};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use slint::ComponentHandle;
use std::path::PathBuf;

/// Converts a row index coming from Slint, where -1 means "none".
fn row_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Keeps the supported image files and logs the rest.
fn supported_only(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| {
            let supported = file_utils::is_supported_image(path);
            if !supported {
                warn!("Skipping unsupported file {}", path.format_for_log());
            }
            supported
        })
        .collect()
}

fn add_paths(ui: &crate::AppWindow, state: &AppState, paths: Vec<PathBuf>) {
    if paths.is_empty() {
        return;
    }

    let result = state.collection.borrow_mut().add(paths);
    refresh_entries(ui, &state.collection.borrow());
    match result {
        Ok(outcome) if outcome.skipped > 0 => {
            clear_error(ui);
            set_status(
                ui,
                &format!(
                    "Added {} image(s), {} already in the list",
                    outcome.added, outcome.skipped
                ),
            );
        }
        Ok(_) => clear_error(ui),
        Err(e) => set_error_with_prefix(ui, "Failed to save selection", e.to_string()),
    }
}

async fn show_message(level: MessageLevel, title: &str, description: String) {
    let _ = AsyncMessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Asks for a destination and writes the current list as a PDF.
async fn export_current_selection(ui_handle: slint::Weak<crate::AppWindow>, state: AppState) {
    // The dialog has to be awaited on the main thread.
    let Some(file_handle) = AsyncFileDialog::new()
        .set_title("Save PDF")
        .add_filter("PDF Files", &["pdf"])
        .set_file_name(DEFAULT_EXPORT_FILE_NAME)
        .save_file()
        .await
    else {
        debug!("Export cancelled, no destination chosen");
        return;
    };

    let destination = file_utils::ensure_pdf_extension(file_handle.path().to_path_buf());
    let paths = state.collection.borrow().paths();

    match pdf_export::export_pdf(&paths, &destination) {
        Ok(Some(summary)) => {
            let message = format!(
                "PDF saved successfully to:\n{}",
                summary.destination.display()
            );
            if let Some(ui) = ui_handle.upgrade() {
                clear_error(&ui);
                set_status(
                    &ui,
                    &format!(
                        "Exported {} page(s) to {}",
                        summary.page_count,
                        summary.destination.display()
                    ),
                );
            }
            show_message(MessageLevel::Info, "PDF saved", message).await;
        }
        Ok(None) => debug!("Nothing to export"),
        Err(e) => {
            if let Some(ui) = ui_handle.upgrade() {
                set_error_with_prefix(&ui, "Export failed", e.to_string());
            }
            show_message(MessageLevel::Error, "Export failed", e.to_string()).await;
        }
    }
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and the shared application state, then registers
/// callbacks for adding, removing, reordering, previewing and exporting.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    ui.global::<crate::Logic>().on_add_images({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                let Some(files) = AsyncFileDialog::new()
                    .set_title("Choose images")
                    .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS[..])
                    .pick_files()
                    .await
                else {
                    debug!("Add images cancelled");
                    return;
                };

                let paths = supported_only(
                    files
                        .iter()
                        .map(|file| file.path().to_path_buf())
                        .collect(),
                );
                if let Some(ui) = ui_handle.upgrade() {
                    add_paths(&ui, &state, paths);
                }
            });
        }
    });

    ui.global::<crate::Logic>().on_remove_selected({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let selected = ui.global::<crate::ViewState>().get_selected_index();
            let Some(index) = row_index(selected) else {
                return;
            };

            let result = state.collection.borrow_mut().remove_at(index);
            clear_preview(&ui);
            refresh_entries(&ui, &state.collection.borrow());
            match result {
                Ok(_) => clear_error(&ui),
                Err(e) => set_error_with_prefix(&ui, "Failed to save selection", e.to_string()),
            }
        }
    });

    ui.global::<crate::Logic>().on_clear_all({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            let result = state.collection.borrow_mut().clear();
            state.preview_cache.borrow_mut().clear();
            clear_preview(&ui);
            refresh_entries(&ui, &state.collection.borrow());
            match result {
                Ok(()) => clear_error(&ui),
                Err(e) => set_error_with_prefix(&ui, "Failed to remove selection file", e.to_string()),
            }
        }
    });

    ui.global::<crate::Logic>().on_select_entry({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            match row_index(index) {
                Some(index) => show_preview(&ui, &state, index),
                None => clear_preview(&ui),
            }
        }
    });

    // Drag-and-drop and the move buttons both end up here.
    ui.global::<crate::Logic>().on_move_entry({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |from, to| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let Some(from) = row_index(from) else {
                return;
            };
            let to = row_index(to).unwrap_or(0);

            let result = state.collection.borrow_mut().move_entry(from, to);
            match result {
                Ok(false) => {}
                Ok(true) => {
                    refresh_entries(&ui, &state.collection.borrow());
                    let last = state.collection.borrow().len().saturating_sub(1);
                    show_preview(&ui, &state, to.min(last));
                }
                Err(e) => {
                    refresh_entries(&ui, &state.collection.borrow());
                    set_error_with_prefix(&ui, "Failed to save selection", e.to_string());
                }
            }
        }
    });

    ui.global::<crate::Logic>().on_export_pdf({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            if !state.collection.borrow().can_export() {
                return;
            }
            let _ = slint::spawn_local(export_current_selection(
                ui_handle.clone(),
                state.clone(),
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_rows_mean_no_selection() {
        assert_eq!(row_index(-1), None);
        assert_eq!(row_index(0), Some(0));
        assert_eq!(row_index(3), Some(3));
    }

    #[test]
    fn unsupported_files_are_filtered_out() {
        let kept = supported_only(vec![
            PathBuf::from("/a/photo.png"),
            PathBuf::from("/a/readme.md"),
            PathBuf::from("/a/scan.TIFF"),
        ]);
        assert_eq!(
            kept,
            vec![PathBuf::from("/a/photo.png"), PathBuf::from("/a/scan.TIFF")]
        );
    }
}
