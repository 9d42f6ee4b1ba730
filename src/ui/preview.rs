//! Preview pane rendering.
//!
//! Decoding happens synchronously on the UI thread; recently shown previews
//! come from the [`PreviewCache`](crate::preview_cache::PreviewCache).

use crate::image_loader;
use crate::state::AppState;
use crate::ui::{clear_error, clear_preview, set_error_with_prefix};
use slint::ComponentHandle;

/// Selects the entry at `index` and shows its preview.
pub fn show_preview(ui: &crate::AppWindow, state: &AppState, index: usize) {
    let path = state
        .collection
        .borrow()
        .get(index)
        .map(|entry| entry.path().to_path_buf());
    let Some(path) = path else {
        clear_preview(ui);
        return;
    };

    let view_state = ui.global::<crate::ViewState>();
    view_state.set_selected_index(index as i32);

    let cached = state.preview_cache.borrow_mut().get(&path);
    let pixels = match cached {
        Some(pixels) => pixels,
        None => match image_loader::load_preview(&path) {
            Ok(pixels) => {
                state
                    .preview_cache
                    .borrow_mut()
                    .put(path.clone(), pixels.clone());
                pixels
            }
            Err(e) => {
                view_state.set_preview_loaded(false);
                set_error_with_prefix(ui, "Failed to load preview", e.to_string());
                return;
            }
        },
    };

    view_state.set_preview_image(image_loader::create_slint_image(&pixels));
    view_state.set_preview_loaded(true);
    clear_error(ui);
}
