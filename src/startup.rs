use crate::state::AppState;
use crate::store::SelectionStore;

/// Restores the selection saved by the previous run and puts it on screen.
pub fn restore_previous_selection(app: &crate::AppWindow) -> AppState {
    let app_state = AppState::restore(SelectionStore::in_working_directory());
    crate::ui::refresh_entries(app, &app_state.collection.borrow());
    app_state
}
