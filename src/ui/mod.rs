//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything runs on the Slint event loop thread. Native
//! dialogs are awaited inside `slint::spawn_local`, which stays on that
//! thread; decoding and PDF writing run synchronously in the callbacks.

pub mod handlers;
pub mod preview;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
