//! State management for the images-to-PDF application.

use crate::config::PREVIEW_CACHE_CAPACITY;
use crate::preview_cache::PreviewCache;
use crate::store::SelectionStore;
use std::cell::RefCell;
use std::rc::Rc;

pub mod collection;

pub use collection::{ImageCollection, ImageEntry};

/// Application-wide state container.
///
/// Everything runs on the UI event loop thread, so plain `Rc<RefCell<_>>`
/// is enough for sharing between callbacks.
#[derive(Clone)]
pub struct AppState {
    pub collection: Rc<RefCell<ImageCollection>>,
    /// LRU cache for decoded previews.
    pub preview_cache: Rc<RefCell<PreviewCache>>,
}

impl AppState {
    /// Builds the state, restoring the previous selection from `store`.
    pub fn restore(store: SelectionStore) -> Self {
        Self {
            collection: Rc::new(RefCell::new(ImageCollection::restore(store))),
            preview_cache: Rc::new(RefCell::new(PreviewCache::new(PREVIEW_CACHE_CAPACITY))),
        }
    }
}
