//! Preview cache for fast reselection.
//!
//! Keeps decoded preview pixels for the most recently shown entries using an
//! LRU policy, so clicking back and forth in the list does not decode again.

use crate::file_utils::PathExt;
use crate::image_loader::RgbPixels;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// LRU cache of decoded previews keyed by image path.
pub struct PreviewCache {
    cache: LruCache<PathBuf, RgbPixels>,
}

impl PreviewCache {
    /// Creates a cache holding at most `capacity` previews (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Retrieves a preview if it is cached.
    pub fn get(&mut self, path: &Path) -> Option<RgbPixels> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Preview cache HIT: {}", path.format_for_log());
        } else {
            log::debug!("Preview cache MISS: {}", path.format_for_log());
        }
        result
    }

    /// Stores a preview.
    pub fn put(&mut self, path: PathBuf, pixels: RgbPixels) {
        log::debug!(
            "Preview cache PUT: {} ({}x{})",
            path.format_for_log(),
            pixels.width,
            pixels.height
        );
        self.cache.put(path, pixels);
        log::debug!("Preview cache holds {} image(s)", self.len());
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
