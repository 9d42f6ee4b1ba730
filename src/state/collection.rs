//! Ordered, de-duplicated list of selected images.
//!
//! The collection is the only place the list order lives: the UI renders
//! from it and the PDF export reads its pages from it. Every mutation that
//! changes the list is written through to the [`SelectionStore`].

use crate::error::{AppError, Result};
use crate::file_utils::{self, PathExt};
use crate::image_loader::{self, RgbPixels};
use crate::store::SelectionStore;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// One selected image.
#[derive(Clone, Debug)]
pub struct ImageEntry {
    display_name: String,
    path: PathBuf,
    thumbnail: Option<RgbPixels>,
}

impl ImageEntry {
    /// Builds an entry and decodes its thumbnail. An undecodable file still
    /// yields an entry, just without a thumbnail.
    pub fn from_path(path: PathBuf) -> Self {
        let thumbnail = match image_loader::load_thumbnail(&path) {
            Ok(thumbnail) => Some(thumbnail),
            Err(e) => {
                warn!("No thumbnail for {}: {}", path.format_for_log(), e);
                None
            }
        };
        Self {
            display_name: file_utils::display_name(&path),
            path,
            thumbnail,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn thumbnail(&self) -> Option<&RgbPixels> {
        self.thumbnail.as_ref()
    }
}

/// What a call to [`ImageCollection::add`] did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: usize,
    pub skipped: usize,
}

pub struct ImageCollection {
    entries: Vec<ImageEntry>,
    store: SelectionStore,
}

impl ImageCollection {
    /// Creates an empty collection without touching the store.
    pub fn new(store: SelectionStore) -> Self {
        Self {
            entries: Vec::new(),
            store,
        }
    }

    /// Rebuilds the collection from the store.
    ///
    /// A corrupt store is treated as empty and paths that no longer exist are
    /// dropped. Nothing is written back.
    pub fn restore(store: SelectionStore) -> Self {
        let saved = match store.load() {
            Ok(paths) => paths,
            Err(e @ AppError::StoreCorrupt(_)) => {
                warn!("Ignoring {}: {}", store.path().format_for_log(), e);
                Vec::new()
            }
            Err(e) => {
                warn!("Could not restore selection: {}", e);
                Vec::new()
            }
        };

        let mut collection = Self::new(store);
        for path in saved {
            if !path.exists() {
                debug!("Dropping missing file {}", path.format_for_log());
                continue;
            }
            if collection.contains(&path) {
                continue;
            }
            collection.entries.push(ImageEntry::from_path(path));
        }

        info!("Restored {} image(s)", collection.len());
        collection
    }

    /// Appends the paths that are not in the list yet, sorted by display name
    /// ignoring case, then saves.
    pub fn add(&mut self, paths: Vec<PathBuf>) -> Result<AddOutcome> {
        if paths.is_empty() {
            return Ok(AddOutcome::default());
        }

        let mut paths: Vec<PathBuf> = paths.into_iter().map(file_utils::to_absolute).collect();
        file_utils::sort_by_display_name(&mut paths);

        let mut outcome = AddOutcome::default();
        for path in paths {
            if self.contains(&path) {
                debug!("Already added: {}", path.format_for_log());
                outcome.skipped += 1;
                continue;
            }
            self.entries.push(ImageEntry::from_path(path));
            outcome.added += 1;
        }

        self.persist()?;
        info!(
            "Added {} image(s), skipped {} duplicate(s)",
            outcome.added, outcome.skipped
        );
        Ok(outcome)
    }

    /// Removes the entry at `index` and saves. Without an entry there this
    /// does nothing.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<ImageEntry>> {
        if index >= self.entries.len() {
            return Ok(None);
        }
        let removed = self.entries.remove(index);
        debug!("Removed {}", removed.path.format_for_log());
        self.persist()?;
        Ok(Some(removed))
    }

    /// Empties the list and deletes the store file.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.clear()
    }

    /// Moves the entry at `from` to position `to` (clamped to the end) and
    /// saves. Returns whether anything moved.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<bool> {
        if from >= self.entries.len() {
            return Ok(false);
        }
        let to = to.min(self.entries.len() - 1);
        if from == to {
            return Ok(false);
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        self.persist()?;
        Ok(true)
    }

    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Paths in list order, which is also page order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|entry| entry.path.clone()).collect()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_export(&self) -> bool {
        !self.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.paths())
    }
}
