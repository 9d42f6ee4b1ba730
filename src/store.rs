//! Side-car JSON file that keeps the selection across restarts.
//!
//! The file holds nothing but a JSON array of absolute path strings, in list
//! order. It is rewritten in full on every save and removed on clear.

use crate::config::SELECTION_FILE_NAME;
use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct SavedSelection {
    paths: Vec<PathBuf>,
}

/// Reads and writes the persisted selection.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the fixed-name file in the working directory.
    pub fn in_working_directory() -> Self {
        Self::new(SELECTION_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the file with `paths`.
    pub fn save(&self, paths: &[PathBuf]) -> Result<()> {
        let saved = SavedSelection {
            paths: paths.to_vec(),
        };
        let json = serde_json::to_string(&saved)
            .map_err(|e| AppError::StoreIo(format!("cannot serialize selection: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::StoreIo(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        debug!(
            "Saved {} path(s) to {}",
            paths.len(),
            self.path.format_for_log()
        );
        Ok(())
    }

    /// Returns the stored paths, or an empty list when there is no file.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::StoreIo(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        let saved: SavedSelection = serde_json::from_str(&json)?;
        Ok(saved.paths)
    }

    /// Deletes the file. A missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed {}", self.path.format_for_log());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::StoreIo(format!(
                "cannot remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SelectionStore {
        SelectionStore::new(dir.path().join(SELECTION_FILE_NAME))
    }

    #[test]
    fn load_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn save_writes_a_plain_json_array() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&[PathBuf::from("/pics/a.png"), PathBuf::from("/pics/b.png")])
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"["/pics/a.png","/pics/b.png"]"#);
    }

    #[test]
    fn save_then_load_keeps_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let paths = vec![
            PathBuf::from("/z.png"),
            PathBuf::from("/a.png"),
            PathBuf::from("/m.png"),
        ];
        store.save(&paths).unwrap();
        assert_eq!(store.load().unwrap(), paths);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&[PathBuf::from("/1.png"), PathBuf::from("/2.png")])
            .unwrap();
        store.save(&[PathBuf::from("/3.png")]).unwrap();
        assert_eq!(store.load().unwrap(), vec![PathBuf::from("/3.png")]);
    }

    #[test]
    fn malformed_json_is_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(AppError::StoreCorrupt(_))));
    }

    #[test]
    fn wrong_json_shape_is_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"paths": []}"#).unwrap();
        assert!(matches!(store.load(), Err(AppError::StoreCorrupt(_))));
    }

    #[test]
    fn clear_removes_the_file_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[PathBuf::from("/a.png")]).unwrap();

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_empty());

        store.clear().unwrap();
    }
}
