use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage key for the persisted favorites, kept from the original site so
/// an exported blob stays recognizable.
const FAVORITES_FILENAME: &str = "ab-livestock-favorites.json";

/// A favorites write failed. Reads never produce errors: absent or
/// malformed storage loads as an empty set.
#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("failed to write favorites file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The persisted set of favorited goat ids.
///
/// Stored as a JSON array of id strings in the user data directory. Insertion
/// order is kept in the file but carries no meaning. Every toggle rewrites
/// the whole file synchronously; the set is bounded by the catalog size, so
/// a full write per toggle is cheap and keeps storage consistent.
///
/// Each view that shows favorites loads its own ledger when it opens. There
/// is no live sync between concurrently mounted views; a toggle in one shows
/// up in another only when that view reloads. Kept from the original design.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesLedger {
    ids: Vec<String>,
    store_path: PathBuf,
}

impl FavoritesLedger {
    /// Load the ledger from the given file.
    ///
    /// An absent file or malformed JSON yields an empty ledger; the next
    /// successful toggle overwrites whatever was there.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let store_path = path.into();
        let ids = read_ids(&store_path);

        FavoritesLedger { ids, store_path }
    }

    /// Load the ledger from its default location in the user data directory
    pub fn load_default() -> Self {
        Self::load(Self::default_path())
    }

    /// Default storage path:
    /// - Linux: ~/.local/share/goat-gallery/ab-livestock-favorites.json
    /// - macOS: ~/Library/Application Support/goat-gallery/...
    /// - Windows: %APPDATA%\goat-gallery\...
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("goat-gallery");
        path.push(FAVORITES_FILENAME);
        path
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited ids in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Flip membership of `id` and persist the full set.
    ///
    /// The in-memory set updates even when the write fails, so the UI stays
    /// responsive; the caller decides how loudly to report the error.
    pub fn toggle(&mut self, id: &str) -> Result<(), FavoritesError> {
        if let Some(pos) = self.ids.iter().position(|fav| fav == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }

        self.persist()
    }

    /// Write the whole set to the store file
    fn persist(&self) -> Result<(), FavoritesError> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(&self.ids)?;
        fs::write(&self.store_path, json)?;
        Ok(())
    }
}

/// Read and decode the stored id list, treating every failure as "empty".
/// Duplicates in a hand-edited file are dropped, keeping first occurrences.
fn read_ids(path: &Path) -> Vec<String> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return Vec::new(),
    };

    let mut ids: Vec<String> = match serde_json::from_str(&json) {
        Ok(ids) => ids,
        Err(_) => return Vec::new(),
    };

    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn store(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join(FAVORITES_FILENAME)
    }

    #[test]
    fn absent_file_loads_empty() {
        let dir = tempdir().unwrap();
        let ledger = FavoritesLedger::load(store(&dir));

        assert!(ledger.is_empty());
    }

    #[test]
    fn toggle_adds_and_persists() {
        let dir = tempdir().unwrap();
        let path = store(&dir);

        let mut ledger = FavoritesLedger::load(&path);
        ledger.toggle("G2").unwrap();

        assert_eq!(ledger.ids(), ["G2".to_string()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["G2"]"#);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let dir = tempdir().unwrap();
        let path = store(&dir);
        fs::write(&path, r#"["G1"]"#).unwrap();

        let mut ledger = FavoritesLedger::load(&path);
        assert!(ledger.is_favorite("G1"));

        ledger.toggle("G1").unwrap();
        assert!(!ledger.is_favorite("G1"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

        ledger.toggle("G1").unwrap();
        assert!(ledger.is_favorite("G1"));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["G1"]"#);
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = store(&dir);
        fs::write(&path, r#"["G1","G3"]"#).unwrap();

        let first = FavoritesLedger::load(&path);
        let second = FavoritesLedger::load(&path);

        assert_eq!(first, second);
    }

    #[test]
    fn malformed_storage_loads_empty_and_heals() {
        let dir = tempdir().unwrap();
        let path = store(&dir);
        fs::write(&path, "{not json").unwrap();

        let mut ledger = FavoritesLedger::load(&path);
        assert!(ledger.is_empty());

        // The next write replaces the garbage
        ledger.toggle("G1").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["G1"]"#);
    }

    #[test]
    fn duplicates_in_storage_do_not_accumulate() {
        let dir = tempdir().unwrap();
        let path = store(&dir);
        fs::write(&path, r#"["G1","G2","G1"]"#).unwrap();

        let mut ledger = FavoritesLedger::load(&path);
        assert_eq!(ledger.ids(), ["G1".to_string(), "G2".to_string()]);

        // Toggling the deduplicated id removes it entirely
        ledger.toggle("G1").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["G2"]"#);
    }

    #[test]
    fn insertion_order_is_kept() {
        let dir = tempdir().unwrap();
        let path = store(&dir);

        let mut ledger = FavoritesLedger::load(&path);
        ledger.toggle("G3").unwrap();
        ledger.toggle("G1").unwrap();
        ledger.toggle("G2").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["G3","G1","G2"]"#);
    }
}
