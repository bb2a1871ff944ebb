//! Favorite videos persisted between sessions.

use std::{
    collections::BTreeSet,
    fs::{create_dir_all, read_to_string, write},
    io::Error as IoError,
    path::{Path, PathBuf},
    sync::Arc,
};

use {
    parking_lot::RwLock,
    serde_json::{Error as SerdeJsonError, from_str, to_string},
    thiserror::Error,
    tracing::{debug, warn},
};

use crate::{catalog::Catalog, config::get_data_dir};

/// Error type for favorites persistence.
#[derive(Error, Debug)]
pub enum FavoritesError {
    /// Failed to read or write the favorites file.
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    /// The favorites file is not a JSON array of ids.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
}

/// Set of favorite catalog ids backed by a JSON file.
///
/// Clones share the same set. Every mutation is written through to disk.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    /// Favorite ids, kept sorted for stable output.
    ids: Arc<RwLock<BTreeSet<u64>>>,
    /// Path to the favorites file.
    path: PathBuf,
}

impl FavoritesStore {
    /// Opens the store at the default data path.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if an existing file cannot be read or parsed.
    pub fn open_default() -> Result<Self, FavoritesError> {
        Self::open(get_data_dir().join("favorites.json"))
    }

    /// Opens the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if an existing file cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FavoritesError> {
        let path = path.as_ref().to_path_buf();

        let ids: BTreeSet<u64> = if path.exists() {
            debug!("Loading favorites from {:?}", path);
            from_str(&read_to_string(&path)?)?
        } else {
            BTreeSet::new()
        };

        Ok(Self {
            ids: Arc::new(RwLock::new(ids)),
            path,
        })
    }

    /// Checks whether `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.ids.read().contains(&id)
    }

    /// Flips the favorite state of `id` and saves.
    ///
    /// # Returns
    ///
    /// `true` if `id` is a favorite after the call.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if the file cannot be written.
    pub fn toggle(&self, id: u64) -> Result<bool, FavoritesError> {
        let is_favorite = {
            let mut ids = self.ids.write();
            if ids.remove(&id) {
                false
            } else {
                ids.insert(id);
                true
            }
        };
        self.save()?;
        Ok(is_favorite)
    }

    /// Gets favorite ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.ids.read().iter().copied().collect()
    }

    /// Drops ids that no longer exist in `catalog` and saves if anything changed.
    ///
    /// # Returns
    ///
    /// The number of ids removed.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if the file cannot be written.
    pub fn retain_known(&self, catalog: &Catalog) -> Result<usize, FavoritesError> {
        let removed = {
            let mut ids = self.ids.write();
            let before = ids.len();
            ids.retain(|id| catalog.get(*id).is_some());
            before - ids.len()
        };

        if removed > 0 {
            warn!(removed, "Dropped favorites missing from the catalog");
            self.save()?;
        }
        Ok(removed)
    }

    /// Gets the number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.read().len()
    }

    /// Checks if there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.read().is_empty()
    }

    fn save(&self) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }
        let contents = to_string(&*self.ids.read())?;
        write(&self.path, contents)?;
        debug!("Saved favorites to {:?}", self.path);
        Ok(())
    }
}
