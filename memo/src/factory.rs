use std::path::Path;
use std::path::PathBuf;

use crate::storage::DirStorage;
use crate::store::MemoStore;

/// Resolve the data directory backing the default store:
/// `MEMOPAD_DATA_DIR` if set, else `$HOME/.memopad`, else `.memopad`
/// relative to the working directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEMOPAD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".memopad"),
        None => PathBuf::from(".memopad"),
    }
}

/// Store over file-backed storage in the default data directory.
pub fn open_default_store() -> MemoStore {
    open_store_in(&resolve_data_dir())
}

/// Store over file-backed storage in an explicit directory.
pub fn open_store_in(dir: &Path) -> MemoStore {
    MemoStore::new(Box::new(DirStorage::new(dir)))
}
