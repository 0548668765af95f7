use crate::store::fs::FileStore;
use tempfile::TempDir;

/// A `FileStore` rooted in a fresh temp dir. The dir lives as long as the
/// returned `TempDir`.
pub fn temp_file_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}
