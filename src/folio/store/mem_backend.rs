use super::backend::StorageBackend;
use super::Tables;
use crate::error::{FolioError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// In-memory storage backend for testing.
///
/// Uses `RwLock` so the store can be shared across request handlers.
pub struct MemBackend {
    tables: RwLock<Tables>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            simulate_read_error: AtomicBool::new(false),
            simulate_write_error: AtomicBool::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing error propagation.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Tables> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(FolioError::Store("Simulated read error".to_string()));
        }
        let tables = self
            .tables
            .read()
            .map_err(|_| FolioError::Store("Memory store lock poisoned".to_string()))?;
        Ok(tables.clone())
    }

    fn save(&self, new_tables: &Tables) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(FolioError::Store("Simulated write error".to_string()));
        }
        let mut tables = self
            .tables
            .write()
            .map_err(|_| FolioError::Store("Memory store lock poisoned".to_string()))?;
        *tables = new_tables.clone();
        Ok(())
    }

    fn location(&self) -> String {
        "memory://".to_string()
    }
}
