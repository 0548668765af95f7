use super::Tables;
use crate::error::Result;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (matching, relations, upserts).
pub trait StorageBackend: Send + Sync {
    /// Load the full snapshot. A backend with nothing stored yet returns empty tables.
    fn load(&self) -> Result<Tables>;

    /// Replace the snapshot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, tables: &Tables) -> Result<()>;

    /// Human readable location, for logs and CLI output.
    fn location(&self) -> String;
}
