use super::backend::StorageBackend;
use super::Tables;
use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DATA_FILENAME: &str = "folio.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(FolioError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Tables> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Tables::default());
        }
        let content = fs::read_to_string(data_file).map_err(FolioError::Io)?;
        let tables: Tables = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(tables)
    }

    fn save(&self, tables: &Tables) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(tables).map_err(FolioError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".folio-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(FolioError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(FolioError::Io)?;

        Ok(())
    }

    fn location(&self) -> String {
        self.data_file().display().to_string()
    }
}
