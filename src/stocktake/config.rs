use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stocktake.json";

/// File locations, stored in `stocktake.json` in the working directory.
///
/// Every field is optional in the file; missing fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// SQLite database file
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// CSV loaded into the database at startup
    #[serde(default = "default_seed_file")]
    pub seed_file: PathBuf,

    /// Destination of the backup action
    #[serde(default = "default_backup_file")]
    pub backup_file: PathBuf,
}

fn default_database() -> PathBuf {
    PathBuf::from("inventory.db")
}

fn default_seed_file() -> PathBuf {
    PathBuf::from("store-inventory/inventory.csv")
}

fn default_backup_file() -> PathBuf {
    PathBuf::from("store-inventory/backup.csv")
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            seed_file: default_seed_file(),
            backup_file: default_backup_file(),
        }
    }
}

impl InventoryConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(InventoryError::Io)?;
        let config: InventoryConfig =
            serde_json::from_str(&content).map_err(InventoryError::Serialization)?;
        Ok(config)
    }

    /// Resolve relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [&mut self.database, &mut self.seed_file, &mut self.backup_file] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
