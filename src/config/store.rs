// 配置文件读写
//
// 配置文件是 ~/.shipit/config.json，写入时先写临时文件再 rename，避免半写入。

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tempfile::NamedTempFile;

use super::structs::{ConfigField, ShipitConfig};
use crate::constants;
use crate::error::{Result, ShipitError};

/// Result of [`ConfigStore::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The file existed and was deleted.
    Removed,
    /// There was no file to delete.
    NotFound,
}

/// File-backed configuration store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
    file: PathBuf,
}

impl ConfigStore {
    /// Store at `<home>/.shipit/config.json`.
    pub fn open_default() -> Result<Self> {
        let home = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| ShipitError::Other("Could not determine home directory".to_string()))?;
        Ok(Self::at(home.join(constants::config::DIR_NAME)))
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let file = dir.join(constants::config::FILE_NAME);
        Self { dir, file }
    }

    /// Absolute path of the config file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            tracing::debug!("Creating config directory {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Loads the record.
    ///
    /// A missing file yields an empty record. A file that does not decode or
    /// parse also yields an empty record, with a warning logged so the loss is
    /// visible. Only I/O failures such as permission errors are returned.
    pub fn load(&self) -> Result<ShipitConfig> {
        self.ensure_dir()?;

        if !self.file.exists() {
            return Ok(ShipitConfig::default());
        }

        // 按字节读取：非 UTF-8 内容与 JSON 错误一样按损坏处理
        let content = fs::read(&self.file)?;
        match serde_json::from_slice::<ShipitConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable config file {}: {}",
                    self.file.display(),
                    e
                );
                Ok(ShipitConfig::default())
            }
        }
    }

    /// Writes the record, replacing the previous file atomically.
    pub fn save(&self, config: &ShipitConfig) -> Result<()> {
        self.ensure_dir()?;

        let json = serde_json::to_string_pretty(config)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;

        // 配置中包含 API key，仅当前用户可读写
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600))?;
        }

        tmp.persist(&self.file).map_err(|e| ShipitError::Io(e.error))?;
        tracing::debug!("Saved config to {}", self.file.display());
        Ok(())
    }

    /// Reads one field through [`load`](Self::load).
    pub fn get(&self, field: ConfigField) -> Result<Option<String>> {
        Ok(self.load()?.get(field).map(str::to_string))
    }

    /// Sets one field, keeping the other.
    pub fn set(&self, field: ConfigField, value: &str) -> Result<()> {
        let mut config = self.load()?;
        config.set(field, value);
        self.save(&config)
    }

    /// Deletes the config file.
    pub fn reset(&self) -> Result<ResetOutcome> {
        self.ensure_dir()?;
        if !self.file.exists() {
            return Ok(ResetOutcome::NotFound);
        }
        fs::remove_file(&self.file)?;
        Ok(ResetOutcome::Removed)
    }
}
