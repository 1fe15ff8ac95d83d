//! Configuration file management with atomic writes and backup support.
//!
//! This module provides safe operations for loading and saving Hyprland
//! configuration files. Key features:
//!
//! - **Recursive loading**: Follows `source =` directives depth-first
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every save creates a timestamped backup first
//! - **Rollback safety**: Failed saves leave the original file untouched
//!
//! # Example
//!
//! ```no_run
//! use hyprcontrol::config::ConfigManager;
//! use hyprcontrol::core::Setting;
//!
//! let manager = ConfigManager::new("~/.config/hypr/hyprland.conf")?;
//! let configs = manager.load(None);
//!
//! if let Some(file) = configs.get(0) {
//!     let edits = vec![Setting::new(3, "gaps_in", "8")];
//!     manager.save_settings(file, &edits)?;
//! }
//! # Ok::<(), hyprcontrol::config::ConfigError>(())
//! ```

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::expand::{expand_vars, ExtraVars};
use crate::core::parser::update_lines_with_settings;
use crate::core::types::{ConfigFile, ResolvedConfigSet, Setting};

pub mod loader;
pub mod transaction;

mod error;

pub use error::ConfigError;
pub use loader::load_all_configs;
pub use transaction::ConfigTransaction;

#[cfg(test)]
mod tests;

/// Manages Hyprland configuration files with safe atomic operations.
///
/// The ConfigManager owns the root config path and a `backups/` directory
/// beside it. Loading resolves the full include tree; all writes go through
/// the transaction API so a backup exists before a file is touched.
///
/// A missing root file is not an error: it loads as an empty file, matching
/// how Hyprland itself treats absent includes.
#[derive(Debug)]
pub struct ConfigManager {
    /// Expanded, normalized path to the root configuration file.
    root_path: PathBuf,
    /// Directory receiving timestamped backups, beside the root config.
    backup_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager for the given root config path.
    ///
    /// The path may contain `~`, `$NAME` or `$env.NAME` references; it is
    /// expanded once here. The backup directory is derived but not created
    /// until the first save needs it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnresolvedPath` if the path still contains
    /// variable placeholders after expansion, and `ConfigError::NoParentDir`
    /// if it has no parent directory to place backups beside.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hyprcontrol::config::ConfigManager;
    ///
    /// let manager = ConfigManager::new("~/.config/hypr/hyprland.conf")?;
    /// # Ok::<(), hyprcontrol::config::ConfigError>(())
    /// ```
    pub fn new(root_path: &str) -> Result<Self, ConfigError> {
        let expansion = expand_vars(root_path, None);
        if !expansion.fully_resolved {
            return Err(ConfigError::UnresolvedPath(root_path.to_string()));
        }

        let root_path = crate::core::parser::normalize_path(Path::new(&expansion.path));
        let backup_dir = root_path
            .parent()
            .ok_or_else(|| ConfigError::NoParentDir(root_path.clone()))?
            .join("backups");

        Ok(Self {
            root_path,
            backup_dir,
        })
    }

    /// Path to the root configuration file.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Directory timestamped backups are written to.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Loads the root config and every file it transitively sources.
    ///
    /// Missing files (root included) load as empty; see
    /// [`loader::load_all_configs`] for traversal semantics.
    pub fn load(&self, extra: Option<&ExtraVars>) -> ResolvedConfigSet {
        loader::load_all_configs(&self.root_path.to_string_lossy(), extra)
    }

    /// Applies setting edits to a loaded file and saves it to its own path.
    ///
    /// The edited line indices are replaced with the canonical
    /// `key = value` rendering; every other line is written back
    /// byte-identical. The write is transactional: a timestamped backup is
    /// taken first and the content lands via an atomic rename, so a failed
    /// save leaves the file on disk (and the in-memory `file`) unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BackupFailed` or `ConfigError::WriteFailed`;
    /// in both cases the target file still holds its previous content.
    pub fn save_settings(&self, file: &ConfigFile, edits: &[Setting]) -> Result<(), ConfigError> {
        let updated = update_lines_with_settings(&file.lines, edits);

        let tx = ConfigTransaction::begin(self, file.path.clone())?;
        tx.commit(&updated.concat())
    }

    /// Copies the given file into the backup directory with a timestamp.
    ///
    /// Backup names follow `name.ext.YYYY-MM-DD_HHMMSS`, so repeated saves
    /// never overwrite an earlier backup. The backup directory is created
    /// on first use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created, and `ConfigError::Io` if the source file cannot
    /// be read or the backup cannot be written.
    pub fn create_timestamped_backup(&self, path: &Path) -> Result<PathBuf, ConfigError> {
        if !self.backup_dir.exists() {
            fs::create_dir_all(&self.backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(self.backup_dir.clone()))?;
        }

        let content = fs::read_to_string(path)?;
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ConfigError::BackupFailed(format!("{} has no file name", path.display()))
            })?;

        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", original_name, timestamp));

        fs::write(&backup_path, &content)?;

        Ok(backup_path)
    }
}
