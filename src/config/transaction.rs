// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration transaction management with automatic backups
//!
//! Provides atomic write operations for config files.

use atomic_write_file::AtomicWriteFile;
use std::{fs, io::Write, path::PathBuf};

use crate::config::{ConfigError, ConfigManager};

/// Atomic write transaction for one config file.
///
/// Lifecycle:
///
/// 1. `begin()` - creates a timestamped backup of the target (if it exists)
/// 2. Caller prepares the new content in memory
/// 3. `commit()` - writes atomically, or `rollback()` - restores the backup
///
/// The target may be the root config or any sourced file; each file is
/// saved to its own original path. A commit that fails leaves the target
/// exactly as it was, with the backup still available.
///
/// # Example
///
/// ```no_run
/// use hyprcontrol::config::{ConfigManager, ConfigTransaction};
///
/// let manager = ConfigManager::new("~/.config/hypr/hyprland.conf")?;
/// let tx = ConfigTransaction::begin(&manager, manager.root_path().to_path_buf())?;
///
/// let new_content = "gaps_in = 8\n";
///
/// match tx.commit(new_content) {
///     Ok(()) => println!("Changes applied successfully"),
///     Err(e) => eprintln!("Commit failed: {}", e),
/// }
/// # Ok::<(), hyprcontrol::config::ConfigError>(())
/// ```
pub struct ConfigTransaction {
    target: PathBuf,
    backup_path: Option<PathBuf>,
}

impl ConfigTransaction {
    /// Begins a transaction on `target` by backing it up through `manager`.
    ///
    /// The backup is created immediately so a rollback point exists before
    /// any modification is attempted. A target that does not exist yet has
    /// nothing to back up; the transaction then carries no rollback point
    /// and `commit()` will create the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup directory cannot be created or the
    /// backup file cannot be written. No changes have been made in that
    /// case.
    pub fn begin(manager: &ConfigManager, target: PathBuf) -> Result<Self, ConfigError> {
        let backup_path = if target.exists() {
            Some(manager.create_timestamped_backup(&target)?)
        } else {
            None
        };

        Ok(Self {
            target,
            backup_path,
        })
    }

    /// Path of the backup taken at `begin()`, if the target existed.
    pub fn backup_path(&self) -> Option<&PathBuf> {
        self.backup_path.as_ref()
    }

    /// Commits the transaction by atomically writing `new_content`.
    ///
    /// The write is atomic at the filesystem level (temp file + rename),
    /// so the target is never observable in a half-written state. Consumes
    /// the transaction, preventing accidental double-commits.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteFailed` if the temp file cannot be
    /// created, written, or renamed into place. The original file remains
    /// unchanged and the backup from `begin()` is still available.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        let mut file = AtomicWriteFile::options()
            .open(&self.target)
            .map_err(|e| {
                ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(new_content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        Ok(())
    }

    /// Restores the target from the backup created during `begin()`.
    ///
    /// Borrows `self` immutably, so rollback can be retried.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::BackupFailed` if the transaction has no
    /// backup (the target did not exist at `begin()`), and
    /// `ConfigError::WriteFailed` if restoring fails.
    pub fn rollback(&self) -> Result<(), ConfigError> {
        let Some(backup_path) = &self.backup_path else {
            return Err(ConfigError::BackupFailed(
                "No backup available for rollback".to_string(),
            ));
        };

        let backup_content = fs::read_to_string(backup_path)?;

        let mut file = AtomicWriteFile::options()
            .open(&self.target)
            .map_err(|e| {
                ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(backup_content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit: {}", e)))?;

        Ok(())
    }
}
