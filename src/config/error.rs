use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration management.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Root config path still contains variable placeholders.
    #[error("Unresolved variables in config path: {0}")]
    UnresolvedPath(String),
    /// Config path has no parent directory to place backups beside.
    #[error("Config path has no parent directory: {0}")]
    NoParentDir(PathBuf),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Requested file is not part of the resolved config set.
    #[error("No config file at index {0} (the set has {1} files)")]
    NoSuchFile(usize, usize),
    /// Requested setting does not exist in the selected file.
    #[error("No setting named '{0}' in {1}")]
    NoSuchSetting(String, PathBuf),
    /// hyprctl is not installed or Hyprland is not running.
    #[error("Hyprland not reachable: {0}")]
    HyprlandNotRunning(String),
    /// The reload command ran but did not succeed.
    #[error("Reload failed: {0}")]
    ReloadFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
