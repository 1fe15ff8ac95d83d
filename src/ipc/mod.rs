// Copyright 2025 bakri (tidynest@proton.me)
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

//! Hyprland reload integration
//!
//! After a save, the compositor picks up changes through `hyprctl reload`.
//! The invocation is fire-and-forget: exit code 0 is success, anything
//! else is surfaced as an error message and never retried. The written
//! config is not rolled back on a failed reload.
//!
//! # Safety Modes
//!
//! This module operates in two modes:
//! - **DryRun** (default for tests): never spawns the reload command
//! - **Live**: actually runs `hyprctl reload`
//!
//! Tests default to DryRun mode so they never touch a live compositor.
//!
//! # Example
//! ```
//! use hyprcontrol::ipc::{ClientMode, HyprlandClient};
//!
//! // Safe: DryRun mode never spawns hyprctl
//! let client = HyprlandClient::new(ClientMode::DryRun);
//! assert!(client.reload().is_ok());
//! ```

use std::io;
use std::process::Command;

use crate::config::ConfigError;

/// Reload client operation mode
///
/// Controls whether the reload command is actually spawned. Tests default
/// to DryRun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientMode {
    /// Never spawns the reload command (default for tests)
    DryRun,

    /// Full access - actually runs `hyprctl reload`
    Live,
}

/// Client for triggering a Hyprland configuration reload
///
/// Wraps the external `hyprctl reload` invocation behind a mode switch so
/// library consumers and tests can exercise the reload path without a
/// running compositor.
pub struct HyprlandClient {
    /// Operation mode (DryRun/Live)
    mode: ClientMode,
}

impl HyprlandClient {
    /// Creates a new client in the specified mode
    pub fn new(mode: ClientMode) -> Self {
        Self { mode }
    }

    /// Triggers a Hyprland configuration reload
    ///
    /// Runs `hyprctl reload` with no arguments and inspects the exit
    /// status. The command's outcome is reported, nothing more: no retry,
    /// and no rollback of a just-saved config on failure.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Reload succeeded (or DryRun mode)
    /// * `Err(ConfigError::HyprlandNotRunning)` - `hyprctl` not found
    /// * `Err(ConfigError::ReloadFailed)` - spawn failure or non-zero exit
    ///
    /// # Example
    /// ```
    /// use hyprcontrol::ipc::{ClientMode, HyprlandClient};
    ///
    /// let client = HyprlandClient::new(ClientMode::DryRun);
    /// assert!(client.reload().is_ok());
    /// ```
    pub fn reload(&self) -> Result<(), ConfigError> {
        match self.mode {
            ClientMode::DryRun => Ok(()),
            ClientMode::Live => self.send_reload_command(),
        }
    }

    /// Spawns `hyprctl reload` and maps its outcome to a ConfigError
    fn send_reload_command(&self) -> Result<(), ConfigError> {
        let status = Command::new("hyprctl").arg("reload").status().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConfigError::HyprlandNotRunning(
                    "hyprctl not found in PATH - is Hyprland installed?".to_string(),
                )
            } else {
                ConfigError::ReloadFailed(format!("Failed to spawn hyprctl: {}", e))
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ConfigError::ReloadFailed(format!(
                "hyprctl reload exited with {}",
                status
            )))
        }
    }
}

#[cfg(test)]
mod tests;
