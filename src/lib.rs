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

//! HyprControl
//!
//! A config file manager for Hyprland: resolves `source =` include
//! directives into a flattened file list, surfaces editable `key = value`
//! settings per file, and writes edited values back without disturbing
//! unrelated lines.
//!
//! # Features
//!
//! - **Recursive Resolution:** Follows `source =` directives depth-first,
//!   with variable expansion and cycle protection
//! - **Line-Preserving Edits:** Only edited lines change; comments and
//!   formatting elsewhere survive a save byte-for-byte
//! - **Automatic Backups:** Timestamped backups before every config change
//! - **Atomic Operations:** Safe file writes, never a half-written config
//! - **Live Reload:** Optional `hyprctl reload` after a save
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, variable expansion, line parsing)
//! - **`config`:** File operations (recursive loading, atomic saves, backups)
//! - **`ipc`:** Hyprland reload integration
//!
//! # Examples
//!
//! ## Resolving a config tree
//!
//! ```no_run
//! use hyprcontrol::config::load_all_configs;
//!
//! let configs = load_all_configs("~/.config/hypr/hyprland.conf", None);
//! println!("Resolved {} config files", configs.len());
//! ```
//!
//! ## Editing a setting
//!
//! ```no_run
//! use hyprcontrol::config::ConfigManager;
//!
//! let manager = ConfigManager::new("~/.config/hypr/hyprland.conf")?;
//! let configs = manager.load(None);
//!
//! if let Some(file) = configs.get(0) {
//!     let mut settings = file.settings();
//!     if let Some(setting) = settings.iter_mut().find(|s| s.key == "gaps_in") {
//!         setting.value = "8".to_string();
//!         manager.save_settings(file, &settings)?;
//!     }
//! }
//! # Ok::<(), hyprcontrol::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;
pub mod ipc;

// Re-export commonly used types for convenience
pub use crate::core::{ConfigFile, ResolvedConfigSet, Setting};
