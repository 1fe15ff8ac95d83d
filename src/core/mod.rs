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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for config resolution and editing, including:
//! - Type definitions for config files and settings
//! - Variable expansion for include paths
//! - Line classification and settings parsing/rendering
//!
//! All business logic is isolated from I/O concerns to enable
//! comprehensive unit testing without touching the filesystem.

pub mod expand;
pub mod parser;
pub mod types;

pub use expand::{expand_vars, Expansion, ExtraVars};
pub use parser::{classify_line, parse_settings, update_lines_with_settings, ConfigLine};
pub use types::*;

#[cfg(test)]
mod tests;
