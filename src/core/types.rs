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

//! src/core/types.rs
//!
//! Core type definitions for config resolution and editing
//!
//! This module defines the fundamental types used throughout the application:
//! - `Setting`: An editable key/value pair anchored to an exact line
//! - `ConfigFile`: One loaded config file with its raw line sequence
//! - `ResolvedConfigSet`: The root file plus all transitively sourced files
//!
//! All types implement serialization for persistence and keep the raw line
//! text (terminators included) so that saves never disturb untouched lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single editable key/value setting
///
/// Anchored to a zero-based line index in its owning `ConfigFile`. The index
/// is the invariant that links an edited value back to its exact source line;
/// keys are not guaranteed unique within a file.
///
/// # Example
/// ```ignore
/// let setting = Setting {
///     line: 4,
///     key: "gaps_in".to_string(),
///     value: "5".to_string(),
/// };
/// // Represents line 4: gaps_in = 5
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Setting {
    /// Zero-based index into the owning file's raw line sequence
    pub line: usize,

    /// Setting name (contains no `=` or whitespace)
    pub key: String,

    /// Raw value text, verbatim including any internal `#`
    pub value: String,
}

impl Setting {
    /// Creates a setting anchored to the given line index
    pub fn new(line: usize, key: &str, value: &str) -> Self {
        Self {
            line,
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Renders the canonical config-file form of this setting
    ///
    /// This is the exact text written back on save (plus line terminator):
    /// `<key> = <value>`. Any inline comment the original line carried is
    /// overwritten by this rendering.
    pub fn render(&self) -> String {
        format!("{} = {}", self.key, self.value)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// One loaded configuration file
///
/// Holds the path the file was loaded from and its raw ordered line sequence,
/// including blanks and comments. Line terminators are preserved so unedited
/// lines round-trip byte-identically through a save.
///
/// A missing file loads as an empty line sequence rather than an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConfigFile {
    /// Absolute path this file was loaded from (and is saved back to)
    pub path: PathBuf,

    /// Raw lines, each keeping its original terminator (the last line of a
    /// file without a trailing newline keeps none)
    pub lines: Vec<String>,
}

impl ConfigFile {
    /// Creates a config file from pre-split raw lines
    pub fn new(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    /// Creates a config file by splitting whole-file content into raw lines
    ///
    /// Splitting is terminator-inclusive, so `content` is recoverable as the
    /// concatenation of the resulting lines.
    pub fn from_content(path: PathBuf, content: &str) -> Self {
        let lines = content.split_inclusive('\n').map(str::to_string).collect();
        Self { path, lines }
    }

    /// Reassembles the whole-file content from the raw lines
    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// File name component for display purposes
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Derives the ordered settings of this file
    ///
    /// Settings are derived lazily from the raw lines; see
    /// [`parse_settings`](crate::core::parser::parse_settings) for the
    /// line grammar.
    pub fn settings(&self) -> Vec<Setting> {
        crate::core::parser::parse_settings(&self.lines)
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} lines)", self.path.display(), self.lines.len())
    }
}

/// The root config file plus all transitively sourced files
///
/// Files appear in discovery order: the root first, then each `source`
/// target depth-first, pre-order. A given absolute path appears at most
/// once, which is what terminates cyclic `source` chains.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ResolvedConfigSet {
    files: Vec<ConfigFile>,
}

impl ResolvedConfigSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file, preserving the at-most-once-per-path invariant
    ///
    /// A file whose path is already present is dropped, not re-added.
    pub fn push(&mut self, file: ConfigFile) {
        if !self.contains(&file.path) {
            self.files.push(file);
        }
    }

    /// True if a file with this path is already in the set
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    /// All files in discovery order
    pub fn files(&self) -> &[ConfigFile] {
        &self.files
    }

    /// File at the given discovery-order index
    pub fn get(&self, index: usize) -> Option<&ConfigFile> {
        self.files.get(index)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedConfigSet {
    type Item = &'a ConfigFile;
    type IntoIter = std::slice::Iter<'a, ConfigFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
