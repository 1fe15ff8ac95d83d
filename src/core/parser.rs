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

//! src/core/parser.rs
//!
//! Hyprland configuration line parser
//!
//! This module classifies raw config lines and derives settings from them.
//! It handles:
//! - `source = <path>` include directives (comment-stripped targets)
//! - Generic `key = value` settings (values kept verbatim, `#` included)
//! - Comments, blank lines and malformed lines (skipped, never an error)
//!
//! # Architecture
//! All line classification goes through a single tagged-result function,
//! [`classify_line`], built on nom combinators. Source discovery, settings
//! parsing and the settings writer are thin loops over it, so the grammar
//! lives in exactly one place.
//!
//! # Security
//! The parser only reads and structures text - it never executes commands
//! or touches the filesystem. Path expansion happens in expand.rs and
//! unresolved targets are dropped before any filesystem access.

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, space0};
use nom::combinator::rest;
use nom::{IResult, Parser};
use std::path::{Component, Path, PathBuf};

use crate::core::expand::{expand_vars, ExtraVars};
use crate::core::types::Setting;

/// Classification of a single raw config line
///
/// Every line falls into exactly one of three shapes. A `source` directive
/// is still a valid `key = value` line; it gets its own variant because the
/// include target needs comment stripping that setting values must not get.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigLine {
    /// A `source = <path>` include directive
    Source {
        /// Verbatim value text, inline comment included (this is what the
        /// line contributes when surfaced as a plain setting)
        value: String,
        /// Include target with any `#` comment stripped and trimmed
        target: String,
    },

    /// A `key = value` setting
    Setting { key: String, value: String },

    /// Blank line, comment, or anything not matching the setting grammar
    Skip,
}

/// nom grammar for a setting line: `<key><ws?>=<ws?><value>`
///
/// The key is a run of characters containing no `=` and no whitespace.
/// Input is expected pre-trimmed; the value is the remainder of the line.
fn setting_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, key) = take_while1(|c: char| c != '=' && !c.is_whitespace())(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, value) = rest(input)?;
    Ok((input, (key, value)))
}

/// Classifies one raw line of config text
///
/// Rules, applied to the trimmed line:
/// - empty or starting with `#` → [`ConfigLine::Skip`]
/// - matching `<key><ws?>=<ws?><value>` with a non-empty value → a setting,
///   or a source directive when the key is exactly `source`
/// - anything else → [`ConfigLine::Skip`]
///
/// Setting values are kept verbatim, internal `#` and all. Only source
/// targets are comment-stripped, since they must name a file.
pub fn classify_line(line: &str) -> ConfigLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ConfigLine::Skip;
    }

    match setting_line(trimmed) {
        Ok((_, (key, value))) => {
            let value = value.trim();
            if value.is_empty() {
                return ConfigLine::Skip;
            }

            if key == "source" {
                let target = value.split('#').next().unwrap_or_default().trim();
                ConfigLine::Source {
                    value: value.to_string(),
                    target: target.to_string(),
                }
            } else {
                ConfigLine::Setting {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
        }
        Err(_) => ConfigLine::Skip,
    }
}

/// Collapses `.` and `..` components without touching the filesystem
///
/// Purely lexical, so it works for paths that do not exist yet. `..` at
/// the root stays at the root; a relative path may keep leading `..`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) => {}
                _ => normalized.push(Component::ParentDir),
            },
            other => normalized.push(other),
        }
    }

    normalized
}

/// Discovers the include targets of one config file
///
/// Walks `lines` in order and returns an absolute, normalized path for
/// every `source` directive whose target expands fully. Directives with
/// an empty or unresolved target are silently dropped - they contribute
/// nothing rather than a broken path. Relative targets resolve against
/// `base_dir`, the directory of the file containing the directive.
pub fn find_sources(lines: &[String], base_dir: &Path, extra: Option<&ExtraVars>) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    for line in lines {
        let ConfigLine::Source { target, .. } = classify_line(line) else {
            continue;
        };
        if target.is_empty() {
            continue;
        }

        let expansion = expand_vars(&target, extra);
        if !expansion.fully_resolved {
            continue;
        }

        let path = PathBuf::from(expansion.path);
        let absolute = if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        };
        sources.push(normalize_path(&absolute));
    }

    sources
}

/// Derives the ordered settings of a raw line sequence
///
/// Each matching line yields a [`Setting`] carrying its zero-based line
/// index. `source` lines match the setting grammar too and are included
/// with their verbatim value - the caller decides whether to present them
/// specially. Comments, blanks and malformed lines are skipped.
pub fn parse_settings(lines: &[String]) -> Vec<Setting> {
    let mut settings = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match classify_line(line) {
            ConfigLine::Setting { key, value } => {
                settings.push(Setting { line: index, key, value });
            }
            ConfigLine::Source { value, .. } => {
                settings.push(Setting {
                    line: index,
                    key: "source".to_string(),
                    value,
                });
            }
            ConfigLine::Skip => {}
        }
    }

    settings
}

/// Applies setting edits to a raw line sequence
///
/// Returns a new sequence of identical length and order where each edited
/// index is replaced by the canonical rendering `"<key> = <value>\n"` and
/// every other line is byte-identical to the input. Edits never insert,
/// delete or reorder lines; an index past the end is ignored.
pub fn update_lines_with_settings(lines: &[String], edits: &[Setting]) -> Vec<String> {
    let mut updated = lines.to_vec();

    for edit in edits {
        if let Some(slot) = updated.get_mut(edit.line) {
            *slot = format!("{}\n", edit.render());
        }
    }

    updated
}
