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

//! Recursive config loading
//!
//! Resolves a root config path into the ordered set of files it
//! transitively includes via `source =` directives. Traversal is
//! depth-first pre-order: a file is recorded before its sources, and each
//! source is fully loaded before its right-hand siblings.
//!
//! The visited set lives on the call, not in module state, so concurrent
//! or repeated loads cannot observe each other.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::expand::{expand_vars, ExtraVars};
use crate::core::parser::{find_sources, normalize_path};
use crate::core::types::{ConfigFile, ResolvedConfigSet};

/// Loads the root config file and everything it transitively sources.
///
/// The root path may contain `~`, `$NAME` or `$env.NAME` references. An
/// unresolved root yields an empty set; a missing file (root or include)
/// loads as an empty line list and contributes no further sources. Cyclic
/// and redundant includes are cut by an absolute-path visited set, so each
/// distinct path appears exactly once and the traversal always terminates.
///
/// # Example
/// ```no_run
/// use hyprcontrol::config::load_all_configs;
///
/// let configs = load_all_configs("~/.config/hypr/hyprland.conf", None);
/// for file in &configs {
///     println!("{}", file.path.display());
/// }
/// ```
pub fn load_all_configs(root_path: &str, extra: Option<&ExtraVars>) -> ResolvedConfigSet {
    let mut configs = ResolvedConfigSet::new();

    let expansion = expand_vars(root_path, extra);
    if !expansion.fully_resolved {
        return configs;
    }

    let root = normalize_path(Path::new(&expansion.path));
    let mut visited = HashSet::new();
    load_config(root, extra, &mut visited, &mut configs);

    configs
}

/// Loads one file, records it, then recurses into its sources.
fn load_config(
    path: PathBuf,
    extra: Option<&ExtraVars>,
    visited: &mut HashSet<PathBuf>,
    configs: &mut ResolvedConfigSet,
) {
    if !visited.insert(path.clone()) {
        return;
    }

    let lines = read_config_lines(&path);
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let sources = find_sources(&lines, &base_dir, extra);

    configs.push(ConfigFile::new(path, lines));

    for source in sources {
        load_config(source, extra, visited, configs);
    }
}

/// Reads a file as raw terminator-preserving lines.
///
/// A missing or unreadable file is an empty line list, never an error.
fn read_config_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content.split_inclusive('\n').map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
