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

//! src/core/expand.rs
//!
//! Variable expansion for config paths
//!
//! Hyprland `source` targets can reference the home directory (`~`), OS
//! environment variables (`$NAME`, `${NAME}`), Hyprland-style environment
//! references (`$env.NAME`), and config-defined variables supplied by the
//! caller. This module expands all of them and reports whether the result
//! is safe to use as a filesystem path.
//!
//! Expansion never fails: an undefined reference is left literally in place
//! and the result is marked unresolved instead. Callers must not touch the
//! filesystem with an unresolved path.

use regex::Regex;
use std::collections::HashMap;
use std::env;

/// Extra variable bindings supplied by the caller
///
/// Maps a variable name (without the `$`) to its value. A `None` value
/// means the variable is known but has no usable value; a reference to it
/// stays in place and marks the whole expansion unresolved.
pub type ExtraVars = HashMap<String, Option<String>>;

/// Result of expanding a config path
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expansion {
    /// The path text after all substitutions
    pub path: String,

    /// True when no variable placeholder remains. Only a fully resolved
    /// path may be used for filesystem access.
    pub fully_resolved: bool,
}

/// Matches a Hyprland environment reference: `$env.NAME`
fn env_reference_pattern() -> Regex {
    Regex::new(r"\$env\.([A-Za-z_][A-Za-z0-9_]*)")
        .expect("env reference pattern should be valid regex")
}

/// Matches any residual variable placeholder: `$name` or `${name}`
fn residual_var_pattern() -> Regex {
    Regex::new(r"\$\{?[\w.]+\}?").expect("residual variable pattern should be valid regex")
}

/// Expands `~`, environment variables and extra variables in a path
///
/// Substitution passes, in order:
/// 1. Leading `~` to the invoking user's home directory
/// 2. `$NAME` / `${NAME}` from the OS environment (undefined names are
///    left untouched here; the residual scan below catches them)
/// 3. `$env.NAME` from the OS environment; an absent name keeps the
///    reference literal and marks the result unresolved
/// 4. `$name` for every name in `extra`; a `None` binding keeps the
///    placeholder and marks the result unresolved
///
/// After all passes, any remaining `$name`/`${name}`-shaped token marks the
/// result unresolved regardless of where it came from. Expansion is
/// idempotent: running it over an already-fully-resolved path is a no-op.
///
/// # Example
/// ```
/// use hyprcontrol::core::expand::expand_vars;
///
/// let result = expand_vars("~/.config/hypr/hyprland.conf", None);
/// assert!(result.fully_resolved);
/// assert!(!result.path.starts_with('~'));
/// ```
pub fn expand_vars(path: &str, extra: Option<&ExtraVars>) -> Expansion {
    let mut unresolved = false;

    let tilde_expanded = shellexpand::tilde(path);
    let env_expanded =
        shellexpand::env_with_context_no_errors(tilde_expanded.as_ref(), |name: &str| {
            env::var(name).ok()
        });

    let env_ref = env_reference_pattern();
    let mut result = env_ref
        .replace_all(env_expanded.as_ref(), |caps: &regex::Captures<'_>| {
            match env::var(&caps[1]) {
                Ok(value) => value,
                Err(_) => {
                    unresolved = true;
                    caps[0].to_string()
                }
            }
        })
        .into_owned();

    if let Some(extra) = extra {
        for (name, value) in extra {
            let placeholder = format!("${}", name);
            if !result.contains(&placeholder) {
                continue;
            }
            match value {
                Some(replacement) => result = result.replace(&placeholder, replacement),
                None => unresolved = true,
            }
        }
    }

    if residual_var_pattern().is_match(&result) {
        unresolved = true;
    }

    Expansion {
        path: result,
        fully_resolved: !unresolved,
    }
}
