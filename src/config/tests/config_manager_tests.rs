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

//! ConfigManager tests
//!
//! Tests for the save path: backup creation, settings persistence, and
//! byte-level preservation of unedited lines.

use crate::config::{ConfigError, ConfigManager};
use crate::core::types::Setting;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: creates a temporary root config for testing.
fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("hyprland.conf");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

fn manager_for(config_path: &PathBuf) -> ConfigManager {
    ConfigManager::new(config_path.to_str().unwrap()).unwrap()
}

#[test]
fn test_new_expands_and_stores_root() {
    let (_temp_dir, config_path) = create_test_config("gaps_in = 5\n");
    let manager = manager_for(&config_path);

    assert_eq!(manager.root_path(), config_path.as_path());
    assert_eq!(
        manager.backup_dir(),
        config_path.parent().unwrap().join("backups").as_path()
    );
}

#[test]
fn test_new_rejects_unresolved_path() {
    let result = ConfigManager::new("$env.HYPRCONTROL_TEST_NO_SUCH_VAR/hyprland.conf");

    match result {
        Err(ConfigError::UnresolvedPath(path)) => {
            assert!(path.contains("HYPRCONTROL_TEST_NO_SUCH_VAR"))
        }
        other => panic!("Expected UnresolvedPath error, got: {:?}", other),
    }
}

#[test]
fn test_load_resolves_include_tree() {
    let (_temp_dir, config_path) = create_test_config("source = ./extra.conf\n");
    fs::write(
        config_path.parent().unwrap().join("extra.conf"),
        "rounding = 10\n",
    )
    .unwrap();

    let manager = manager_for(&config_path);
    let configs = manager.load(None);

    assert_eq!(configs.len(), 2);
    assert_eq!(configs.get(1).unwrap().settings()[0].key, "rounding");
}

#[test]
fn test_save_settings_edits_only_listed_lines() {
    let content = "gaps_in = 5\n# comment\nrounding = 10 # soft\n\ngaps_out = 20\n";
    let (_temp_dir, config_path) = create_test_config(content);
    let manager = manager_for(&config_path);

    let configs = manager.load(None);
    let file = configs.get(0).unwrap();
    let edits = vec![Setting::new(0, "gaps_in", "8"), Setting::new(2, "rounding", "0")];

    manager.save_settings(file, &edits).unwrap();

    let saved = fs::read_to_string(&config_path).unwrap();
    assert_eq!(saved, "gaps_in = 8\n# comment\nrounding = 0\n\ngaps_out = 20\n");
}

#[test]
fn test_save_settings_round_trips_through_parser() {
    let (_temp_dir, config_path) = create_test_config("gaps_in = 5\nrounding = 10\n");
    let manager = manager_for(&config_path);

    let configs = manager.load(None);
    let file = configs.get(0).unwrap();
    let mut edits = file.settings();
    edits[1].value = "4".to_string();

    manager.save_settings(file, &edits).unwrap();

    let reloaded = manager.load(None);
    let settings = reloaded.get(0).unwrap().settings();
    assert_eq!(settings[0].value, "5");
    assert_eq!(settings[1].value, "4");
}

#[test]
fn test_save_creates_backup_first() {
    let (_temp_dir, config_path) = create_test_config("gaps_in = 5\n");
    let manager = manager_for(&config_path);

    let configs = manager.load(None);
    let file = configs.get(0).unwrap();
    manager
        .save_settings(file, &[Setting::new(0, "gaps_in", "9")])
        .unwrap();

    let backups: Vec<_> = fs::read_dir(manager.backup_dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(backups.len(), 1);

    // Backup holds the pre-save content
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "gaps_in = 5\n");
}

#[test]
fn test_save_sourced_file_to_its_own_path() {
    let (_temp_dir, config_path) = create_test_config("source = ./extra.conf\n");
    let extra_path = config_path.parent().unwrap().join("extra.conf");
    fs::write(&extra_path, "rounding = 10\n").unwrap();

    let manager = manager_for(&config_path);
    let configs = manager.load(None);
    let file = configs.get(1).unwrap();

    manager
        .save_settings(file, &[Setting::new(0, "rounding", "2")])
        .unwrap();

    assert_eq!(fs::read_to_string(&extra_path).unwrap(), "rounding = 2\n");
    // Root untouched
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "source = ./extra.conf\n"
    );
}

#[test]
fn test_create_timestamped_backup_format() {
    let (_temp_dir, config_path) = create_test_config("gaps_in = 5\n");
    let manager = manager_for(&config_path);

    let backup_path = manager.create_timestamped_backup(&config_path).unwrap();

    assert!(backup_path.exists());
    assert_eq!(backup_path.parent().unwrap(), manager.backup_dir());

    // Filename format: hyprland.conf.YYYY-MM-DD_HHMMSS
    let filename = backup_path.file_name().unwrap().to_str().unwrap();
    let parts: Vec<&str> = filename.split('.').collect();
    assert_eq!(parts.len(), 3, "Filename should be name.ext.timestamp");
    assert_eq!(parts[0], "hyprland");
    assert_eq!(parts[1], "conf");

    let parsed = chrono::NaiveDateTime::parse_from_str(parts[2], "%Y-%m-%d_%H%M%S");
    assert!(parsed.is_ok(), "Timestamp should parse: {}", parts[2]);
}

#[test]
fn test_multiple_backups_dont_overwrite() {
    let (_temp_dir, config_path) = create_test_config("original content\n");
    let manager = manager_for(&config_path);

    let backup1 = manager.create_timestamped_backup(&config_path).unwrap();

    // Wait 1 second to ensure different timestamp
    std::thread::sleep(std::time::Duration::from_secs(1));

    fs::write(&config_path, "modified content\n").unwrap();
    let backup2 = manager.create_timestamped_backup(&config_path).unwrap();

    assert!(backup1.exists());
    assert!(backup2.exists());
    assert_eq!(fs::read_to_string(&backup1).unwrap(), "original content\n");
    assert_eq!(fs::read_to_string(&backup2).unwrap(), "modified content\n");
}
