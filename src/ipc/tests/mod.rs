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

//! IPC module tests
//!
//! Contains test suites for the reload client.
//! Note: Live-mode tests require a running Hyprland instance and are
//! marked #[ignore].

use crate::ipc::{ClientMode, HyprlandClient};

#[test]
fn test_dryrun_mode_never_spawns() {
    let client = HyprlandClient::new(ClientMode::DryRun);

    // DryRun succeeds whether or not hyprctl exists on this machine
    assert!(client.reload().is_ok());
}

#[test]
fn test_client_mode_equality() {
    assert_eq!(ClientMode::DryRun, ClientMode::DryRun);
    assert_ne!(ClientMode::DryRun, ClientMode::Live);
}

#[test]
#[ignore = "requires a running Hyprland instance"]
fn test_live_reload_against_real_compositor() {
    let client = HyprlandClient::new(ClientMode::Live);

    assert!(client.reload().is_ok());
}
