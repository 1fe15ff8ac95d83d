//! Config module tests
//!
//! Contains test suites for file operations:
//! - Recursive loader tests (include trees, cycles, missing files)
//! - ConfigManager tests (backups, settings saves)
//! - Transaction tests (atomic commit, rollback)

#[cfg(test)]
mod config_manager_tests;
