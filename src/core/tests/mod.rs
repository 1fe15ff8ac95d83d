//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Variable expansion tests
//! - Line classification and settings parsing tests
