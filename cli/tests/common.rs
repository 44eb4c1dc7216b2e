//! # Ngen CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each test
//! file is compiled as its own crate and runs the compiled `ngen` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Creates an `assert_cmd::Command` for the compiled `ngen` binary.
///
/// `NGEN_PRECOMPILE` and `RUST_LOG` are cleared so the caller's environment
/// cannot change a test's behavior.
pub fn ngen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ngen").expect("Failed to find ngen binary for testing");
    cmd.env_remove("NGEN_PRECOMPILE").env_remove("RUST_LOG");
    cmd
}

/// Like `ngen_cmd`, but running inside `dir`.
pub fn ngen_in(dir: &Path) -> Command {
    let mut cmd = ngen_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Reads a generated file, panicking with the path on failure.
pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
