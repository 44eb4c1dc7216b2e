//! # Ngen Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the scaffolding commands. Functions live in
//! the `io` submodule and are imported from there
//! (e.g. `crate::common::fs::io::create_new_dir`).
//!

/// Directory creation, file writes, appends and reads with error context.
pub mod io;
