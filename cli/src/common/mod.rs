//! # Ngen Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not specific to a single command. Currently this
//! is only the filesystem layer used by component generation.
//!

/// Utilities for filesystem operations (directory creation, writes, appends).
pub mod fs;
