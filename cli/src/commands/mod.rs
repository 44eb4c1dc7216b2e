//! # Ngen Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the code that acts on the user's behalf. `main.rs`
//! picks an entry mode from `entry`, and every mode that writes to disk goes
//! through `generate`.
//!
//! ## Command Modules
//!
//! - `entry`: Argument, interactive and convert-only modes, plus the
//!   mapping from errors to exit statuses
//! - `generate`: The `Scaffolder` that creates one component on disk
//!

/// Entry modes and exit-status mapping.
pub mod entry;
/// Creation of a single component directory and its files.
pub mod generate;
