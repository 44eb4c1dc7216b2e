//! # Ngen Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the pieces the commands are built from. None of
//! them touch the filesystem except `config`, which reads the working
//! directory.
//!
//! ## Architecture
//!
//! - `config`: Run configuration assembled from command-line arguments
//! - `error`: Error types and the exit-status table
//! - `naming`: Kebab-case conversion and the derived component names
//! - `templating`: Contents of the generated files
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config::GeneratorConfig;
//! use crate::core::error::{NgenError, Result};
//! use crate::core::naming::{KebabConverter, PatternCache};
//! use crate::core::templating;
//! ```
//!
pub mod config;
pub mod error;
pub mod naming;
pub mod templating;
