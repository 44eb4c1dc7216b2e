//! # Ngen Run Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! ngen reads no configuration files. Everything a run needs is assembled
//! from command-line arguments (and `NGEN_PRECOMPILE`, via clap's `env`
//! support) into a `GeneratorConfig` before any component is generated.
//!
//! ## Architecture
//!
//! - `root`: The directory new component directories are created in. The
//!   current working directory unless `--output` is given; a relative
//!   `--output` is resolved against the working directory. The root is not
//!   created or validated here; a missing root surfaces as a parent-missing
//!   error during generation.
//! - `pattern_cache`: Which `KebabConverter` mode to build.
//!
use crate::core::error::Result;
use crate::core::naming::{KebabConverter, PatternCache};
use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for one ngen process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub root: PathBuf,
    pub pattern_cache: PatternCache,
}

impl GeneratorConfig {
    /// Builds the configuration from parsed arguments.
    pub fn resolve(output: Option<&Path>, precompile: bool) -> Result<Self> {
        let root = match output {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => env::current_dir()
                .context("Failed to get current directory")?
                .join(dir),
            None => env::current_dir().context("Failed to get current directory")?,
        };
        let pattern_cache = if precompile {
            PatternCache::Precompiled
        } else {
            PatternCache::PerCall
        };
        debug!("Generation root: {}", root.display());
        debug!("Pattern cache mode: {:?}", pattern_cache);
        Ok(GeneratorConfig {
            root,
            pattern_cache,
        })
    }

    pub fn converter(&self) -> KebabConverter {
        KebabConverter::new(self.pattern_cache)
    }
}
