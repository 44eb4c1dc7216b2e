//! # Ngen Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module wraps the handful of `std::fs` calls a scaffolding run makes,
//! adding `anyhow` context so a failure names the path involved.
//!
//! ## Architecture
//!
//! - **`create_new_dir`**: Creates exactly one directory level. Fails if the path already
//!   exists or its parent is missing; it never behaves like `mkdir -p`.
//! - **`write_string_to_file`**: Writes a string to a file, replacing any previous content.
//! - **`append_line_to_file`**: Appends a line to a file, creating it when absent. Prior
//!   content is never truncated, and a missing trailing newline is repaired first so every
//!   entry stays on its own line.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::create_new_dir(&destination)?;
//! io::write_string_to_file(&destination.join("index.ts"), &contents)?;
//! io::append_line_to_file(&root.join("index.ts"), &export_line)?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Creates a single new directory at `path`.
///
/// # Errors
///
/// Returns an `Err` if the path already exists, the parent directory is
/// missing, or creation fails for any other reason (e.g. permissions).
pub fn create_new_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).with_context(|| format!("Failed to create directory {:?}", path))?;
    info!("Created directory: {:?}", path);
    Ok(())
}

/// Writes string content to `path`, overwriting any existing file.
///
/// The parent directory must already exist.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Appends `line` to the file at `path`, creating the file if it is absent.
///
/// `line` should carry its own trailing newline. If the existing file is
/// non-empty and does not end with a newline, one is written first.
pub fn append_line_to_file(path: &Path, line: &str) -> Result<()> {
    let needs_separator = match fs::read(path) {
        Ok(existing) => existing.last().is_some_and(|&byte| byte != b'\n'),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{:?} does not exist yet, it will be created", path);
            false
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to inspect file {:?}", path));
        }
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;

    if needs_separator {
        debug!("Adding missing trailing newline to {:?}", path);
        file.write_all(b"\n")
            .with_context(|| format!("Failed to append to file {:?}", path))?;
    }
    file.write_all(line.as_bytes())
        .with_context(|| format!("Failed to append to file {:?}", path))?;
    info!("Appended line to file: {:?}", path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_new_dir() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("doc-viewer");
        create_new_dir(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// An existing directory is an error, not a no-op.
    #[test]
    fn test_create_new_dir_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing = base_dir.path().join("existing");
        fs::create_dir(&existing)?;
        let result = create_new_dir(&existing);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to create directory"));
        Ok(())
    }

    #[test]
    fn test_create_new_dir_is_not_recursive() -> Result<()> {
        let base_dir = tempdir()?;
        let nested = base_dir.path().join("missing/child");
        assert!(create_new_dir(&nested).is_err());
        assert!(!base_dir.path().join("missing").exists());
        Ok(())
    }

    #[test]
    fn test_write_overwrites() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("doc-viewer.component.html");
        write_string_to_file(&file_path, "old")?;
        write_string_to_file(&file_path, "new")?;
        assert_eq!(fs::read_to_string(&file_path)?, "new");
        Ok(())
    }

    #[test]
    fn test_write_requires_parent() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("missing/index.ts");
        assert!(write_string_to_file(&file_path, "x").is_err());
        Ok(())
    }

    #[test]
    fn test_append_creates_then_appends() -> Result<()> {
        let base_dir = tempdir()?;
        let index = base_dir.path().join("index.ts");
        append_line_to_file(&index, "first;\n")?;
        append_line_to_file(&index, "second;\n")?;
        assert_eq!(fs::read_to_string(&index)?, "first;\nsecond;\n");
        Ok(())
    }

    #[test]
    fn test_append_repairs_missing_newline() -> Result<()> {
        let base_dir = tempdir()?;
        let index = base_dir.path().join("index.ts");
        fs::write(&index, "existing;")?;
        append_line_to_file(&index, "added;\n")?;
        assert_eq!(fs::read_to_string(&index)?, "existing;\nadded;\n");
        Ok(())
    }
}
