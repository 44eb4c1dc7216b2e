//! # Ngen Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout ngen and the table
//! that maps them onto process exit statuses.
//!
//! ## Architecture
//!
//! The error system consists of three pieces:
//! - `NgenError`: A `thiserror` enum naming every way a run can fail
//! - `ExitStatus`: The process exit status a run finishes with
//! - `Result<T>`: A type alias for `anyhow::Result<T>`, used by the
//!   filesystem helpers and configuration code where context chains matter
//!
//! Errors are returned as values up to the entry loop (`commands::entry`),
//! which decides the `ExitStatus`. Nothing below that level terminates the
//! process.
//!
//! ## Examples
//!
//! ```rust
//! // Filesystem helpers add context with anyhow...
//! fs::create_dir(&destination)
//!     .with_context(|| format!("Failed to create directory '{}'", destination.display()))
//!     .map_err(NgenError::FileSystem)?;
//!
//! // ...and the entry loop maps the typed error onto an exit status.
//! let status = err.exit_status(RunMode::Arguments);
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for ngen.
#[derive(Error, Debug)]
pub enum NgenError {
    #[error("Input '{0}' still contains a space after normalization")]
    InputShape(String),

    #[error("Destination '{}' already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("Parent directory '{}' does not exist", .0.display())]
    ParentMissing(PathBuf),

    #[error("Expected file '{}' is missing after generation", .0.display())]
    VerificationFailed(PathBuf),

    /// Carries the full `anyhow` context chain of the failed operation.
    #[error("Filesystem error: {0:#}")]
    FileSystem(anyhow::Error),

    #[error("Failed to write progress output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Input ended before a blank line was entered")]
    StreamExhausted,

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("No component name given on the command line")]
    EmptyArguments,
}

/// Which entry mode produced an error. The same error can map to a different
/// exit status depending on how the run was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Arguments,
    Interactive,
    ConvertOnly,
}

/// Process exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal termination (blank line, or a finished argument-mode run).
    Success,
    /// Interactive input ended without a blank terminator.
    InputExhausted,
    /// A fatal error inside `generate`.
    GenerationFailed,
    /// Any other failure of a single argument-mode invocation.
    ArgumentModeFailed,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::InputExhausted => 1,
            ExitStatus::GenerationFailed => 2,
            ExitStatus::ArgumentModeFailed => 3,
        }
    }
}

impl NgenError {
    /// True for precondition and filesystem failures raised while creating
    /// the component on disk.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            NgenError::TargetExists(_)
                | NgenError::ParentMissing(_)
                | NgenError::VerificationFailed(_)
                | NgenError::FileSystem(_)
        )
    }

    /// Maps this error onto the exit status for the given entry mode.
    pub fn exit_status(&self, mode: RunMode) -> ExitStatus {
        match self {
            NgenError::StreamExhausted | NgenError::Stdin(_) => ExitStatus::InputExhausted,
            err if err.is_generation_failure() => ExitStatus::GenerationFailed,
            _ => match mode {
                RunMode::Arguments => ExitStatus::ArgumentModeFailed,
                RunMode::Interactive | RunMode::ConvertOnly => ExitStatus::GenerationFailed,
            },
        }
    }
}

/// Type alias for Result using anyhow::Error, used where context chains are
/// more useful than a typed variant.
pub type Result<T> = anyhow::Result<T>;
