//! # Ngen Entry Modes
//!
//! File: cli/src/commands/entry.rs
//!
//! ## Overview
//!
//! Decides how many components a process generates and how it ends. Three
//! mutually exclusive modes exist:
//! - **Arguments** (`ngen doc viewer`): the words form one line, generated once
//! - **Interactive** (`ngen`): lines are read from stdin until a blank line
//! - **Convert-only** (`ngen --convert-only`): each stdin line is printed in
//!   kebab-case until end of input, nothing is written to disk
//!
//! ## Architecture
//!
//! Each mode runs against any `BufRead`/`Write` pair so tests can drive it
//! with in-memory buffers. Errors are collected as `NgenError` values and
//! mapped onto an `ExitStatus` here, the single place that knows the
//! exit-code table.
//!
use crate::commands::generate::Scaffolder;
use crate::core::error::{ExitStatus, NgenError, RunMode};
use crate::core::naming::KebabConverter;
use std::io::{BufRead, Write};
use tracing::{debug, error, info};

const FATAL_MESSAGE: &str = "ERROR: Must exit...";

/// Generates a single component from command-line words.
pub fn run_with_arguments<W: Write>(
    scaffolder: &Scaffolder,
    words: &[String],
    out: &mut W,
) -> ExitStatus {
    finish(arguments_mode(scaffolder, words, out), RunMode::Arguments, out)
}

/// Generates one component per stdin line until a blank line.
pub fn run_interactive<R: BufRead, W: Write>(
    scaffolder: &Scaffolder,
    input: R,
    out: &mut W,
) -> ExitStatus {
    finish(interactive_mode(scaffolder, input, out), RunMode::Interactive, out)
}

/// Prints the kebab-case form of each stdin line until end of input.
pub fn run_convert_only<R: BufRead, W: Write>(
    converter: &KebabConverter,
    input: R,
    out: &mut W,
) -> ExitStatus {
    finish(convert_only_mode(converter, input, out), RunMode::ConvertOnly, out)
}

fn arguments_mode<W: Write>(
    scaffolder: &Scaffolder,
    words: &[String],
    out: &mut W,
) -> Result<(), NgenError> {
    let line = words.join(" ");
    let line = line.trim();
    writeln!(out, "line : {}", line).map_err(NgenError::Output)?;
    if line.is_empty() {
        return Err(NgenError::EmptyArguments);
    }
    let generated = scaffolder.generate(line, out)?;
    debug!(
        "Argument mode created {} in {}",
        generated.names.class_name,
        generated.targets.destination.display()
    );
    Ok(())
}

fn interactive_mode<R: BufRead, W: Write>(
    scaffolder: &Scaffolder,
    mut input: R,
    out: &mut W,
) -> Result<(), NgenError> {
    let mut buffer = String::new();
    loop {
        buffer.clear();
        if input.read_line(&mut buffer).map_err(NgenError::Stdin)? == 0 {
            return Err(NgenError::StreamExhausted);
        }
        let line = buffer.trim();
        writeln!(out, "line : {}", line).map_err(NgenError::Output)?;
        if line.is_empty() {
            writeln!(out, "Exiting...").map_err(NgenError::Output)?;
            return Ok(());
        }
        let generated = scaffolder.generate(line, out)?;
        debug!("Interactive mode created {}", generated.targets.destination.display());
    }
}

fn convert_only_mode<R: BufRead, W: Write>(
    converter: &KebabConverter,
    input: R,
    out: &mut W,
) -> Result<(), NgenError> {
    for line in input.lines() {
        let line = line.map_err(NgenError::Stdin)?;
        writeln!(out, "{}", converter.convert_to_kebab(&line)).map_err(NgenError::Output)?;
    }
    debug!("End of input reached in convert-only mode");
    Ok(())
}

fn finish<W: Write>(result: Result<(), NgenError>, mode: RunMode, out: &mut W) -> ExitStatus {
    match result {
        Ok(()) => {
            info!("{:?} run finished", mode);
            ExitStatus::Success
        }
        Err(err) => {
            let status = err.exit_status(mode);
            error!("{:?} run failed ({:?}): {}", mode, status, err);
            eprintln!("Error: {}", err);
            let _ = writeln!(out, "{}", FATAL_MESSAGE);
            status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::naming::PatternCache;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    fn scaffolder(root: &Path) -> Scaffolder {
        Scaffolder::new(KebabConverter::new(PatternCache::PerCall), root.to_path_buf())
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_interactive_blank_first_line_exits_0() {
        let root = tempdir().unwrap();
        let mut out = Vec::new();
        let status = run_interactive(&scaffolder(root.path()), Cursor::new("\n"), &mut out);
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(String::from_utf8(out).unwrap(), "line : \nExiting...\n");
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_interactive_whitespace_line_counts_as_blank() {
        let root = tempdir().unwrap();
        let status = run_interactive(
            &scaffolder(root.path()),
            Cursor::new("   \t\n"),
            &mut Vec::new(),
        );
        assert_eq!(status, ExitStatus::Success);
    }

    #[test]
    fn test_interactive_end_of_input_exits_1() {
        let root = tempdir().unwrap();
        let mut out = Vec::new();
        let status = run_interactive(&scaffolder(root.path()), Cursor::new(""), &mut out);
        assert_eq!(status, ExitStatus::InputExhausted);
        assert_eq!(status.code(), 1);
        assert!(String::from_utf8(out).unwrap().contains(FATAL_MESSAGE));
    }

    #[test]
    fn test_interactive_generates_each_line() {
        let root = tempdir().unwrap();
        let status = run_interactive(
            &scaffolder(root.path()),
            Cursor::new("  doc viewer  \nHTTPServer\n\n"),
            &mut Vec::new(),
        );
        assert_eq!(status, ExitStatus::Success);
        assert!(root.path().join("doc-viewer/doc-viewer.component.ts").is_file());
        assert!(root.path().join("http-server/http-server.component.html").is_file());
    }

    #[test]
    fn test_interactive_without_terminator_generates_then_exits_1() {
        let root = tempdir().unwrap();
        let status = run_interactive(
            &scaffolder(root.path()),
            Cursor::new("DocViewer\n"),
            &mut Vec::new(),
        );
        assert_eq!(status, ExitStatus::InputExhausted);
        assert!(root.path().join("doc-viewer").is_dir());
    }

    #[test]
    fn test_interactive_duplicate_exits_2() {
        let root = tempdir().unwrap();
        let status = run_interactive(
            &scaffolder(root.path()),
            Cursor::new("doc viewer\nDocViewer\n\n"),
            &mut Vec::new(),
        );
        assert_eq!(status, ExitStatus::GenerationFailed);
        assert_eq!(status.code(), 2);
        assert!(root.path().join("doc-viewer/doc-viewer.component.ts").is_file());
    }

    #[test]
    fn test_arguments_generate_once() {
        let root = tempdir().unwrap();
        let mut out = Vec::new();
        let status = run_with_arguments(
            &scaffolder(root.path()),
            &words(&["doc", "viewer"]),
            &mut out,
        );
        assert_eq!(status, ExitStatus::Success);
        assert!(String::from_utf8(out).unwrap().starts_with("line : doc viewer\n"));
        assert!(root.path().join("doc-viewer/index.ts").is_file());
    }

    #[test]
    fn test_arguments_empty_never_generates() {
        let root = tempdir().unwrap();
        let mut out = Vec::new();
        let status = run_with_arguments(&scaffolder(root.path()), &words(&["", "  "]), &mut out);
        assert_eq!(status, ExitStatus::ArgumentModeFailed);
        assert_eq!(status.code(), 3);
        assert!(!String::from_utf8(out).unwrap().contains("Computed substitutions"));
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_arguments_existing_target_exits_2() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("doc-viewer")).unwrap();
        let status = run_with_arguments(
            &scaffolder(root.path()),
            &words(&["DocViewer"]),
            &mut Vec::new(),
        );
        assert_eq!(status, ExitStatus::GenerationFailed);
        assert!(!root.path().join("index.ts").exists());
    }

    #[test]
    fn test_convert_only_prints_each_line() {
        let converter = KebabConverter::new(PatternCache::Precompiled);
        let mut out = Vec::new();
        let status = run_convert_only(
            &converter,
            Cursor::new("DocViewer\nHTTPServer\n\nsimple"),
            &mut out,
        );
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "doc-viewer\nhttp-server\n\nsimple\n"
        );
    }
}
