//! # Ngen Component Generation
//!
//! File: cli/src/commands/generate.rs
//!
//! ## Overview
//!
//! This module turns one line of input into a component on disk. It handles:
//! - Normalizing the input and deriving the component's names
//! - Reporting the computed substitutions and target paths
//! - Validating the destination before anything is written
//! - Writing the component files and updating the parent `index.ts`
//!
//! ## Architecture
//!
//! `Scaffolder::generate` runs these steps in order:
//! 1. Normalize the line (`doc viewer` becomes `DocViewer`)
//! 2. Derive the `NameSet` through the `KebabConverter`
//! 3. Print the substitutions and the `ScaffoldTargets`
//! 4. Check that the destination is absent and its parent present
//! 5. Create the destination and write the `.html`, `.ts` and `index.ts` files
//! 6. Append the export line to the parent `index.ts`
//! 7. Verify the component and template files exist
//!
//! Nothing is rolled back on failure; a half-written destination directory
//! may remain. The caller decides how an error ends the process.
//!
//! ## Examples
//!
//! ```rust
//! let scaffolder = Scaffolder::new(KebabConverter::default(), root);
//! let generated = scaffolder.generate("doc viewer", &mut std::io::stdout())?;
//! assert_eq!(generated.names.base_kebab, "doc-viewer");
//! ```
//!
use crate::common::fs::io;
use crate::core::error::NgenError;
use crate::core::naming::{normalize_input, KebabConverter, NameSet};
use crate::core::templating;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RULE_WIDTH: usize = 40;
const INDEX_FILE_NAME: &str = "index.ts";

/// Every path a single generation reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTargets {
    pub destination: PathBuf,
    pub template: PathBuf,
    pub component: PathBuf,
    pub index: PathBuf,
    pub parent_index: PathBuf,
}

impl ScaffoldTargets {
    pub fn new(root: &Path, names: &NameSet) -> Self {
        let destination = root.join(&names.base_kebab);
        let parent = destination.parent().unwrap_or(root);
        ScaffoldTargets {
            template: destination.join(&names.template_file_name),
            component: destination.join(&names.component_file_name),
            index: destination.join(INDEX_FILE_NAME),
            parent_index: parent.join(INDEX_FILE_NAME),
            destination,
        }
    }
}

/// The outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub names: NameSet,
    pub targets: ScaffoldTargets,
}

/// Creates components under a fixed root directory.
#[derive(Debug)]
pub struct Scaffolder {
    converter: KebabConverter,
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(converter: KebabConverter, root: PathBuf) -> Self {
        Scaffolder { converter, root }
    }

    pub fn converter(&self) -> &KebabConverter {
        &self.converter
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generates one component from `line`, writing progress to `out`.
    pub fn generate<W: Write>(&self, line: &str, out: &mut W) -> Result<Generated, NgenError> {
        let input = normalize_input(line)?;
        let names = self.converter.name_set(&input);
        debug!("Derived names: {:?}", names);
        print_substitutions(out, &names).map_err(NgenError::Output)?;

        let targets = ScaffoldTargets::new(&self.root, &names);
        print_targets(out, &targets).map_err(NgenError::Output)?;

        check_destination(&targets.destination)?;
        write_component(&names, &targets)?;

        writeln!(out, "Parent index : {}", targets.parent_index.display())
            .map_err(NgenError::Output)?;
        io::append_line_to_file(
            &targets.parent_index,
            &templating::parent_index_line(&names.base_kebab),
        )
        .map_err(NgenError::FileSystem)?;

        verify_written(&targets)?;

        info!(
            "Generated component '{}' in '{}'",
            names.class_name,
            targets.destination.display()
        );
        writeln!(out, "Files successfully created.")
            .and_then(|_| writeln!(out, "All done!"))
            .and_then(|_| writeln!(out))
            .map_err(NgenError::Output)?;

        Ok(Generated { names, targets })
    }
}

fn print_substitutions<W: Write>(out: &mut W, names: &NameSet) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "> Computed substitutions")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Input        : {}", names.input)?;
    writeln!(out, "Class        : {}", names.class_name)?;
    writeln!(out, "Base name    : {}", names.base_kebab)?;
    writeln!(out, "Selector     : {}", names.selector)?;
    writeln!(out, "Template     : {}", names.template_file_name)?;
    writeln!(out, "Component    : {}", names.component_file_name)?;
    writeln!(out)
}

fn print_targets<W: Write>(out: &mut W, targets: &ScaffoldTargets) -> std::io::Result<()> {
    writeln!(out, "> Targets")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Destination  : {}", targets.destination.display())?;
    writeln!(out, "Template     : {}", targets.template.display())?;
    writeln!(out, "Component    : {}", targets.component.display())?;
    writeln!(out, "Index        : {}", targets.index.display())?;
    writeln!(out)
}

/// The destination must be new and its parent must already exist.
fn check_destination(destination: &Path) -> Result<(), NgenError> {
    if destination.exists() {
        return Err(NgenError::TargetExists(destination.to_path_buf()));
    }
    match destination.parent() {
        Some(parent) if parent.is_dir() => Ok(()),
        Some(parent) => Err(NgenError::ParentMissing(parent.to_path_buf())),
        None => Err(NgenError::ParentMissing(destination.to_path_buf())),
    }
}

fn write_component(names: &NameSet, targets: &ScaffoldTargets) -> Result<(), NgenError> {
    io::create_new_dir(&targets.destination).map_err(NgenError::FileSystem)?;

    io::write_string_to_file(&targets.template, &templating::component_html_template())
        .map_err(NgenError::FileSystem)?;

    let source = templating::component_ts_template(
        &names.selector,
        &names.template_file_name,
        &names.class_name,
    );
    io::write_string_to_file(&targets.component, &source).map_err(NgenError::FileSystem)?;

    io::write_string_to_file(
        &targets.index,
        &templating::component_index_template(&names.base_kebab),
    )
    .map_err(NgenError::FileSystem)
}

fn verify_written(targets: &ScaffoldTargets) -> Result<(), NgenError> {
    for path in [&targets.component, &targets.template] {
        if !path.is_file() {
            return Err(NgenError::VerificationFailed(path.clone()));
        }
    }
    Ok(())
}
