//! # Ngen Name Conversion
//!
//! File: cli/src/core/naming.rs
//!
//! ## Overview
//!
//! Turns a human-typed component name into the family of names a component
//! needs: class name, kebab-case base name, tag selector, template filename
//! and source filename.
//!
//! ## Architecture
//!
//! Kebab conversion is two regex substitutions followed by lower-casing:
//! 1. `(.)([A-Z][a-z]+)` becomes `$1-$2` (split before a capitalized word)
//! 2. `([a-z0-9])([A-Z])` becomes `$1-$2` (split a lower/digit-to-upper edge)
//! 3. The result is lower-cased
//!
//! `KebabConverter` runs in one of two `PatternCache` modes. `Precompiled`
//! compiles both patterns on first use and keeps them in the converter;
//! `PerCall` compiles them on every conversion. Both produce identical output.
//!
//! ## Examples
//!
//! ```rust
//! let converter = KebabConverter::new(PatternCache::Precompiled);
//! assert_eq!(converter.convert_to_kebab("DocViewer"), "doc-viewer");
//! assert_eq!(converter.selector("DocViewer"), "app-doc-viewer-component");
//! assert_eq!(component_class_name("DocViewer"), "DocViewerComponent");
//! ```
//!
use crate::core::error::NgenError;
use once_cell::unsync::OnceCell;
use regex::Regex;
use tracing::trace;

/// Suffix every generated class name ends with.
pub const COMPONENT_SUFFIX: &str = "Component";

const FIRST_CAP_PATTERN: &str = r"(.)([A-Z][a-z]+)";
const ALL_CAP_PATTERN: &str = r"([a-z0-9])([A-Z])";

/// How a `KebabConverter` obtains its compiled patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternCache {
    /// Compile both patterns for every conversion.
    #[default]
    PerCall,
    /// Compile once on first use and reuse for the converter's lifetime.
    Precompiled,
}

#[derive(Debug)]
struct CasePatterns {
    first_cap: Regex,
    all_cap: Regex,
}

impl CasePatterns {
    fn compile() -> Self {
        CasePatterns {
            first_cap: Regex::new(FIRST_CAP_PATTERN).expect("first-cap pattern is valid"),
            all_cap: Regex::new(ALL_CAP_PATTERN).expect("all-cap pattern is valid"),
        }
    }

    fn apply(&self, input: &str) -> String {
        let split_words = self.first_cap.replace_all(input, "${1}-${2}");
        self.all_cap
            .replace_all(&split_words, "${1}-${2}")
            .to_lowercase()
    }
}

/// Converts identifier-style names to kebab-case and derives the component
/// selector and filenames from them.
#[derive(Debug, Default)]
pub struct KebabConverter {
    mode: PatternCache,
    compiled: OnceCell<CasePatterns>,
}

impl KebabConverter {
    pub fn new(mode: PatternCache) -> Self {
        KebabConverter {
            mode,
            compiled: OnceCell::new(),
        }
    }

    pub fn mode(&self) -> PatternCache {
        self.mode
    }

    /// `DocViewer` -> `doc-viewer`.
    pub fn convert_to_kebab(&self, input: &str) -> String {
        let kebab = match self.mode {
            PatternCache::Precompiled => self
                .compiled
                .get_or_init(CasePatterns::compile)
                .apply(input),
            PatternCache::PerCall => CasePatterns::compile().apply(input),
        };
        trace!("Converted '{}' to '{}' ({:?})", input, kebab, self.mode);
        kebab
    }

    /// `DocViewer` -> `app-doc-viewer-component`.
    pub fn selector(&self, input: &str) -> String {
        format!("app-{}-component", self.convert_to_kebab(input))
    }

    /// `DocViewer` -> `doc-viewer.component.html`.
    pub fn template_file_name(&self, input: &str) -> String {
        format!("{}.component.html", self.convert_to_kebab(input))
    }

    /// `DocViewer` -> `doc-viewer.component.ts`.
    pub fn component_file_name(&self, input: &str) -> String {
        format!("{}.component.ts", self.convert_to_kebab(input))
    }

    /// Derives every name for an already normalized input.
    pub fn name_set(&self, input: &str) -> NameSet {
        NameSet {
            input: input.to_string(),
            class_name: component_class_name(input),
            base_kebab: self.convert_to_kebab(input),
            selector: self.selector(input),
            template_file_name: self.template_file_name(input),
            component_file_name: self.component_file_name(input),
        }
    }
}

/// The names derived from one normalized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    pub input: String,
    pub class_name: String,
    pub base_kebab: String,
    pub selector: String,
    pub template_file_name: String,
    pub component_file_name: String,
}

/// Appends `Component` unless the name already ends with it.
pub fn component_class_name(input: &str) -> String {
    if input.ends_with(COMPONENT_SUFFIX) {
        input.to_string()
    } else {
        format!("{}{}", input, COMPONENT_SUFFIX)
    }
}

/// Turns a space-delimited phrase (`doc viewer`) into identifier style
/// (`DocViewer`). Input without spaces is returned unchanged.
pub fn normalize_input(line: &str) -> Result<String, NgenError> {
    if !line.contains(' ') {
        return Ok(line.to_string());
    }

    let joined: String = line.split(' ').map(capitalize).collect();
    if joined.contains(' ') {
        return Err(NgenError::InputShape(joined));
    }
    Ok(joined)
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
