//! # Ngen Component Templates
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Produces the literal contents of the files a component is made of. Every
//! function here is a pure string builder; writing the results to disk is
//! the job of `commands::generate`.
//!
//! ## Architecture
//!
//! - `component_html_template`: Placeholder markup, no parameters
//! - `component_ts_template`: The component class with its decorator
//! - `component_index_template`: Re-export for the component's own `index.ts`
//! - `parent_index_line`: Re-export appended to the parent `index.ts`
//!
//! All outputs end with exactly one newline.
//!

/// Placeholder markup for `<name>.component.html`.
pub fn component_html_template() -> String {
    "<p>\n  Hello world!\n</p>\n".to_string()
}

/// Source for `<name>.component.ts`.
///
/// E.g. `app-doc-viewer-component`, `doc-viewer.component.html`,
/// `DocViewerComponent`.
pub fn component_ts_template(selector: &str, template_file_name: &str, class_name: &str) -> String {
    format!(
        r#"import {{ Component, OnInit }} from "@angular/core";

@Component({{
  selector: "{selector}",
  templateUrl: "./{template_file_name}"
}})
export class {class_name} implements OnInit {{

  constructor() {{}}

  ngOnInit(): void {{}}
}}
"#
    )
}

/// Contents of the component directory's own `index.ts`.
pub fn component_index_template(base_kebab: &str) -> String {
    format!("export * from \"./{}.component\";\n", base_kebab)
}

/// Line appended to the `index.ts` one level above the component directory.
pub fn parent_index_line(base_kebab: &str) -> String {
    format!(
        "export * from \"./{}/{}.component\";\n",
        base_kebab, base_kebab
    )
}
