//! Text of the generated project files
//!
//! Templates are embedded at compile time and filled with plain `{{field}}`
//! substitution. Rendering never touches the filesystem.

const DEMO_SOURCE: &str = include_str!("../../templates/main_demo.c");
const BLANK_SOURCE: &str = include_str!("../../templates/main_blank.c");
const BUILD_FILE: &str = include_str!("../../templates/Makefile");
const IGNORE_FILE: &str = include_str!("../../templates/gitignore");

/// Name of the generated build descriptor
pub const BUILD_FILE_NAME: &str = "Makefile";
/// Name of the generated ignore file
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Which main source file to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Start/Playing sample game
    Demo,
    /// Empty `main` that only pulls in the library
    Blank,
}

impl SourceKind {
    pub fn from_blank(blank: bool) -> Self {
        if blank {
            Self::Blank
        } else {
            Self::Demo
        }
    }
}

/// Render the main C source; the demo uses `stem` as its window title
pub fn render_main_source(kind: SourceKind, stem: &str) -> String {
    match kind {
        SourceKind::Demo => DEMO_SOURCE.replace("{{title}}", &escape_c_string(stem)),
        SourceKind::Blank => BLANK_SOURCE.to_string(),
    }
}

pub fn render_build_file(binary_name: &str, source_file: &str) -> String {
    BUILD_FILE
        .replace("{{binary_name}}", binary_name)
        .replace("{{source_file}}", source_file)
}

pub fn render_ignore_file() -> String {
    IGNORE_FILE.to_string()
}

fn escape_c_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
