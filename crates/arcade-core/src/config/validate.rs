//! Field validation shared by the interactive prompts and CLI arguments
//!
//! Validators return `&'static str` reasons so they plug straight into
//! cliclack's `validate` hook.

/// Suffix every main source file must carry
pub const SOURCE_SUFFIX: &str = ".c";

/// Names that cannot be used as a directory on Windows
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// True when every character is in `[A-Za-z0-9_-]`
fn is_identifier(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Project names become directory names
pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Project name cannot be empty");
    }
    if !is_identifier(name) {
        return Err("Use only letters, numbers, underscores and hyphens");
    }
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
    {
        return Err("That name is reserved by the operating system");
    }
    Ok(())
}

pub fn validate_game_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        Err("Game name cannot be empty")
    } else {
        Ok(())
    }
}

pub fn validate_binary_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        Err("Binary name cannot be empty")
    } else if !is_identifier(name) {
        Err("Use only letters, numbers, underscores and hyphens")
    } else {
        Ok(())
    }
}

/// The source file is written at the project root and listed unquoted in the
/// `Makefile`, so the stem follows the same character rules as binary names
pub fn validate_source_file(name: &str) -> Result<(), &'static str> {
    if name.contains('/') || name.contains('\\') {
        return Err("Source file must be a file name, not a path");
    }
    match name.strip_suffix(SOURCE_SUFFIX) {
        Some("") => Err("Source file needs a name before .c"),
        Some(stem) if !is_identifier(stem) => {
            Err("Use only letters, numbers, underscores and hyphens before .c")
        }
        Some(_) => Ok(()),
        None => Err("Source file must end with .c"),
    }
}
