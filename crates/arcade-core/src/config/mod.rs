//! Project metadata and the rules its fields must satisfy

pub mod project;
pub mod validate;

pub use project::ProjectConfig;
pub use validate::{
    validate_binary_name, validate_game_name, validate_project_name, validate_source_file,
    SOURCE_SUFFIX,
};
