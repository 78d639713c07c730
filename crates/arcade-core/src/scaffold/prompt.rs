//! Where project metadata comes from

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;

/// Source of the operator's answers
///
/// Implementations validate their own input; [`crate::Scaffolder`] trusts what it
/// gets back. Returning [`ScaffoldError::PromptCancelled`] aborts the scaffold.
pub trait Prompter {
    /// Ask for the project (and directory) name
    fn project_name(&self) -> Result<String, ScaffoldError>;

    /// Ask for the remaining metadata, offering `default_name` where a name is needed
    fn project_config(&self, default_name: &str) -> Result<ProjectConfig, ScaffoldError>;
}

/// Non-interactive prompter that accepts every default
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn project_name(&self) -> Result<String, ScaffoldError> {
        Err(ScaffoldError::MissingProjectName)
    }

    fn project_config(&self, default_name: &str) -> Result<ProjectConfig, ScaffoldError> {
        Ok(ProjectConfig::with_defaults(default_name))
    }
}
