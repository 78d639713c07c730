//! Project metadata persisted as `arcade.config.json`

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Version written for new projects
pub const DEFAULT_VERSION: &str = "1.0.0";
/// Binary produced by the generated Makefile
pub const DEFAULT_BINARY_NAME: &str = "game";
/// Main source file written at the project root
pub const DEFAULT_SOURCE_FILE: &str = "main.c";

/// Choices made while scaffolding a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    pub game_name: String,
    pub version: String,
    pub binary_name: String,
    pub main_source_file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectConfig {
    /// Defaults offered for a project named `project_name`
    pub fn with_defaults(project_name: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            game_name: project_name.to_string(),
            version: DEFAULT_VERSION.to_string(),
            binary_name: DEFAULT_BINARY_NAME.to_string(),
            main_source_file: DEFAULT_SOURCE_FILE.to_string(),
            icon_path: None,
            author: None,
            description: None,
        }
    }

    /// File name of the main source without its suffix
    pub fn source_stem(&self) -> &str {
        self.main_source_file
            .strip_suffix(super::SOURCE_SUFFIX)
            .unwrap_or(&self.main_source_file)
    }

    pub fn to_json(&self) -> Result<String, ScaffoldError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub async fn write_to(&self, path: &Path) -> Result<(), ScaffoldError> {
        let json = self.to_json()?;
        fs::write(path, json)
            .await
            .map_err(|e| ScaffoldError::filesystem("write", path, e))
    }

    pub async fn read_from(path: &Path) -> Result<Self, ScaffoldError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ScaffoldError::filesystem("read", path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Treat blank answers to optional questions as "not provided"
pub fn optional_field(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
