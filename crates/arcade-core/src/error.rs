//! Error taxonomy for the scaffolding workflow

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for usage problems (unknown command, invalid project name)
pub const EXIT_USAGE: u8 = 1;
/// Exit code when the target directory already exists
pub const EXIT_DIRECTORY_CONFLICT: u8 = 2;
/// Exit code for every other scaffolding failure
pub const EXIT_FAILURE: u8 = 3;

/// Fatal scaffolding failures
///
/// Release lookup failures are not listed here: they are recovered by falling
/// back to a fixed tag (see [`crate::assets::release`]).
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Setup cancelled.")]
    PromptCancelled,

    #[error("A project name is required when prompts are skipped.")]
    MissingProjectName,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Directory {} already exists.", .0.display())]
    DirectoryConflict(PathBuf),

    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to fetch {path}: {source:#}")]
    AssetFetch {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to serialize project config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Prompt(io::Error),
}

impl ScaffoldError {
    /// Wrap a filesystem failure with the attempted action and path
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingProjectName | Self::InvalidProjectName { .. } => EXIT_USAGE,
            Self::DirectoryConflict(_) => EXIT_DIRECTORY_CONFLICT,
            _ => EXIT_FAILURE,
        }
    }
}

/// Prompt libraries report an aborted session (Esc, Ctrl-C) as `Interrupted`
impl From<io::Error> for ScaffoldError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            Self::PromptCancelled
        } else {
            Self::Prompt(err)
        }
    }
}
