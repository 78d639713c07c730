//! Arcade Core - Shared library for scaffolding ARCADE game projects
//!
//! This library provides everything the `arcade` CLI needs to turn a project name into
//! a ready-to-build C project: the remote asset catalog, release resolution, concurrent
//! asset fetching, file templates, project metadata, and the scaffolding workflow itself.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Asset catalog, release lookup, fetching, file templates
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `Scaffolder`, driven
//!   through the `Prompter` and `Reporter` seams so any UI can sit on top
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts and output (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompter, reporter and banner
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use arcade_core::{AcceptDefaults, AssetFetcher, NullReporter, ScaffoldRequest, Scaffolder};
//!
//! let fetcher = AssetFetcher::from_config(&MyConfig)?;
//! let scaffolder = Scaffolder::new(&MyConfig, fetcher, &AcceptDefaults, &NullReporter);
//! let outcome = scaffolder.run(ScaffoldRequest::new(".", Some("demo-game".into()))).await?;
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod product;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use assets::{AssetDescriptor, AssetFetcher, AssetSource, ReleaseTag, Transfer};
pub use config::ProjectConfig;
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use scaffold::{
    AcceptDefaults, NullReporter, Prompter, Reporter, ScaffoldOutcome, ScaffoldRequest,
    Scaffolder, TaskProgress,
};
pub use templates::SourceKind;

/// Name of the metadata file written at the project root
pub const CONFIG_FILE_NAME: &str = "arcade.config.json";

/// Directory (relative to the project root) that receives the library headers
pub const HEADERS_DIR: &str = "arcade";

/// Directory (relative to the project root) that receives binary assets
pub const ASSETS_DIR: &str = "assets";
