//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to configure the
//! scaffolding behavior: where releases are looked up, how HTTP requests
//! identify themselves, and what the operator is told once a project exists.

use crate::config::ProjectConfig;
use std::path::Path;

/// Configuration trait for the scaffolding CLI
///
/// The binary implements this trait to define:
/// - Product identity (name, display name, tagline)
/// - Release lookup endpoint and its fallback tag
/// - Environment variable overrides
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// One-line description shown under the banner
    fn tagline(&self) -> &'static str;

    /// Endpoint answering with the latest library release as JSON (`tag_name`)
    fn release_url(&self) -> &'static str;

    /// Environment variable name for overriding the release endpoint
    fn release_url_env(&self) -> &'static str;

    /// Release tag used whenever the latest release cannot be resolved
    fn fallback_release(&self) -> &'static str;

    /// Environment variable naming a local asset mirror used instead of the network
    fn asset_dir_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, project: &ProjectConfig) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
