//! Charm-style CLI prompts using cliclack

use super::output::{self, ClackReporter, ClockDice};
use crate::assets::{AssetFetcher, AssetSource};
use crate::config::project::optional_field;
use crate::config::{
    validate_binary_name, validate_game_name, validate_project_name, validate_source_file,
    ProjectConfig,
};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::scaffold::{AcceptDefaults, Prompter, ScaffoldOutcome, ScaffoldRequest, Scaffolder};
use std::path::PathBuf;

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Create a blank project (no demo program, no audio)
    pub blank: bool,

    /// Use this release tag instead of looking up the latest one
    pub release: Option<String>,

    /// Local asset mirror to use instead of fetching from remote
    pub asset_dir: Option<PathBuf>,

    /// Accept every default (non-interactive mode)
    pub yes: bool,
}

/// Prompts the operator through cliclack
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn project_name(&self) -> Result<String, ScaffoldError> {
        let name: String = cliclack::input("Project name")
            .placeholder("my-game")
            .validate(|input: &String| validate_project_name(input))
            .interact()?;
        Ok(name)
    }

    fn project_config(&self, default_name: &str) -> Result<ProjectConfig, ScaffoldError> {
        let defaults = ProjectConfig::with_defaults(default_name);

        let game_name: String = cliclack::input("Game name")
            .default_input(&defaults.game_name)
            .validate(|input: &String| validate_game_name(input))
            .interact()?;

        let version: String = cliclack::input("Version")
            .default_input(&defaults.version)
            .interact()?;

        let binary_name: String = cliclack::input("Binary name")
            .default_input(&defaults.binary_name)
            .validate(|input: &String| validate_binary_name(input))
            .interact()?;

        let main_source_file: String = cliclack::input("Main source file")
            .default_input(&defaults.main_source_file)
            .validate(|input: &String| validate_source_file(input))
            .interact()?;

        let icon_path: String = cliclack::input("Icon path (optional)")
            .placeholder("assets/icon.png")
            .required(false)
            .interact()?;

        let author: String = cliclack::input("Author (optional)")
            .required(false)
            .interact()?;

        let description: String = cliclack::input("Description (optional)")
            .required(false)
            .interact()?;

        Ok(ProjectConfig {
            project_name: defaults.project_name,
            game_name: game_name.trim().to_string(),
            version: optional_field(version).unwrap_or(defaults.version),
            binary_name,
            main_source_file,
            icon_path: optional_field(icon_path),
            author: optional_field(author),
            description: optional_field(description),
        })
    }
}

/// Run the init workflow with interactive prompts
pub async fn run<C: ProductConfig>(
    config: &C,
    args: InitArgs,
) -> Result<ScaffoldOutcome, ScaffoldError> {
    output::render(cliclack::intro(config.display_name()));

    let fetcher = setup_fetcher(config, args.asset_dir);
    let prompter: &dyn Prompter = if args.yes {
        &AcceptDefaults
    } else {
        &ClackPrompter
    };
    let reporter = ClackReporter;

    let parent = std::env::current_dir()
        .map_err(|e| ScaffoldError::filesystem("read", PathBuf::from("."), e))?;
    let request = ScaffoldRequest::new(parent, args.name)
        .blank(args.blank)
        .release(args.release);

    let result = Scaffolder::new(config, fetcher, prompter, &reporter)
        .run(request)
        .await;

    match &result {
        Ok(outcome) => output::report_success(config, outcome, &mut ClockDice),
        Err(e) => output::report_failure(e),
    }

    result
}

fn setup_fetcher<C: ProductConfig>(config: &C, asset_dir: Option<PathBuf>) -> AssetFetcher {
    let fetcher = match asset_dir {
        Some(path) => AssetFetcher::from_local(path, config.user_agent()),
        None => AssetFetcher::from_config(config),
    };

    output::render(match fetcher.source() {
        AssetSource::Local(path) => {
            cliclack::log::info(format!("Using local assets from {}", path.display()))
        }
        AssetSource::Remote => cliclack::log::info("Using remote assets"),
    });

    fetcher
}
