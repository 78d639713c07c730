//! ARCADE CLI - Project scaffolding for ARCADE games

mod logging;

use arcade_core::error::EXIT_USAGE;
use arcade_core::tui::{self, InitArgs};
use arcade_core::{ProductConfig, ProjectConfig};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// ARCADE product configuration
#[derive(Clone)]
pub struct ArcadeConfig;

impl ProductConfig for ArcadeConfig {
    fn name(&self) -> &'static str {
        "arcade"
    }

    fn display_name(&self) -> &'static str {
        "ARCADE"
    }

    fn tagline(&self) -> &'static str {
        "Retro 2D Game Development with ARCADE Library"
    }

    fn release_url(&self) -> &'static str {
        "https://api.github.com/repos/GeorgeET15/arcade-lib/releases/latest"
    }

    fn release_url_env(&self) -> &'static str {
        "ARCADE_RELEASE_URL"
    }

    fn fallback_release(&self) -> &'static str {
        "v1.0.0"
    }

    fn asset_dir_env(&self) -> &'static str {
        "ARCADE_ASSET_DIR"
    }

    fn next_steps(&self, dir: &Path, project: &ProjectConfig) -> Vec<String> {
        let current = std::env::current_dir().ok();
        let shown = current
            .as_deref()
            .and_then(|cwd| dir.strip_prefix(cwd).ok())
            .unwrap_or(dir);

        vec![
            format!("cd {}", shown.display()),
            format!("make          # Build {}", project.binary_name),
            "make run      # Run the game".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "CLI for scaffolding ARCADE game projects")]
#[command(version)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Args {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new ARCADE project
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Create a blank project without the demo program and audio
    #[arg(short, long)]
    pub blank: bool,

    /// Use this ARCADE release tag instead of the latest one
    #[arg(long)]
    pub release: Option<String>,

    /// Local directory to copy assets from instead of fetching from remote (for development use)
    #[arg(long = "asset-dir")]
    pub asset_dir: Option<PathBuf>,

    /// Accept all defaults (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            name: args.name,
            blank: args.blank,
            release: args.release,
            asset_dir: args.asset_dir,
            yes: args.yes,
        }
    }
}

fn show_home(config: &ArcadeConfig) {
    tui::show_banner(config);
    tui::show_usage(config);
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = ArcadeConfig;

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.is_empty() || raw.iter().any(|arg| arg == "--help" || arg == "-h") {
        show_home(&config);
        return ExitCode::SUCCESS;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            eprintln!("{}", format!("Unknown command: {}", raw.join(" ")).magenta());
            show_home(&config);
            return ExitCode::from(EXIT_USAGE);
        }
        Err(e) => {
            eprint!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("Failed to initialise logging: {e:#}");
    }

    match args.command {
        Some(Command::Init(init_args)) => {
            let result = tui::run(&config, init_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            match result {
                Ok(outcome) => {
                    tracing::debug!(dir = %outcome.project_dir.display(), "done");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::debug!(error = ?e, "scaffold failed");
                    ExitCode::from(e.exit_code())
                }
            }
        }
        None => {
            show_home(&config);
            ExitCode::SUCCESS
        }
    }
}
