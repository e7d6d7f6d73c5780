//! stencil CLI - create projects from a local template library

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stencil_core::tui::{self, BuildArgs};
use stencil_core::Config;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
const LOG_ENV: &str = "STENCIL_LOG";

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(about = "Create new projects from templates in a local library")]
#[command(version)]
pub struct Args {
    /// Template library to use instead of the configured one
    #[arg(long = "template-dir", global = true)]
    pub template_dir: Option<PathBuf>,

    /// Confirm the project path and show extra information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from a template (the default)
    Build(CliBuildArgs),
    /// List all available templates
    List,
    /// Print the version number of stencil
    Version,
}

#[derive(Parser, Debug, Default)]
pub struct CliBuildArgs {
    /// Template to use, by name or directory name, instead of the menu
    #[arg(short, long)]
    pub template: Option<String>,
}

impl From<CliBuildArgs> for BuildArgs {
    fn from(args: CliBuildArgs) -> Self {
        BuildArgs {
            template: args.template,
        }
    }
}

fn main() -> Result<()> {
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

    init_logging();

    let Args {
        template_dir,
        verbose,
        command,
    } = Args::parse();
    let command = command.unwrap_or_else(|| Command::Build(CliBuildArgs::default()));
    tracing::debug!(?command, "starting");

    match command {
        Command::Version => {
            println!("stencil project creator v{}", CLI_VERSION);
            Ok(())
        }
        Command::List => {
            let config = load_config(template_dir, verbose)?;
            tui::list(&config)
        }
        Command::Build(build_args) => {
            let config = load_config(template_dir, verbose)?;
            let result = tui::run(&config, build_args.into(), CLI_VERSION).map(|_| ());

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

/// Load the configuration once and apply command-line overrides
fn load_config(template_dir: Option<PathBuf>, verbose: bool) -> Result<Config> {
    let loaded = Config::load().context("Failed to load configuration")?;
    if loaded.initialized {
        tui::print_setup_message(&loaded);
    }

    let mut config = loaded.config;
    if let Some(dir) = template_dir {
        config.templates_dir = dir;
    }
    config.verbose |= verbose;
    Ok(config)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
