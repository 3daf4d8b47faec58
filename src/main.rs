// Deploy Picker
// Lists deploy packages and targets and the files each package selects

// IMPORTS ------------------>>

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use deploy_picker::operations::quick_pick::{file_items, package_items, target_items};
use deploy_picker::{App, ExcludeMode, PackageFileFilter, QuickPickItem};

//--------------------------------------------------------<<

#[derive(Debug, Parser)]
#[command(name = "deploy-picker", version, about = "Pick deploy packages, targets and files")]
struct Cli {
    /// Workspace root (detected from DEPLOY_WORKSPACE or deploy.yaml when omitted)
    #[arg(long, env = "DEPLOY_WORKSPACE")]
    root: Option<PathBuf>,

    /// Deploy config file (defaults to deploy.yaml in the workspace root)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compare exclude entries against each file instead of the matched include
    #[arg(long)]
    strict_excludes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List enabled packages
    Packages,
    /// List deployment targets
    Targets,
    /// List the files a package would deploy
    Files {
        /// Package name (case-insensitive)
        package: String,
    },
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app = App::new(cli.root, cli.config)?;

    match cli.command {
        Command::Packages => print_items(&package_items(&app.deploy_config.packages)),
        Command::Targets => print_items(&target_items(&app.deploy_config.targets)),
        Command::Files { package } => {
            let filter = if cli.strict_excludes {
                PackageFileFilter::new(ExcludeMode::Candidate)
            } else {
                app.filter()
            };
            let files = app.package_files_with(&package, filter)?;
            print_items(&file_items(&files, Some(&app.workspace_root)));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "deploy_picker=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_items(items: &[QuickPickItem]) {
    for item in items {
        match &item.detail {
            Some(detail) => println!("{}\t{}\t{}", item.label, item.description, detail),
            None => println!("{}\t{}", item.label, item.description),
        }
    }
}
