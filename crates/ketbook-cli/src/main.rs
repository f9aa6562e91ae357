//! ketbook Command-Line Interface
//!
//! Renders binary assets into the JSON display bundles a notebook host
//! embeds as rich output.
//!
//! ```text
//! $ ketbook render --input circuit.png
//! {"image/png":"iVBORw0KGgoAAAANSUhEUgAA..."}
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

mod commands;
mod config;
mod logging;

use commands::{render, version};
use config::Config;
use logging::LogSettings;

/// ketbook - inline notebook output for quantum workflows
#[derive(Parser)]
#[command(name = "ketbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML); defaults to ~/.ketbook/config.yaml if present
    #[arg(long, global = true, env = "KETBOOK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a file as a display bundle ({"image/png": <base64>})
    Render {
        /// Input file (PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON bundle
        #[arg(long)]
        pretty: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    logging::init(&LogSettings::resolve(
        config.logging.level.as_deref(),
        cli.verbose,
        config.log_format()?,
    ));
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Render {
            input,
            output,
            pretty,
        } => render::execute(&input, output.as_deref(), pretty || config.output.pretty),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}
