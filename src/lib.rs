mod catalog_commands;
pub mod codec;
pub mod error;
mod labels;
pub mod models;
pub mod segmentation;
pub mod series;
pub mod session;
pub mod settings;
pub mod stats;
mod utils;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use error::LabelError;
pub use labels::commands::LabelingInput;
pub use session::LabelingSession;
use settings::{Settings, SettingsStore};

#[derive(Parser, Debug)]
#[command(name = "tslabel", version, about = "Label time ranges of a series and export per-sample labels")]
pub struct Cli {
    /// Settings file (JSON); defaults apply when absent
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print min, max and standard deviation of a series
    Stats { series: PathBuf },
    /// List the subsystems of a catalog
    Subsystems { catalog: PathBuf },
    /// List the tags of one subsystem
    Tags { catalog: PathBuf, subsystem: String },
    /// List segments after applying selections and removals
    Segments(LabelingArgs),
    /// Print the chart feed as JSON
    Chart(LabelingArgs),
    /// Write the series with per-sample labels
    Export {
        #[command(flatten)]
        labeling: LabelingArgs,
        /// Tag name used for the default output file name
        #[arg(long)]
        tag: Option<String>,
        /// Output path (`-` for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a settings file with default values
    InitSettings { path: PathBuf },
}

#[derive(clap::Args, Debug)]
struct LabelingArgs {
    /// Series CSV (timestamp, value)
    #[arg(long)]
    series: PathBuf,
    /// JSON array of {start, end, label}
    #[arg(long)]
    selections: Option<PathBuf>,
    /// Remove the segment at this index (repeatable, applied in order)
    #[arg(long)]
    remove: Vec<usize>,
}

impl From<LabelingArgs> for LabelingInput {
    fn from(args: LabelingArgs) -> Self {
        Self {
            series: args.series,
            selections: args.selections,
            remove: args.remove,
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Ok(SettingsStore::new(path.to_path_buf())?.settings().clone()),
        None => Ok(Settings::default()),
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.settings.as_deref())?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Stats { series: path } => series::commands::stats(&settings, &path, &mut stdout),
        Command::Subsystems { catalog } => catalog_commands::list_subsystems(&catalog, &mut stdout),
        Command::Tags { catalog, subsystem } => {
            catalog_commands::list_tags(&catalog, &subsystem, &mut stdout)
        }
        Command::Segments(args) => {
            labels::commands::list_segments(&settings, &args.into(), &mut stdout)
        }
        Command::Chart(args) => labels::commands::chart(&settings, &args.into(), &mut stdout),
        Command::Export {
            labeling,
            tag,
            output,
        } => {
            let written = labels::commands::export(
                &settings,
                &labeling.into(),
                tag.as_deref(),
                output.as_deref(),
                &mut stdout,
            )?;
            if let Some(path) = written {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }
        Command::InitSettings { path } => {
            let mut store = SettingsStore::new(path)?;
            store.update(Settings::default())
        }
    }
}

/// Logger at Info, with `filters` (RUST_LOG syntax) taking precedence.
fn log_builder(filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }
    builder
}

pub fn run() -> Result<()> {
    let filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    log_builder(filters.as_deref()).init();

    execute(Cli::parse())
}
