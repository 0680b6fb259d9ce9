//! CLI for dwimgs: `dwimgs [-v] <URLS_FILE> <DEST_DIR>`.

mod download;
pub mod output;

use anyhow::Result;
use clap::Parser;
use dwimgs_core::config::{self, DwimgsConfig};
use std::path::PathBuf;

pub use download::run_download;

/// Download every image listed in a text file into a directory.
#[derive(Debug, Parser)]
#[command(name = "dwimgs", version)]
#[command(about = "Bulk download images from a text file of URLs", long_about = None)]
pub struct Cli {
    /// A text file that has image URLs on separate lines.
    pub urls_file: PathBuf,

    /// The destination directory where the images will be saved. Created if it doesn't exist.
    pub dest_dir: PathBuf,

    /// Increase the verbosity of the terminal output.
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    let cfg = match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("could not load config, using defaults: {:#}", e);
            DwimgsConfig::default()
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);

    run_download(&cfg, &cli.urls_file, &cli.dest_dir, cli.verbose)?;
    Ok(())
}
