use std::path::PathBuf;

use clap::Parser;

use crate::model::FilterMode;

#[derive(Parser, Debug)]
#[command(name = "tl", about = concat!("[ ] tasklist v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/tasklist/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Filter to start with: all, completed or pending
    #[arg(short, long)]
    pub filter: Option<FilterMode>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
