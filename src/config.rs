//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::application::Tab;

/// Log workouts and track progress from the terminal.
#[derive(Debug, Parser)]
#[command(name = "acefit", version, about)]
pub struct Cli {
    /// Write logs to this file; logging is off when omitted
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Tab shown at startup
    #[arg(long, value_enum, default_value_t = Tab::Log)]
    pub tab: Tab,
}
