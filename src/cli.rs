use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "sspad",
    version,
    about = "Discovers stack set templates and their deployment metadata",
    long_about = "sspad scans a directory for stack set templates and reports each one's \
                  scope (global or regional) and account/region blacklists."
)]
pub struct Cli {
    /// Directory containing stack set templates (overrides the config file)
    pub directory: Option<PathBuf>,

    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suffix identifying template files
    #[arg(long, default_value = ".template")]
    pub suffix: String,

    /// Suffix of the marker file flagging a stack set as global
    #[arg(long, default_value = ".global")]
    pub global_suffix: String,

    /// Suffix of the per-stack blacklist file
    #[arg(long, default_value = ".blacklist")]
    pub blacklist_suffix: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
