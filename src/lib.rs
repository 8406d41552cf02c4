pub mod cli;
pub mod config;
pub mod error;
pub mod regions;
pub mod reporter;
pub mod stackset;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{Result, SspadError};
pub use regions::{RegionSource, select_regions};
pub use reporter::{JsonReporter, Reporter, TerminalReporter};
pub use stackset::{Discovery, StackSet, Suffixes, find_all};
