use clap::Parser;
use sspad::{
    Cli, Config, JsonReporter, OutputFormat, Reporter, Result, SspadError, Suffixes,
    TerminalReporter, find_all,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "sspad=debug" } else { "sspad=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Some(Config::from_file(path)?),
        None => None,
    };

    let directory = cli
        .directory
        .clone()
        .or_else(|| config.as_ref().map(|c| c.stackset_template_dir.clone()))
        .ok_or(SspadError::NoTemplateDir)?;

    let suffixes = Suffixes::new()
        .with_template(&cli.suffix)
        .with_global(&cli.global_suffix)
        .with_blacklist(&cli.blacklist_suffix);

    let stack_sets = find_all(&directory, &suffixes)?.collect::<Result<Vec<_>>>()?;
    debug!(count = stack_sets.len(), dir = %directory.display(), "Discovery complete");

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(cli.verbose)),
        OutputFormat::Json => Box::new(JsonReporter),
    };
    reporter.report(&stack_sets)
}
