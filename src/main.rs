use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quickadd::cli::args::{Cli, Commands};
use quickadd::cli::commands;
use quickadd::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    debug!(?format, labels = config.labels.len(), "configuration loaded");

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args, &config, format)?,
        Commands::Add(args) => commands::quick_add(&args, &config, format)?,
        Commands::Session(args) => {
            let stdin = io::stdin();
            commands::session(&args, &config, format, stdin.lock(), &mut io::stdout())?;
            return Ok(());
        },
        Commands::Labels => commands::labels(&config, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    println!("{output}");
    Ok(())
}
