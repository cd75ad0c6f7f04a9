// File: ./src/bin/gui.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tasklet::config::Config;
use tasklet::logging::init_logger;
use tasklet::{gui, storage};

/// A tiny borderless, always-on-top to-do list.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to the per-user config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Task file to show at startup
    #[arg(short, long)]
    open: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    init_logger(args.log_level.as_deref().unwrap_or(&config.log.level))?;

    let tasks = match args.open.as_deref() {
        Some(path) => storage::load(path).unwrap_or_else(|e| {
            log::error!("Error loading tasks: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    };
    log::info!("starting with {} tasks", tasks.len());

    gui::run(config, tasks)
}
