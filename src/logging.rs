// File: ./src/logging.rs
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::io::Write;
use std::str::FromStr;

/// Sends log records to stderr. `RUST_LOG`, when set, refines `level`.
pub fn init_logger(level: &str) -> Result<()> {
    let level =
        LevelFilter::from_str(level).with_context(|| format!("invalid log level '{}'", level))?;

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init()
        .context("installing logger")?;
    Ok(())
}
