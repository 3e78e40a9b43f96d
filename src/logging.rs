// File: ./src/logging.rs
use anyhow::Result;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, SimpleLogger, TermLogger, TerminalMode};
use std::str::FromStr;

/// Parses a level name ("debug", "info", ...), defaulting to Info.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

/// Installs the global logger on stderr. Falls back to a plain logger when no
/// terminal is attached.
pub fn init(level: &str) -> Result<()> {
    let filter = parse_level(level);
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Debug)
        .build();

    if TermLogger::init(filter, config.clone(), TerminalMode::Stderr, ColorChoice::Auto).is_ok() {
        return Ok(());
    }
    SimpleLogger::init(filter, config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))
}
