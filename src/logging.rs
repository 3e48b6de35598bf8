//! File logging for the binary. The library only emits through the `log` facade;
//! writing to the terminal would tear the TUI, so records go to a file.

use std::fs::{self, File};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Install a `WriteLogger` that appends records at `level` or above to `path`.
/// Parent directories are created as needed.
pub fn init_file_logger(path: &Path, level: log::LevelFilter) -> Result<(), LoggingError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = File::options().create(true).append(true).open(path)?;
    simplelog::WriteLogger::init(level, config, file)?;
    log::info!("blackjack {} logging to {}", crate::VERSION, path.display());
    Ok(())
}
