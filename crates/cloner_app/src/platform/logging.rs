//! Platform logging initialization for the cloner app.
//!
//! The terminal belongs to the TUI, so logs go to `./cloner.log` in the
//! current working directory.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::WriteLogger;

pub const LOG_FILE: &str = "cloner.log";

/// Starts the file logger. A missing log file is reported once on stderr
/// and otherwise ignored.
pub fn initialize(path: &Path) {
    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, cloner_logging::logger_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
        }
    }
}
