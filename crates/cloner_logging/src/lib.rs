#![deny(missing_docs)]
//! Shared logging utilities for the cloner workspace.
//!
//! Every `cloner_*` macro logs under [`TARGET`] so that loggers can keep the
//! application's own records and drop third-party noise (hyper, rustls, ...).

/// Log target shared by all `cloner_*` macros.
pub const TARGET: &str = "cloner";

/// Logs a trace-level message under the cloner target.
#[macro_export]
macro_rules! cloner_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the cloner target.
#[macro_export]
macro_rules! cloner_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the cloner target.
#[macro_export]
macro_rules! cloner_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the cloner target.
#[macro_export]
macro_rules! cloner_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the cloner target.
#[macro_export]
macro_rules! cloner_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Builds the simplelog configuration used by every cloner logger:
/// RFC 3339 timestamps and only records emitted under [`TARGET`].
pub fn logger_config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .add_filter_allow_str(TARGET)
        .build()
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from every test; only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = TermLogger::init(level, logger_config(), TerminalMode::Mixed, ColorChoice::Auto);
}
