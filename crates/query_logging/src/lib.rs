#![deny(missing_docs)]
//! Logging macros shared by the query menu crates.
//!
//! Every crate logs through the `query_*` macros so the backend can be swapped
//! in one place. Binaries pick the backend; tests call
//! [`initialize_for_tests`].

/// Target used for records emitted from the query pipeline.
pub const LOG_TARGET: &str = "query_menu";

/// Logs a trace-level message.
#[macro_export]
macro_rules! query_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message.
#[macro_export]
macro_rules! query_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an info-level message.
#[macro_export]
macro_rules! query_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! query_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an error-level message.
#[macro_export]
macro_rules! query_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Installs a terminal logger for tests.
///
/// Safe to call from every test: if a logger is already installed the call
/// does nothing.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
