#![deny(missing_docs)]
//! Shared logging utilities for the console login workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! a helper for keeping credentials out of log lines, and a minimal test
//! initializer for the global logger.

/// Number of leading characters of a secret that may appear in logs.
const MASK_VISIBLE_PREFIX: usize = 4;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Masks a credential for display in logs and `Debug` output.
///
/// Keeps at most the first four characters and replaces the rest with `*`.
/// Short values are masked completely; empty values render as `<empty>`.
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len == 0 {
        return "<empty>".to_string();
    }
    if len <= MASK_VISIBLE_PREFIX * 2 {
        return "*".repeat(len);
    }
    let prefix: String = secret.chars().take(MASK_VISIBLE_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(len - MASK_VISIBLE_PREFIX))
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::mask_secret;

    #[test]
    fn empty_secret_is_marked() {
        assert_eq!(mask_secret(""), "<empty>");
    }

    #[test]
    fn short_secret_is_fully_masked() {
        assert_eq!(mask_secret("SK1"), "***");
        assert_eq!(mask_secret("12345678"), "********");
    }

    #[test]
    fn long_secret_keeps_prefix() {
        assert_eq!(mask_secret("AKIDabcdefgh"), "AKID********");
    }

    #[test]
    fn multibyte_secret_is_counted_by_chars() {
        assert_eq!(mask_secret("密钥密钥密钥密钥密钥"), "密钥密钥******");
    }
}
