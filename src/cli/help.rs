//! Verbosity utilities

/// Get the log filter for a verbosity count
///
/// Standup text goes to stdout, so the default stays quiet at `warn`.
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
