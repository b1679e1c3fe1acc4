//! Labeled status lines and diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// ANSI color codes for status lines.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "GHI_LOG";

/// Print an error message.
pub fn print_error(msg: &str) {
    println!("{RED}{BOLD}Error:{RESET} {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("{YELLOW}{BOLD}Warning:{RESET} {}", msg);
}

/// Build the log filter: `GHI_LOG` when set, otherwise `warn`, or `ghi=debug` when verbose.
pub fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("ghi=debug");
    }
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the stderr `tracing` subscriber.
pub fn init_logging(verbose: bool) {
    let env = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
