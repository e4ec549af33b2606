//! Tracing subscriber setup

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::args::GlobalOpts;

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init(global: &GlobalOpts) {
    let level = if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. from tests) is harmless, so the error is ignored
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
