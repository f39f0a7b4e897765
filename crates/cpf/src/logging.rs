//! Diagnostic logging to stderr.
//!
//! Library crates emit `tracing` events; the binary decides how much of it
//! reaches the terminal. `CPF_LOG` takes any `EnvFilter` directive and wins
//! over the `--verbose`/`--quiet` defaults.

use std::env;
use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

/// Environment variable read for the filter directive.
pub const LOG_ENV: &str = "CPF_LOG";

/// Directive used when `CPF_LOG` is unset or invalid.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Whether log lines may carry ANSI color codes.
///
/// `--no-color` and `NO_COLOR` switch them off, as does a stderr that is not
/// a terminal.
pub fn use_ansi(no_color: bool) -> bool {
    !no_color && env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cli.verbose, cli.quiet)));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(use_ansi(cli.no_color));

    // A subscriber may already be set when running under the test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
