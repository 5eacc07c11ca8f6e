//! Command-line front end for the GiveTransparent donation core
//!
//! The binary is a thin wrapper: [`cli::build_cli`] defines the arguments,
//! [`cli::run`] dispatches to [`commands`], which return the text to print.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{build_cli, run};
pub use config::CliConfig;

/// Install the global `tracing` subscriber
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `warn`.
/// With `json`, events are written as one JSON object per line.
pub fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
