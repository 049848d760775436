//! Log setup for the CLI. Stdout carries the range itself, so every log line
//! goes to stderr.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Workspace crates whose events are shown; everything else stays off.
const CRATE_TARGETS: &[&str] = &["daterange", "daterange_calendar", "daterange_range"];

/// Initializes tracing for `-v` repeated `verbosity` times.
///
/// No flag shows warnings only; each `-v` raises the level one step, up to
/// trace at `-vvv`. `RUST_LOG` replaces the computed filter when set.
/// Targets are printed from `-vv` on, where events from the calendar and
/// range crates interleave.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| crate_filter(verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbosity >= 2)
        .without_time()
        .init();
}

fn level_name(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(verbosity: u8) -> Vec<String> {
    let level = level_name(verbosity);
    CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect()
}

fn crate_filter(verbosity: u8) -> EnvFilter {
    directives(verbosity)
        .iter()
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(EnvFilter::new("off"), EnvFilter::add_directive)
}
