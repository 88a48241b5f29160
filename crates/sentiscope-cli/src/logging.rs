//! Tracing subscriber setup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Modules that are only interesting when something is wrong.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls", "tower_http"];

/// Build the filter: `RUST_LOG` wins, otherwise `debug` with `--verbose`
/// and `warn` without, with noisy HTTP crates held at warn.
fn build_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let base = if verbose { "debug" } else { "warn" };
    let mut directives = vec![base.to_string()];
    directives.extend(NOISY_MODULES.iter().map(|m| format!("{}=warn", m)));
    EnvFilter::new(directives.join(","))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `--json` output.
pub fn init(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_ansi(true);

    // Tests call this more than once; the first subscriber stays installed.
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init();
}
