//! Diagnostics on stderr.
//!
//! `barista-core` emits spans and events (one `debug` per decorator layer);
//! this module is the only place a subscriber is installed.  The filter is
//! built from `-v`/`-q` alone, so a bare run reads no environment and leaves
//! stderr empty on success.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

/// Crates whose events reach the subscriber.
const TARGETS: [&str; 2] = ["barista", "barista_core"];

/// Install the stderr subscriber.  Call once, before any event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(args.log_level()))
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))
}

fn filter_for(level: &str) -> EnvFilter {
    let directives = TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_only_our_crates() {
        let rendered = filter_for("debug").to_string().to_lowercase();
        assert!(rendered.contains("barista=debug"));
        assert!(rendered.contains("barista_core=debug"));
    }
}
