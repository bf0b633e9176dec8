//! `tracing` subscriber setup.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use webshell_config::schema::LogLevel;

/// Pick the filter directive: the CLI override wins over the config level.
pub fn directive(cli_override: Option<&str>, level: LogLevel) -> String {
    cli_override
        .map(str::to_string)
        .unwrap_or_else(|| level.directive().to_string())
}

/// Build the filter from `RUST_LOG` plus `directive`.
///
/// An unparseable directive falls back to `info` for everything.
pub fn filter(directive: &str) -> EnvFilter {
    let base = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(d) => base.add_directive(d),
        Err(e) => {
            eprintln!("invalid log directive '{directive}': {e}; using info");
            base.add_directive(LevelFilter::INFO.into())
        }
    }
}

/// Install the global fmt subscriber.
pub fn init(directive: &str) {
    tracing_subscriber::fmt().with_env_filter(filter(directive)).init();
}
