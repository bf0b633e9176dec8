use std::path::PathBuf;

use clap::Parser;

/// WebShell: hosts a website in a native WebView behind a navigation and
/// message gatekeeper.
#[derive(Parser, Debug)]
#[command(name = "webshell", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start URL override. Must pass the navigation allow-list.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Log filter directive override (e.g. `webshell=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["webshell"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.url.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn parses_all_overrides() {
        let args = Args::try_parse_from([
            "webshell",
            "--config",
            "/tmp/shell.toml",
            "-u",
            "https://api.example.com/app",
            "--log-level",
            "webshell=debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/shell.toml")));
        assert_eq!(args.url.as_deref(), Some("https://api.example.com/app"));
        assert_eq!(args.log_level.as_deref(), Some("webshell=debug"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["webshell", "--insecure"]).is_err());
    }
}
