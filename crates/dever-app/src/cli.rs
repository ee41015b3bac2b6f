use std::path::PathBuf;

use clap::Parser;

/// Default tracing directive when neither the CLI nor the config set one.
pub const DEFAULT_LOG_DIRECTIVE: &str = "dever=info";

/// Dev-ER desktop host: main UI window with embedded workspace views.
#[derive(Parser, Debug)]
#[command(name = "dever", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. `debug`, `dever_webview=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Pick the tracing directive: CLI flag, then config, then the default.
pub fn log_directive<'a>(cli: Option<&'a str>, config: Option<&'a str>) -> &'a str {
    cli.filter(|s| !s.trim().is_empty())
        .or(config.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins() {
        assert_eq!(log_directive(Some("debug"), Some("dever=warn")), "debug");
    }

    #[test]
    fn config_used_without_flag() {
        assert_eq!(log_directive(None, Some("dever=warn")), "dever=warn");
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(log_directive(Some(" "), None), DEFAULT_LOG_DIRECTIVE);
        assert_eq!(log_directive(None, Some("")), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from(["dever", "--config", "/tmp/d.toml", "--log-level", "trace"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/d.toml")));
        assert_eq!(args.log_level.as_deref(), Some("trace"));
    }
}
