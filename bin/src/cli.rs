use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thong_utils::config::Config;

#[derive(Parser, Debug)]
#[clap(version, subcommand_required = false, arg_required_else_help = false)]
#[command(name = "thong", bin_name = "thong", version)]
pub struct Cli {
    /// Base URL of the price backend
    #[arg(long, env = "THONG_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Symbol shown at start
    #[arg(long)]
    pub symbol: Option<String>,

    /// First day shown at start (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day shown at start (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// File receiving the logs while the chart runs
    #[arg(long, default_value = thong_utils::log::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// One of trace, debug, info, warn, error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve synthetic daily bars for local development
    #[command(alias = "mock")]
    ServeMock {
        #[arg(long, env = "THONG_MOCK_PORT", default_value_t = thong_mock_api::DEFAULT_PORT)]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

impl Cli {
    /// Flags given on the command line win over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(backend_url) = &self.backend_url {
            config.backend_url = backend_url.clone();
        }
        if let Some(symbol) = &self.symbol {
            config.default_symbol = symbol.clone();
        }
        if let Some(start) = &self.start {
            config.default_start = start.clone();
        }
        if let Some(end) = &self.end {
            config.default_end = end.clone();
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "thong",
            "--backend-url",
            "http://prices.local:9000",
            "--symbol",
            "msft",
            "--end",
            "2023-06-30",
        ]);
        let mut config = Config::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.backend_url, "http://prices.local:9000");
        assert_eq!(config.default_symbol, "msft");
        assert_eq!(config.default_start, "2023-01-01");
        assert_eq!(config.default_end, "2023-06-30");
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn serve_mock_port() {
        let cli = Cli::parse_from(["thong", "serve-mock", "--port", "6001"]);

        assert!(matches!(
            cli.cmd,
            Some(Commands::ServeMock { port: 6001, .. })
        ));
    }
}
