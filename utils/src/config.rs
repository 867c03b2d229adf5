use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::{disk_storage::DiskStorageInterface, stock::Query};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub backend_url: String,
    pub default_symbol: String,
    pub default_start: String,
    pub default_end: String,
    /// Rows given to the chart, time axis included.
    pub chart_height: u16,
    /// Upper bound for the page width in columns.
    pub max_chart_width: u16,
    pub theme_name: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            default_symbol: "AAPL".to_string(),
            default_start: "2023-01-01".to_string(),
            default_end: "2024-01-01".to_string(),
            chart_height: 20,
            max_chart_width: 120,
            theme_name: "Dark".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DiskStorageInterface for Config {
    const FILE_NAME: &'static str = "config";
}

impl Config {
    /// The query the chart is mounted with before the user edits anything.
    pub fn default_query(&self) -> crate::Result<Query> {
        Query::parse(&self.default_symbol, &self.default_start, &self.default_end)
    }

    pub fn log_level(&self) -> crate::Result<Level> {
        parse_log_level(&self.log_level)
    }
}

pub fn parse_log_level(level: &str) -> crate::Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| crate::Error::InvalidLogLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("thong-config-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = temp_path("missing");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend_url, "http://localhost:5001");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "default_symbol = \"MSFT\"\nchart_height = 12\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_symbol, "MSFT");
        assert_eq!(config.chart_height, 12);
        assert_eq!(config.default_start, "2023-01-01");

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save");
        let config = Config {
            backend_url: "http://example.com:8080".to_string(),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn invalid_toml_is_reported() {
        let path = temp_path("invalid");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "chart_height = \"tall\"").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(crate::Error::TomlParsingFailed(_, _))));

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn default_query_is_valid() {
        let query = Config::default().default_query().unwrap();
        assert_eq!(query.symbol(), "AAPL");
        assert_eq!(query.start_str(), "2023-01-01");
        assert_eq!(query.end_str(), "2024-01-01");
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert!(matches!(
            parse_log_level("loud"),
            Err(crate::Error::InvalidLogLevel(_))
        ));
    }
}
