use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://environment.data.gov.uk/flood-monitoring";
pub const DEFAULT_STATION_ID: &str = "296705";
pub const DEFAULT_LIMIT: u32 = 2000;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 14;
pub const DEFAULT_ELEMENT_ID: &str = "fieldChart";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub station: StationSettings,
    pub chart: ChartSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StationSettings {
    pub base_url: String,
    pub station_id: String,
    pub limit: u32,
    pub lookback_days: u32,
}

impl Default for StationSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            station_id: DEFAULT_STATION_ID.to_string(),
            limit: DEFAULT_LIMIT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartSettings {
    pub element_id: String,
    pub output: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            output: "rainfall.html".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub enabled: bool,
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Load settings from `config/rainfall.*` (optional) and `RAINFALL__*` environment variables
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/rainfall").required(false))
        .add_source(
            config::Environment::with_prefix("RAINFALL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    #[test]
    fn test_defaults_without_sources() {
        let config: AppConfig = Config::builder().build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.station.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.station.station_id, "296705");
        assert_eq!(config.station.limit, 2000);
        assert_eq!(config.station.lookback_days, 14);
        assert_eq!(config.chart.element_id, "fieldChart");
        assert!(!config.server.enabled);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let toml = r#"
            [station]
            lookback_days = 7

            [server]
            enabled = true
            addr = "127.0.0.1:9000"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.station.lookback_days, 7);
        assert_eq!(config.station.limit, 2000);
        assert!(config.server.enabled);
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.chart.output, "rainfall.html");
    }
}
