use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    /// Agency terminals a search may present itself as; one is drawn per request.
    pub terminal_ids: Vec<String>,
    pub user_agent: String,
    pub origin: String,
    pub referer: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://costamar.com.pe/vuelos/api/flights/search".to_string(),
            timeout_seconds: 60,
            terminal_ids: vec!["0100140692".to_string(), "0536830376".to_string()],
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            origin: "https://booking.clickandbook.com".to_string(),
            referer: "https://booking.clickandbook.com/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub top: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            top: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoSearch {
    pub origin: String,
    pub destination: String,
    pub depart_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

fn default_adults() -> u32 {
    1
}

impl DemoSearch {
    fn new(origin: &str, destination: &str, depart: &str, ret: Option<&str>, adults: u32) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            depart_date: depart.to_string(),
            return_date: ret.map(str::to_string),
            adults,
            children: 0,
            infants: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub top: usize,
    pub csv_path: String,
    pub delay_min_seconds: f64,
    pub delay_max_seconds: f64,
    pub demo_searches: Vec<DemoSearch>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            top: 5,
            csv_path: "vuelos_resultados.csv".to_string(),
            delay_min_seconds: 1.0,
            delay_max_seconds: 2.0,
            demo_searches: vec![
                DemoSearch::new("LIM", "CUZ", "20260220", Some("20260223"), 1),
                DemoSearch::new("LIM", "AQP", "20260225", Some("20260228"), 1),
                DemoSearch::new("LIM", "CUZ", "20260218", None, 1),
                DemoSearch::new("LIM", "PIU", "20260222", Some("20260224"), 1),
                DemoSearch::new("LIM", "IQT", "20260301", Some("20260305"), 2),
                DemoSearch::new("CUZ", "LIM", "20260226", Some("20260228"), 1),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub cli: CliConfig,
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.terminal_ids.is_empty() {
            return Err(ConfigError::Invalid("provider.terminal_ids must not be empty".into()));
        }
        let (min, max) = (self.cli.delay_min_seconds, self.cli.delay_max_seconds);
        if !(0.0..=max).contains(&min) {
            return Err(ConfigError::Invalid(format!(
                "cli delay range {}..{} is not valid",
                min, max
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: &str) -> Result<AppConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", Path::new(path).display());
            Ok(AppConfig::default())
        }
        other => other,
    }
}
