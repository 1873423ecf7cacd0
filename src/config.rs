use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_SEARCH_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub endpoints: EndpointsConfig,
    pub http: HttpConfig,
}

/// Base URLs of the upstream services, without trailing path
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    pub geocoding: String,
    pub weather: String,
    pub search: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            geocoding: DEFAULT_GEOCODING_URL.to_string(),
            weather: DEFAULT_WEATHER_URL.to_string(),
            search: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

impl EndpointsConfig {
    /// Point every service at one base URL (mock servers, local proxies)
    pub fn all_at(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            geocoding: base_url.clone(),
            weather: base_url.clone(),
            search: base_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout; `None` waits indefinitely
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            endpoints: EndpointsConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

/// Outcome of resolving the config file
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    /// Candidate files that exist but could not be used, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

impl Config {
    /// Search locations, most specific first: `<config_dir>/calltools/calltools.yml`, then `./calltools.yml`
    pub fn candidate_paths() -> Vec<PathBuf> {
        let file_name = format!("{}.yml", env!("CARGO_PKG_NAME"));
        let mut candidates = Vec::with_capacity(2);
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(env!("CARGO_PKG_NAME")).join(&file_name));
        }
        candidates.push(PathBuf::from(file_name));
        candidates
    }

    /// Resolve configuration: an explicit path must load, otherwise the first usable candidate wins
    pub fn load(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
        match config_path {
            Some(path) => {
                let config =
                    Self::load_from_file(path).with_context(|| format!("Failed to load config from {}", path.display()))?;
                Ok(LoadedConfig {
                    config,
                    source: Some(path.clone()),
                    skipped: Vec::new(),
                })
            }
            None => Ok(Self::load_from_candidates(&Self::candidate_paths())),
        }
    }

    /// First candidate that parses; broken ones are reported in `skipped`
    pub fn load_from_candidates(candidates: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push((path.clone(), format!("{:#}", e))),
            }
        }

        LoadedConfig {
            config: Self::default(),
            source: None,
            skipped,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
