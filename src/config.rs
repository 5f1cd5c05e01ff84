use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub indexer: IndexerConfig,
    pub wallet: WalletConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct IndexerConfig {
    pub base_url: String,
    pub api_user: Option<String>,
    pub api_password: Option<String>,
    pub timeout_secs: u64,
    pub poll_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Watch-only address to connect with at startup.
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".into(),
            api_user: None,
            api_password: None,
            timeout_secs: 10,
            poll_interval_secs: 30,
        }
    }
}

impl IndexerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Falls back to defaults if file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse {}: {e}, using defaults", path.display());
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.indexer.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.indexer.poll_interval_secs, 30);
        assert!(config.wallet.address.is_none());
        assert_eq!(config.ui.window_width, 1200.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            [indexer]
            base_url = "https://indexer.example"
            api_user = "farmer"

            [wallet]
            address = "0x1234567890abcdef1234567890abcdef12345678"
            "#,
        )
        .unwrap();
        assert_eq!(config.indexer.base_url, "https://indexer.example");
        assert_eq!(config.indexer.api_user.as_deref(), Some("farmer"));
        assert!(config.indexer.api_password.is_none());
        assert_eq!(config.indexer.timeout_secs, 10);
        assert!(config.wallet.address.is_some());
        assert_eq!(config.ui.window_height, 800.0);
    }

    #[test]
    fn zero_poll_interval_is_clamped() {
        let config = Config::parse("[indexer]\npoll_interval_secs = 0").unwrap();
        assert_eq!(config.indexer.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(Config::parse("[indexer\nbase_url = 1").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let config = Config::load("/definitely/not/here/farmstats.toml");
        assert_eq!(config.indexer.timeout_secs, 10);
    }
}
