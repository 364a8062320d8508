/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - backend endpoint and account setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use std::time::Duration;

use depay_adapter::ClientConfig;

/// Top-level configuration for the DePay client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Backend API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Optional stored credentials for non-interactive login
    #[serde(default)]
    pub account: Option<AccountConfig>,
}

/// Backend API endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the DePay backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Stored login credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountConfig {
    /// Wallet email address
    pub email: String,
    /// Wallet password
    pub password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Transport settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.api.timeout_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }
}
