/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed console configuration
[POS]:    Configuration layer - service endpoint and polling setup
[UPDATE]: When adding new configuration options
*/

use obelisk_adapter::ClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the task console
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Task service endpoint settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Status polling settings
    #[serde(default)]
    pub poll: PollConfig,
}

/// Task service endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL of the task service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Status polling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// Interval between status queries in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    1500
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll.interval_ms)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.service.timeout_secs),
            ..ClientConfig::default()
        }
    }
}
