//! Bot configuration types.

use serde::{Deserialize, Serialize};

/// Top-level bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Path to the airport reference dataset
    /// (ourairports.com CSV export, e.g. from
    /// https://ourairports.com/countries/CA/airports.csv).
    #[serde(default = "default_airport_data_path")]
    pub airport_data_path: String,

    /// Search radius in nautical miles used when none is given on the
    /// command line.
    #[serde(default = "default_radius_nm")]
    pub radius_nm: u32,

    /// Remote API parameters.
    #[serde(default)]
    pub api: ApiConfig,
}

/// NAV CANADA API parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Weather-advisory endpoint (no query string).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Defaults ──────────────────────────────────────────────────────────

fn default_airport_data_path() -> String {
    "ca-airports.csv".into()
}

fn default_radius_nm() -> u32 {
    25
}

fn default_base_url() -> String {
    "https://plan.navcanada.ca/weather/api/alpha/".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            airport_data_path: default_airport_data_path(),
            radius_nm: default_radius_nm(),
            api: ApiConfig::default(),
        }
    }
}
