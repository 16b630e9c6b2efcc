//! Configuration loader — merges env vars, .env file, and config.toml.

use common::config::BotConfig;
use common::Error;
use std::path::Path;

fn parse_positive_u32(raw: &str, env_name: &str) -> Result<u32, Error> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer > 0")))?;
    if parsed == 0 {
        return Err(Error::Config(format!("{env_name} must be an integer > 0")));
    }
    Ok(parsed)
}

fn parse_positive_u64(raw: &str, env_name: &str) -> Result<u64, Error> {
    let parsed = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer > 0")))?;
    if parsed == 0 {
        return Err(Error::Config(format!("{env_name} must be an integer > 0")));
    }
    Ok(parsed)
}

fn validate_config(config: &BotConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    if config.airport_data_path.trim().is_empty() {
        issues.push("airport_data_path must not be empty".into());
    }
    if config.radius_nm == 0 {
        issues.push("radius_nm must be > 0".into());
    }
    if config.api.base_url.trim().is_empty() {
        issues.push("api.base_url must not be empty".into());
    }
    if config.api.timeout_secs == 0 {
        issues.push("api.timeout_secs must be > 0".into());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Load bot configuration from environment and optional config file.
pub fn load_config() -> Result<BotConfig, Error> {
    // 1. Load .env file from project root or parent directories.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    // 2. Start with defaults.
    let mut config = BotConfig::default();

    // 3. Try loading config.toml if it exists.
    let config_path = Path::new("config.toml");
    if config_path.exists() {
        let contents = std::fs::read_to_string(config_path)
            .map_err(|e| Error::Config(format!("Failed to read config.toml: {}", e)))?;
        config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config.toml: {}", e)))?;
    }

    // 4. Override with environment variables (highest priority).
    if let Ok(path) = std::env::var("NOTAM_AIRPORT_DATA") {
        config.airport_data_path = path;
    }
    if let Ok(radius) = std::env::var("NOTAM_RADIUS_NM") {
        config.radius_nm = parse_positive_u32(&radius, "NOTAM_RADIUS_NM")?;
    }
    if let Ok(url) = std::env::var("NAVCANADA_BASE_URL") {
        config.api.base_url = url;
    }
    if let Ok(timeout) = std::env::var("NOTAM_TIMEOUT_SECS") {
        config.api.timeout_secs = parse_positive_u64(&timeout, "NOTAM_TIMEOUT_SECS")?;
    }

    validate_config(&config)?;

    Ok(config)
}
