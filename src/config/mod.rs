mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;

    // The gateway credential can be injected through the environment,
    // taking precedence over the file.
    if let Ok(key) = env::var("GATEWAY_API_KEY") {
        if !key.is_empty() {
            config.gateway.api_key = key;
        }
    }

    Ok(config)
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
