use thiserror::Error;

/// Environment-sourced settings for the external backend platform.
///
/// Loaded once at startup and injected into the adapters; business logic
/// never reads the environment directly.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL of the platform hosting the auth and REST APIs.
    pub platform_url: String,
    /// Service role key sent with every outbound call.
    pub service_key: String,
}

#[derive(Debug, Error)]
#[error("Missing configuration variable {name}: {source}")]
pub struct ConfigError {
    name: &'static str,
    #[source]
    source: dotenvy::Error,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            platform_url: require("PLATFORM_URL")?,
            service_key: require("PLATFORM_SERVICE_KEY")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    dotenvy::var(name).map_err(|source| ConfigError { name, source })
}
