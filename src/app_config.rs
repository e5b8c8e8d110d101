use crate::domain::OfficeZone;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    office: OfficeZone,
    location: LocationSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(true))
            .add_source(File::with_name("config_local").required(false))
            .add_source(Environment::with_prefix("ATTENDANCE").separator("__").try_parsing(true));

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self, AppConfigError> {
        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    pub fn office(&self) -> &OfficeZone {
        &self.office
    }

    pub fn location(&self) -> &LocationSettings {
        &self.location
    }
}

/// How hard to try to get a device location before falling back to "location unavailable".
#[derive(Clone, Debug, Deserialize)]
pub struct LocationSettings {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    max_attempts: usize,
}

impl LocationSettings {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("unable to load configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
pub struct LocationSettingsBuilder {
    settings: LocationSettings,
}

#[cfg(test)]
impl LocationSettingsBuilder {
    pub fn new() -> Self {
        LocationSettingsBuilder {
            settings: LocationSettings {
                timeout: Duration::from_millis(200),
                retry_ms: 1,
                retry_max_delay_ms: 5,
                max_attempts: 3,
            },
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.settings.max_attempts = max_attempts;
        self
    }

    pub fn build(self) -> LocationSettings {
        self.settings
    }
}
