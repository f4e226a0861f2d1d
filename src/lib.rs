use std::num::NonZeroU32;

use chrono::Weekday;
use config::{Config, ConfigError, FileFormat};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;

#[derive(Clone, Debug, Deserialize)]
pub struct BookingConfig {
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logger: Logger,
}

impl BookingConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("booking.toml"))
            .add_source(
                config::Environment::with_prefix("BOOKING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<BookingConfig>()
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize::<BookingConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegistryConfig {
    pub capacity_per_hour: NonZeroU32,
    #[serde(default = "default_restricted_weekday")]
    pub restricted_weekday: Weekday,
}

fn default_restricted_weekday() -> Weekday {
    Weekday::Sun
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Logger {
    #[serde(default)]
    pub level: Level,
}

impl Logger {
    /// Installs a global `fmt` subscriber. Fails if one is already set.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::from(&self.level))
            .try_init()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub enum Level {
    TRACE,
    DEBUG,
    #[default]
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
