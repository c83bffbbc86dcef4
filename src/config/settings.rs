use crate::providers::calendar::DEFAULT_SOURCES;
use crate::providers::social_media::DEFAULT_PLATFORMS;
use config::{Config, ConfigError, Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub social_media: SocialMediaConfig,
    pub calendar: CalendarConfig,
    pub dispatch: DispatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMediaConfig {
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub batch_concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

const DEFAULT_BATCH_CONCURRENCY: usize = 4;
const DEFAULT_LOG_LEVEL: &str = "warn";

impl Settings {
    /// Load defaults, then `config/{CONFIG_ENV}` if present, then `APP__*` variables
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());
        Self::load(File::with_name(&format!("config/{}", config_env)).required(false))
    }

    /// Like `new`, but a malformed source falls back to built-in defaults
    ///
    /// The load error is handed back so the caller can report it once
    /// logging is up.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        Self::or_default(Self::new())
    }

    pub(crate) fn or_default(loaded: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match loaded {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load defaults overlaid with a specific file, then `APP__*` variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(File::from(path.as_ref()))
    }

    fn load<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .set_default("social_media.platforms", DEFAULT_PLATFORMS.to_vec())?
            .set_default("calendar.sources", DEFAULT_SOURCES.to_vec())?
            .set_default("dispatch.batch_concurrency", DEFAULT_BATCH_CONCURRENCY as u64)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("social_media.platforms")
                    .with_list_parse_key("calendar.sources")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            social_media: SocialMediaConfig {
                platforms: DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
            },
            calendar: CalendarConfig {
                sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            },
            dispatch: DispatchConfig {
                batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            },
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}
