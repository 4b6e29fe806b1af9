// Configuration module entry point
// Loads helper settings from an optional file, the environment and defaults

mod types;

pub use types::{Config, LoggingConfig, ResponseConfig};

/// Environment variable prefix, e.g. `ROUTE_KIT_LOGGING__LEVEL=debug`
const ENV_PREFIX: &str = "ROUTE_KIT";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; `ROUTE_KIT_*` variables override it.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("responses.pretty_json", false)?
            .set_default("responses.content_type", "application/json")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from an embedded TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
