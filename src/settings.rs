//! Names under which the plugin registers itself.
//!
//! Defaults are `@` for the variant and `container` for the utility. Both can
//! be overridden through `CONTAINER_QUERIES_VARIANT` and
//! `CONTAINER_QUERIES_UTILITY`, or by a host-built [`Config`].

use config::{Config, ConfigError, Environment};

use crate::error::{ContainerQueryError, Result};

pub const DEFAULT_VARIANT: &str = "@";
pub const DEFAULT_UTILITY: &str = "container";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub variant: String,
    pub utility: String,
}

fn name(config: &Config, key: &str, default: &str) -> Result<String> {
    match config.get_string(key) {
        Ok(name) => Ok(name),
        Err(ConfigError::NotFound(_)) => Ok(default.to_string()),
        Err(e) => Err(e.into()),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { variant: DEFAULT_VARIANT.into(), utility: DEFAULT_UTILITY.into() }
    }
}

impl Settings {
    /// Defaults overlaid with `CONTAINER_QUERIES_*` environment variables.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("variant", DEFAULT_VARIANT)?
            .set_default("utility", DEFAULT_UTILITY)?
            .add_source(Environment::with_prefix("CONTAINER_QUERIES"))
            .build()?;
        Self::from_config(&config)
    }
    /// Reads `variant` and `utility` from a host configuration, falling back
    /// to the defaults for whichever is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = Self {
            variant: name(config, "variant", DEFAULT_VARIANT)?,
            utility: name(config, "utility", DEFAULT_UTILITY)?,
        };
        settings.validate()?;
        Ok(settings)
    }
    fn validate(&self) -> Result<()> {
        for (key, name) in [("variant", &self.variant), ("utility", &self.utility)] {
            if name.is_empty() {
                return Err(ContainerQueryError::InvalidSetting { key: key.into(), message: "must not be empty".into() });
            }
            if name.chars().any(char::is_whitespace) {
                return Err(ContainerQueryError::InvalidSetting { key: key.into(), message: format!("'{name}' contains whitespace") });
            }
        }
        Ok(())
    }
}
