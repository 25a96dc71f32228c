//! Named container sizes supplied by the host configuration.

use std::collections::BTreeMap;

use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Read-only mapping from container names (`sm`, `md`, ...) to query values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    containers: BTreeMap<String, String>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }
    /// Reads the `containers` table of a host configuration.
    /// A configuration without that table yields an empty theme.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.get::<BTreeMap<String, String>>("containers") {
            Ok(containers) => Ok(Self { containers }),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.containers.insert(name.into(), value.into());
        self
    }
    pub fn get(&self, name: &str) -> Option<&str> {
        self.containers.get(name).map(String::as_str)
    }
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.containers
    }
    pub fn len(&self) -> usize {
        self.containers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Theme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { containers: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
