use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerQueryError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, ContainerQueryError>;

// Helper conversions
impl From<config::ConfigError> for ContainerQueryError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
