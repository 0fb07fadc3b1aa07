use thiserror::Error;

/// Error raised when a derivation cycle cannot be completed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("insufficient data: expected 7 days in window, got {0}")]
    InsufficientData(usize),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("InputError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("InputError::Document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("InputError::ColumnLength: column '{column}' has {actual} values, expected {expected}")]
    ColumnLength { column: &'static str, expected: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("LocationError::File: {0}")]
    File(#[from] std::io::Error),
    #[error("LocationError::Document: {0}")]
    Document(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);

impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}

#[derive(Error, Debug)]
#[error("InitError: {0}")]
pub struct InitError(pub String);

impl From<std::io::Error> for InitError {
    fn from(e: std::io::Error) -> Self { InitError(e.to_string()) }
}
impl From<log4rs::config::runtime::ConfigErrors> for InitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self { InitError(e.to_string()) }
}
impl From<log::SetLoggerError> for InitError {
    fn from(e: log::SetLoggerError) -> Self { InitError(e.to_string()) }
}
impl From<LocationError> for InitError {
    fn from(e: LocationError) -> Self { InitError(e.to_string()) }
}
