use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::location::Location;
use crate::mock::MockWeek;

#[derive(Deserialize)]
pub struct GeoRef {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl GeoRef {
    pub fn to_location(&self) -> Location {
        Location { name: self.name.clone(), lat: self.lat, long: self.long }
    }
}

#[derive(Deserialize)]
pub struct Files {
    pub daily_file: String,
    pub location_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    #[serde(default)]
    pub refresh_minutes: Option<u64>,
}

#[derive(Deserialize)]
pub struct MockParameters {
    pub enabled: bool,
    pub days: MockWeek,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub geo_ref: GeoRef,
    pub files: Files,
    #[serde(default)]
    pub mock: Option<MockParameters>,
}

impl Config {
    /// Returns the preset week if mock mode is configured and enabled
    pub fn active_mock(&self) -> Option<&MockWeek> {
        self.mock.as_ref().filter(|m| m.enabled).map(|m| &m.days)
    }
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses configuration from a toml document
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.general.log_path.is_empty() {
        return Err(ConfigError::from("log_path must not be empty"));
    }

    Ok(config)
}
