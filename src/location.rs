use std::fs;
use std::path::Path;
use log::info;
use serde::{Deserialize, Serialize};
use crate::errors::LocationError;

/// A named place to show the feel index for
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

/// Storage for the user's selected location
pub trait LocationRepository {
    /// Returns the saved location, if any
    fn load(&self) -> Result<Option<Location>, LocationError>;

    /// Saves the location, replacing any previous one
    ///
    /// # Arguments
    ///
    /// * 'location' - the location to save
    fn save(&self, location: &Location) -> Result<(), LocationError>;
}

/// Location repository backed by a json file
pub struct FileLocationRepository {
    file_path: String,
}

impl FileLocationRepository {
    /// Returns a repository reading and writing the given file
    ///
    /// # Arguments
    ///
    /// * 'file_path' - path to the location json file
    pub fn new(file_path: &str) -> FileLocationRepository {
        FileLocationRepository { file_path: file_path.to_string() }
    }
}

impl LocationRepository for FileLocationRepository {
    fn load(&self) -> Result<Option<Location>, LocationError> {
        let path = Path::new(&self.file_path);
        if path.exists() {
            let json = fs::read_to_string(path)?;
            let location: Location = serde_json::from_str(&json)?;
            Ok(Some(location))
        } else {
            Ok(None)
        }
    }

    fn save(&self, location: &Location) -> Result<(), LocationError> {
        let json = serde_json::to_string_pretty(location)?;
        fs::write(&self.file_path, json)?;

        Ok(())
    }
}

/// Returns the saved location, or saves and returns the given default if none has been saved
///
/// # Arguments
///
/// * 'repo' - the location repository
/// * 'default' - location to use when nothing is saved
pub fn resolve_location(repo: &dyn LocationRepository, default: &Location) -> Result<Location, LocationError> {
    match repo.load()? {
        Some(location) => Ok(location),
        None => {
            info!("no saved location, using {}", default.name);
            repo.save(default)?;
            Ok(default.clone())
        }
    }
}
