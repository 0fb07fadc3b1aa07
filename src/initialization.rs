use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{Config, General};
use crate::errors::InitError;
use crate::location::{resolve_location, FileLocationRepository, Location, LocationRepository};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

/// Collaborators used by the worker
pub struct Mgr {
    pub location_repo: Box<dyn LocationRepository>,
    pub location: Location,
}

/// Sets up logging and resolves the current location
///
/// # Arguments
///
/// * 'config' - the loaded configuration
pub fn init(config: &Config) -> Result<Mgr, InitError> {
    setup_logger(&config.general)?;

    info!("feelcast version: {}", env!("CARGO_PKG_VERSION"));

    let location_repo: Box<dyn LocationRepository> = Box::new(FileLocationRepository::new(&config.files.location_file));
    let location = resolve_location(location_repo.as_ref(), &config.geo_ref.to_location())?;
    info!("location: {} ({:.4}, {:.4})", location.name, location.lat, location.long);

    Ok(Mgr { location_repo, location })
}

/// Sets up log4rs with a file appender and, if configured, a stdout appender
///
/// # Arguments
///
/// * 'general' - general configuration holding log path, level and stdout flag
fn setup_logger(general: &General) -> Result<(), InitError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut builder = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder.build(root.build(general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
