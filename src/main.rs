use std::env;
use anyhow::{anyhow, Context, Result};
use feelcast::config::load_config;
use feelcast::initialization::init;
use feelcast::location::Location;
use feelcast::worker::{change_location, run};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Usage:
///
/// * 'feelcast [config]' - run cycles for the current location
/// * 'feelcast [config] set-location <name> <lat> <long>' - select a new location, then run
///
/// The config path falls back to the CONFIG_PATH environment variable and then to config.toml
fn main() -> Result<()> {
    let args = env::args().collect::<Vec<String>>();

    let config_path = args.get(1)
        .cloned()
        .or_else(|| env::var("CONFIG_PATH").ok())
        .unwrap_or(DEFAULT_CONFIG_PATH.to_string());

    let config = load_config(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;
    let mut mgr = init(&config)?;

    if args.get(2).is_some_and(|a| a == "set-location") {
        let location = parse_location(&args[3..])?;
        change_location(&mut mgr, location)?;
    }

    run(&config, &mgr);

    Ok(())
}

/// Parses name, latitude and longitude arguments into a location
///
/// # Arguments
///
/// * 'args' - the three arguments following 'set-location'
fn parse_location(args: &[String]) -> Result<Location> {
    match args {
        [name, lat, long] => Ok(Location {
            name: name.clone(),
            lat: lat.parse().with_context(|| format!("invalid latitude '{}'", lat))?,
            long: long.parse().with_context(|| format!("invalid longitude '{}'", long))?,
        }),
        _ => Err(anyhow!("set-location expects <name> <lat> <long>")),
    }
}
