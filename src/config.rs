/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub elevator: ElevatorConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

/// Car dimensions and logical delays. Times are in milliseconds.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorConfig {
    pub n_floors: u8,
    #[serde(default = "default_start_floor")]
    pub start_floor: u8,
    #[serde(default = "default_door_close_time")]
    pub door_close_time: u64,
    #[serde(default = "default_travel_time")]
    pub travel_time: u64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulatorConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Defaults                */
/***************************************/
fn default_start_floor() -> u8 {
    1
}

fn default_door_close_time() -> u64 {
    1000
}

fn default_travel_time() -> u64 {
    3000
}

fn default_tick_interval() -> u64 {
    250
}

impl ElevatorConfig {
    pub fn new(n_floors: u8, start_floor: u8) -> ElevatorConfig {
        ElevatorConfig {
            n_floors,
            start_floor,
            door_close_time: default_door_close_time(),
            travel_time: default_travel_time(),
        }
    }

    pub fn door_close_delay(&self) -> Duration {
        Duration::from_millis(self.door_close_time)
    }

    pub fn travel_delay(&self) -> Duration {
        Duration::from_millis(self.travel_time)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            tick_interval: default_tick_interval(),
        }
    }
}

impl SimulatorConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_interval)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
