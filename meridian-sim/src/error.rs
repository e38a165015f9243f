//! Simulator errors

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors loading the simulator configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: PathBuf, source: io::Error },
    /// Config file is not valid TOML for `SimConfig`
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Face settings rejected by the core
    Face(meridian_core::config::ConfigError),
    /// Simulator settings out of range
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read `{}`: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse `{}`: {}", path.display(), source)
            }
            ConfigError::Face(err) => write!(f, "invalid face config: {}", err),
            ConfigError::Invalid(reason) => write!(f, "invalid simulator config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Face(_) | ConfigError::Invalid(_) => None,
        }
    }
}

impl From<meridian_core::config::ConfigError> for ConfigError {
    fn from(err: meridian_core::config::ConfigError) -> Self {
        ConfigError::Face(err)
    }
}

/// Top-level simulator errors
#[derive(Debug)]
pub enum SimError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Logger backend failed to start
    Logger(String),
    /// A task could not be spawned on the executor
    Spawn(embassy_executor::SpawnError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(err) => write!(f, "{}", err),
            SimError::Logger(reason) => write!(f, "failed to start logger: {}", reason),
            SimError::Spawn(err) => write!(f, "failed to spawn task: {:?}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(err) => Some(err),
            SimError::Logger(_) | SimError::Spawn(_) => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(err: ConfigError) -> Self {
        SimError::Config(err)
    }
}

impl From<embassy_executor::SpawnError> for SimError {
    fn from(err: embassy_executor::SpawnError) -> Self {
        SimError::Spawn(err)
    }
}

impl From<flexi_logger::FlexiLoggerError> for SimError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        SimError::Logger(err.to_string())
    }
}
