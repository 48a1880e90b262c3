use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid fuel amount. Please enter a valid number. (got {0:?})")]
    InvalidFuel(String),

    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("The round is over, start a new one to keep flying")]
    RoundOver,

    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
