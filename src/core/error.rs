use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Number of actions ({actions}) must match number of agents ({agents})")]
    ActionCountMismatch { actions: usize, agents: usize },

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
