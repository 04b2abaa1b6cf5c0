use thiserror::Error;

pub const USAGE: &str = "Usage: tally <initial balance> <transaction1> [transaction2 ...]";

#[derive(Error, Debug)]
pub enum TallyError {
    /// Fewer than two amounts were supplied.
    #[error("{usage}", usage = USAGE)]
    Usage,

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;
