use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueenForgeError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error(
        "Insufficient Population: {operation} needs {required} members but only {available} exist"
    )]
    InsufficientPopulation {
        operation: &'static str,
        required: usize,
        available: usize,
    },

    #[error("Board Parsing Error: {0}")]
    Parse(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type QfResult<T> = Result<T, QueenForgeError>;
