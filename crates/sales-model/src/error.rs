use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("column `{column}` is required by the {stage} stage")]
    MissingColumn {
        stage: &'static str,
        column: String,
    },
    #[error("column `{column}` must be numeric before the {stage} stage")]
    NonNumericColumn {
        stage: &'static str,
        column: String,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CleanError>;
