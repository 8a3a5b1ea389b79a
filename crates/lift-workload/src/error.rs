use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid burst at row {row}: {reason}")]
    InvalidBurst { row: usize, reason: String },
}

pub type WorkloadResult<T> = Result<T, WorkloadError>;
