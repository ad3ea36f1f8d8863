use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("cannot build scale domain: {0}")]
    Domain(String),

    #[error("lookup out of range: {0}")]
    OutOfRange(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
