//! Error types in catenc
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("target data is not same length as categorical data ({records} records, {targets} targets)")]
    TargetLength { records: usize, targets: usize },
    #[error("index {index} out of bounds for {len} codes")]
    Bounds { index: usize, len: usize },
    #[error("codeword of length {found} does not cover encoder dimension {expected}")]
    CodewordLength { expected: usize, found: usize },
    #[error("malformed vocabulary data: {0}")]
    Format(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}
