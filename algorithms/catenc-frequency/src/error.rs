use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrequencyError>;

#[derive(Error, Debug)]
pub enum FrequencyError {
    #[error("window should be positive, but is {0}")]
    InvalidWindow(usize),
    #[error(transparent)]
    BaseCrate(#[from] catenc::error::Error),
}
