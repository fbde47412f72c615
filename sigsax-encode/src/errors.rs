use thiserror::Error;

use sigsax_io::TrackError;

#[derive(Error, Debug)]
pub enum SaxError {
    #[error("Alphabet size must be from 2-20, got {0}")]
    InvalidAlphabetSize(usize),

    #[error("Alphabet range start ({start}) must not be greater than its end ({end})")]
    InvalidRange { start: usize, end: usize },

    #[error("Invalid normalization parameters: {0}")]
    InvalidParams(String),

    #[error("Data inconsistency: {symbols} symbol rows but {values} original values")]
    DataInconsistency { symbols: usize, values: usize },

    #[error("Unable to create thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
