//! Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("The value must be unique: {0:?}")]
    DuplicateValue(String),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NoteError>;
