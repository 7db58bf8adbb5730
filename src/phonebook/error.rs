use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Invalid phone number {0:?}: expected exactly 11 digits")]
    InvalidPhone(String),

    #[error("No contact with number {index}: the directory holds {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Search term cannot be empty")]
    EmptySearchTerm,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
