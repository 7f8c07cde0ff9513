//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CipherError {
    #[error("Keyword contains no letters a-z after sanitization")]
    EmptyKeyword,

    #[error("Ciphertext and message sanitize to different lengths ({cipher} vs {message})")]
    LengthMismatch { cipher: usize, message: usize },

    #[error("No keyword reproduces the ciphertext from the message")]
    KeywordNotFound,
}

pub type Result<T> = std::result::Result<T, CipherError>;
