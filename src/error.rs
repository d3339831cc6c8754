//! Error types for mdqti operations.

use thiserror::Error;

/// Errors that can occur while generating or writing a QTI package.
///
/// Parsing and rendering never fail; only serialization and the I/O
/// boundary produce these. quick-xml's writer reports sink failures as
/// plain I/O errors, so serializer failures surface as [`Error::Io`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("No questions found in the input")]
    NoQuestions,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
