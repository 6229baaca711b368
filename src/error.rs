use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The source file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The selected file does not carry a `.pdf` extension.
    #[error("The selected file is not a valid PDF file: {}", .0.display())]
    InvalidExtension(PathBuf),
    /// The document reports itself encrypted; extraction is aborted rather
    /// than attempting decryption.
    #[error("This PDF is encrypted.")]
    Encrypted,
    /// Any other failure reported by the PDF parser, message passed through.
    #[error("{0}")]
    Pdf(lopdf::Error),
    /// Reading the source file failed.
    #[error("couldn't read file: {0}")]
    Io(#[from] io::Error),
    /// Writing the report file failed. Extraction itself already succeeded;
    /// callers report this as a warning instead of a failure.
    #[error("could not save report: {0}")]
    Save(io::Error),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            // lopdf tries an empty-password decrypt while loading and fails
            // here on password-protected documents.
            lopdf::Error::Decryption(_) => Error::Encrypted,
            other => Error::Pdf(other),
        }
    }
}
