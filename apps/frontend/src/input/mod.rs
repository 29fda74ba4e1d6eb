// Input collection: everything that is checked before a request leaves the front-end.

pub mod file;
pub mod numeric;

use thiserror::Error;

pub use file::{FileCandidate, FileSource, SelectedFile, MAX_FILE_BYTES};
pub use numeric::{sanitize_numeric, NumericInputPair};

/// Rejections raised before any request is sent. The display text is shown
/// to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a file.")]
    NoFile,

    #[error("Please select a PDF file.")]
    NotPdf,

    #[error("File size must be less than 10MB.")]
    TooLarge,

    #[error("Please select a PDF file first.")]
    NothingSelected,

    #[error("Please enter valid numbers in both fields.")]
    InvalidNumbers,

    #[error("A request is already in progress.")]
    Busy,
}
