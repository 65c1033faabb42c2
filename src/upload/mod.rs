//! Study material upload
//!
//! Validation of candidate files, the staged-file queue and the simulated
//! progress that precedes the document summary.

pub mod staging;
pub mod validation;

pub use staging::{
    FileCandidate, ProgressPlan, ProgressStep, SectionToggles, StagedFile, UploadQueue,
    PROGRESS_STEP_MS, SUMMARY_DELAY_MS,
};
pub use validation::{
    format_file_size, mime_for_path, validate, FileKind, ACCEPTED_EXTENSIONS, MAX_FILE_SIZE,
    SUPPORTED_TYPES,
};

use thiserror::Error;

/// Upload errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UploadError {
    #[error("File type not supported: {0}")]
    UnsupportedType(String),

    #[error("File too large: {size_mb:.2}MB. Maximum size is {max_mb}MB.")]
    TooLarge { size_mb: f64, max_mb: u64 },

    #[error("No files to upload")]
    NothingToUpload,

    #[error("Upload already in progress")]
    Busy,
}
