//! Custom error types for the application.
//!
//! Two domains, matching the two places a workflow can fail:
//!
//! - [`ValidationError`] - rejections raised before any request is built
//! - [`TransferError`] - failures from the exchange with the service or
//!   from the browser-side download machinery

use std::fmt;

use crate::models::FileCategory;

/// Rejection of a candidate file before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Category missing from the format catalog.
    UnsupportedCategory,
    /// MIME type / extension not accepted for a fresh upload.
    InvalidInputType(FileCategory),
    /// Name does not end with an accepted compressed extension.
    InvalidCompressedExtension(FileCategory),
    /// Upload exceeds the size ceiling.
    FileTooLarge,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCategory => write!(f, "Unsupported file type"),
            Self::InvalidInputType(category) => {
                write!(f, "Please select a valid {} file", category.noun())
            }
            Self::InvalidCompressedExtension(category) => {
                write!(f, "Please select a valid compressed {} file", category.noun())
            }
            Self::FileTooLarge => write!(f, "File size too large. Maximum size is 50MB."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure of an exchange with the compression service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Could not assemble the multipart request.
    RequestCreationFailed,
    /// Request never completed (network, CORS, ...).
    Network(String),
    /// Service answered with a non-2xx status; message is the server's own
    /// wording when it sent one.
    Rejected { status: u16, message: String },
    /// 2xx answer missing or mangling an expected field.
    MalformedResponse(String),
    /// Browser-side download machinery failed.
    Download(String),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Rejected { status, message } => {
                if message.is_empty() {
                    write!(f, "Service returned status {}", status)
                } else {
                    f.write_str(message)
                }
            }
            Self::MalformedResponse(msg) => f.write_str(msg),
            Self::Download(msg) => write!(f, "Failed to download the file: {}", msg),
        }
    }
}

impl std::error::Error for TransferError {}
