//! Error types for the donation dialog.
//!
//! None of these are fatal: every operation catches its own error, logs it
//! and leaves the page usable.

use thiserror::Error;

/// Lookup and decoding failures of the payment directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Method id has no entry in the directory
    #[error("No payment information found for method: {0}")]
    NotFound(String),

    /// Entry is not valid Base64 or does not decode to UTF-8
    #[error("Error decoding payment information: {0}")]
    Decode(String),

    /// The table itself could not be parsed
    #[error("Invalid payment table: {0}")]
    Table(String),
}

/// Clipboard write failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// `navigator.clipboard` is missing or threw synchronously
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The write promise was rejected (permissions, insecure context, ...)
    #[error("Failed to copy: {0}")]
    Rejected(String),
}

/// Host page elements the dialog depends on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("No document available")]
    NoDocument,

    #[error("Host page is missing element #{0}")]
    MissingElement(String),
}
