//! Error types for page decoding.

use crate::registry::{Capability, Target};

/// Errors that can occur while building or decoding pages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A page request was built with an out-of-range number or size.
    #[error("{0}")]
    InvalidPageRequest(String),
    /// The payload was not valid JSON or did not match the page shape.
    #[error("Failed to decode page: {0}")]
    Decode(#[from] serde_json::Error),
    /// The registry has no concrete type for the requested capability.
    #[error("No concrete type registered for capability {0}")]
    Unmapped(Capability),
    /// A capability was mapped to a type that cannot satisfy it.
    #[error("{target} cannot stand in for capability {capability}")]
    IncompatibleBinding {
        capability: Capability,
        target: Target,
    },
    /// A process-wide registry was already installed.
    #[error("A type registry is already installed for this process")]
    AlreadyInstalled,
    /// The response body could not be read.
    #[error("Request failed")]
    RequestFailed,
    /// The origin returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
