//! Error types for the MacGate policy layer.
//!
//! This module defines the error hierarchy for label resolution and
//! access decision generation. The errors are organized by subsystem,
//! with each subsystem having its own error type.
//!
//! The root error type, `Error`, can wrap any of the subsystem-specific
//! errors, allowing for uniform error handling at the top level.

use std::io;
use thiserror::Error;

/// Root error type for the MacGate policy layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Label resolution errors
    #[error("Label error: {0}")]
    Label(#[from] LabelError),

    /// Access decision errors
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Connection context query errors
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors from resolving the MAC label of a peer connection.
///
/// Both variants are recoverable by the caller; the bus typically maps
/// them to a "not supported" or "access denied" reply to the requesting
/// client.
#[derive(Debug, Error)]
pub enum LabelError {
    /// The connection's transport exposes no endpoint to query (pipes
    /// and in-process transports have no socket credential).
    #[error("Connection transport exposes no endpoint")]
    EndpointUnavailable,

    /// The MAC facility could not produce a label for the endpoint.
    /// The underlying system error is preserved for diagnostics.
    #[error("MAC label unavailable: {source}")]
    LabelUnavailable {
        /// The system-call-level failure reported by the MAC facility.
        #[source]
        source: io::Error,
    },
}

/// Errors from building an allowed rule set.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The decision engine was invoked without a resolved subject label.
    /// This is a programming-contract violation in the caller, not a
    /// runtime condition to recover from.
    #[error("Subject label missing: engine invoked before label resolution")]
    MissingSubjectLabel,

    /// Result-set construction ran out of resources. Every rule
    /// reference acquired during the failed call has been released.
    #[error("Resource exhausted building allowed rule set: {0}")]
    ResourceExhausted(String),
}

/// Errors from querying the label of a named peer.
#[derive(Debug, Error)]
pub enum ContextError {
    /// No connection currently owns the requested bus name.
    #[error("Bus name '{0}' has no owner")]
    NameHasNoOwner(String),

    /// The owner was found but its label could not be resolved.
    #[error("Label resolution failed: {0}")]
    Label(#[from] LabelError),
}

/// Result type used throughout the MacGate layer.
pub type Result<T> = std::result::Result<T, Error>;
