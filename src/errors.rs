//! Error taxonomy for accessor definition and accessor invocation.
//!
//! Everything surfaces immediately to the caller; there are no retries and no
//! partial-failure states (every installation is a single method-table insert).

use thiserror::Error;

/// Errors raised while synthesizing accessors or invoking them on instances.
#[derive(Debug, Error)]
pub enum AccessorError {
    /// A strict write path was given no value arguments.
    #[error("wrong number of arguments: '{target}' requires at least one value")]
    Arity { target: String },

    /// A write-only field's reader was invoked.
    #[error("field '{field}' is write-only and cannot be read")]
    AccessDenied { field: String },

    /// The symbol installer was given input it cannot install.
    #[error("cannot install '{name}' on class '{class}': {reason}")]
    Installation {
        class: String,
        name: String,
        reason: String,
    },

    /// Dynamic dispatch found no method under the requested name.
    #[error("class '{class}' has no method '{method}'")]
    UnknownMethod { class: String, method: String },

    /// Host-framework failure, surfaced unchanged.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors raised by the host object framework while preparing a class.
#[derive(Debug, Error)]
pub enum HostError {
    /// The field cannot be declared on the target class.
    #[error("cannot declare field '{name}' on class '{class}': {reason}")]
    DeclareField {
        class: String,
        name: String,
        reason: String,
    },
}
