use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A required field was missing or empty. Holds the message shown to the client.
    Validation(&'static str),
    /// The id does not resolve to a stored book, or is not an id at all.
    NotFound,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(message) => write!(f, "Validation failed: {}", message),
            KernelError::NotFound => write!(f, "Requested entity was not found"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
