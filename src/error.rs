use thiserror::Error;

/// Errors raised while constructing model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// The name was empty or contained only whitespace.
    #[error("entity name must not be empty")]
    EmptyName,
}
