use thiserror::Error;

/// Failures surfaced by tree operations and forest configuration.
///
/// Inserting a duplicate or removing a missing key is not an error; those
/// calls return `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    /// The operation needs at least one key.
    #[error("underflow: tree is empty")]
    Underflow,
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}

impl ForestError {
    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        ForestError::IllegalArgument(msg.into())
    }
}
