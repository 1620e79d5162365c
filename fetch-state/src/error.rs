use std::fmt::Display;

/// Message carried by [`FetchError::Unexpected`].
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// The one kind of failure an [`AsyncState`](crate::AsyncState) surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The producer returned an error; holds its rendered message.
    #[error("{0}")]
    Operation(String),
    /// The producer failed without an error value, i.e. it panicked.
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Unexpected,
}

impl FetchError {
    pub fn operation<E: Display>(err: E) -> Self {
        FetchError::Operation(err.to_string())
    }

    /// Human readable message, suitable for showing in the UI.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, FetchError::Unexpected)
    }
}
