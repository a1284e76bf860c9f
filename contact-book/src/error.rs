use thiserror::Error;

/// Expected outcomes of a book operation that did not go through.
///
/// The messages are the ones shown to the user on the console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("Contact '{0}' already exists.")]
    DuplicateName(String),

    #[error("Error: Name, phone, and email cannot be empty.")]
    InvalidInput,

    #[error("Contact '{0}' not found.")]
    NotFound(String),

    #[error("Contact book is empty.")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, BookError>;
