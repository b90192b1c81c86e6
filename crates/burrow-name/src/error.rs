//! Error types for the name crate.

/// Errors from parsing the URI form of a name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// A `%` escape was not followed by two hex digits.
    #[error("invalid percent-escape in component {0:?}")]
    InvalidEscape(String),

    /// A name contained an empty component token (e.g. `/a//b`).
    ///
    /// The zero-length component is written `...` in URI form.
    #[error("empty component token in name {0:?}")]
    EmptyComponent(String),
}

/// Convenience alias for name-parsing results.
pub type NameResult<T> = Result<T, NameError>;
