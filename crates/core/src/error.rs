use thiserror::Error;

/// Core page errors
///
/// None of these ever reach the user. Callers log them and carry on, the same
/// way a page script skips an element it cannot find.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Element not found: {id}")]
    ElementMissing { id: String },

    #[error("Unknown tab: {name}")]
    UnknownTab { name: String },

    #[error("Link does not point at an in-page section: {href}")]
    InvalidLink { href: String },
}

impl CoreError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::ElementMissing { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
