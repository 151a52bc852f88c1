//! Error types for dtoforge

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// dtoforge errors
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "direct cycle detected between {type_name} and {nested}; \
         use flatten_relations on one side"
    )]
    DirectCycle { type_name: String, nested: String },

    #[error("Descriptor parse error: {0}")]
    DescriptorParse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
