use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Index {index} is out of bounds for catalog of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field for validation errors, `None` otherwise.
    /// The console UI uses this to re-focus the prompt.
    pub fn field(&self) -> Option<&str> {
        match self {
            CatalogError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
