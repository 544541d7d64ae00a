use crate::xml::XmlError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Errors raised while reading or constructing manifest elements
#[derive(Error, Debug, Diagnostic)]
pub enum ManifestError {
    #[error("{field} must not be empty in <{element}>")]
    #[diagnostic(
        code(appmanifest::missing_field),
        help("add a non-empty <{field}> child to <{element}>")
    )]
    MissingRequiredField {
        element: &'static str,
        field: &'static str,
    },

    #[error("{field} in <{element}> must be {expected}, got {value:?}")]
    #[diagnostic(code(appmanifest::invalid_field))]
    InvalidFieldValue {
        element: &'static str,
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Xml(#[from] XmlError),

    #[error("Failed to read manifest {}", path.display())]
    #[diagnostic(code(appmanifest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Name of the field at fault, if the error concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ManifestError::MissingRequiredField { field, .. }
            | ManifestError::InvalidFieldValue { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Name of the manifest element at fault, if any
    pub fn element(&self) -> Option<&'static str> {
        match self {
            ManifestError::MissingRequiredField { element, .. }
            | ManifestError::InvalidFieldValue { element, .. } => Some(*element),
            _ => None,
        }
    }
}
