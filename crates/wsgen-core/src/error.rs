use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum WorksheetError {
    // Argument errors
    #[error("TYPE_MISMATCH: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    // Problem template errors
    #[error("MISSING_BLOCK: block '{block}' not found in {}", path.display())]
    MissingBlock { block: String, path: PathBuf },

    // Collection errors
    #[error("NOT_FOUND: problem is not in the worksheet")]
    NotFound,

    #[error("INDEX_OUT_OF_RANGE: index {index} is out of range for {len} problems")]
    IndexOutOfRange { index: usize, len: usize },

    // Output errors
    #[error("ALREADY_EXISTS: there is already a file at {}", path.display())]
    AlreadyExists { path: PathBuf },

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] TemplateError),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl WorksheetError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        WorksheetError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        WorksheetError::ConfigInvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorksheetError>;
