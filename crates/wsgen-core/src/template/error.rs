//! Template error types

use std::fmt;
use std::path::PathBuf;

/// Template rendering errors
#[derive(Debug)]
pub enum TemplateError {
    /// Key not found in data context (strict mode only)
    UndefinedKey {
        /// The key that was not found
        key: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Malformed template syntax
    MalformedSyntax {
        /// Error message
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Array used outside of an `each` block
    ArrayInNonEachContext {
        /// The key that resolved to an array
        key: String,
    },

    /// Table used in placeholder (must use nested keys)
    TableInPlaceholder {
        /// The key that resolved to a table
        key: String,
    },

    /// Template rendering timed out (malformed input protection)
    Timeout {
        /// Maximum allowed duration
        max_duration: std::time::Duration,
        /// Actual elapsed time
        elapsed: std::time::Duration,
    },

    /// Delimiter configuration cannot be used for tokenizing
    InvalidSyntax {
        /// Error message
        message: String,
    },

    /// Document template could not be resolved by name
    TemplateNotFound {
        /// Requested template name
        name: String,
        /// Directories that were searched
        searched: Vec<PathBuf>,
    },

    /// Reading a template file failed
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedKey { key, line } => {
                write!(f, "Undefined key '{}' at line {}", key, line)
            }
            TemplateError::MalformedSyntax { message, line } => {
                write!(f, "Malformed syntax at line {}: {}", line, message)
            }
            TemplateError::ArrayInNonEachContext { key } => {
                write!(
                    f,
                    "Array '{}' used outside of an each block. Use 'each {} |item|' ... '/each'",
                    key, key
                )
            }
            TemplateError::TableInPlaceholder { key } => {
                write!(
                    f,
                    "Table '{}' cannot be used directly in placeholder. Use nested keys like {}.field",
                    key, key
                )
            }
            TemplateError::Timeout {
                max_duration,
                elapsed,
            } => {
                write!(
                    f,
                    "Template rendering timed out after {:.2}s (max: {:.2}s). Check for unclosed tags or each blocks.",
                    elapsed.as_secs_f64(),
                    max_duration.as_secs_f64()
                )
            }
            TemplateError::InvalidSyntax { message } => {
                write!(f, "Invalid delimiter configuration: {}", message)
            }
            TemplateError::TemplateNotFound { name, searched } => {
                write!(f, "Template '{}' not found", name)?;
                if !searched.is_empty() {
                    let dirs: Vec<String> =
                        searched.iter().map(|p| p.display().to_string()).collect();
                    write!(f, " (searched: {})", dirs.join(", "))?;
                }
                Ok(())
            }
            TemplateError::Io { path, source } => {
                write!(f, "Failed to read template {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TemplateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
