//! Worksheet generation core
//!
//! Problems render their `problem` and `solution` blocks through a shared
//! [`TemplateEngine`]; a [`Worksheet`] collects the results into one document.

// Core modules
pub mod config;
pub mod error;
pub mod problem;
pub mod template;
pub mod worksheet;

// Re-export commonly used types
pub use config::WorksheetConfig;
pub use error::{Result, WorksheetError};
pub use problem::{Problem, ProblemBase, ProblemRef, RenderedProblem};
pub use template::{Syntax, SyntaxPreset, TemplateEngine};
pub use worksheet::{Worksheet, WorksheetOptions};
