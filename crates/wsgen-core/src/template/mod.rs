//! Template module - Pure text substitution template engine
//!
//! Problem and document templates are plain text in the output format (LaTeX
//! or Typst) with engine tokens embedded. The engine never interprets the
//! surrounding text.
//!
//! ## Syntax (LaTeX preset)
//!
//! - Placeholders: `\jvar{key}` or `\jvar{nested.key}`
//! - Loops: `\jblock{each items |item|}` ... `\jblock{/each}`
//! - Conditionals: `\jblock{if key}` ... `\jblock{else}` ... `\jblock{/if}`
//! - Named blocks: `\jblock{block problem}` ... `\jblock{endblock}`
//! - Comments: `\jcomm{text\}` (may contain braces)
//!
//! The braces preset uses `{{ }}` for placeholders and tags and `{{! }}` for
//! comments, and supports `\{{literal}}` escapes.

pub mod builtin;
pub mod engine;
pub mod error;
pub mod extract;
pub mod loader;
pub mod syntax;

pub use engine::{
    TemplateContext, TemplateEngine, TemplateEngineBuilder, UndefinedBehavior,
    DEFAULT_RENDER_TIMEOUT,
};
pub use error::TemplateError;
pub use extract::BlockExtractor;
pub use loader::TemplateLoader;
pub use syntax::{Delimiters, Syntax, SyntaxPreset};
