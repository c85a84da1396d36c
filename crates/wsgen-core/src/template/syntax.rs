//! Delimiter configuration for the template engine
//!
//! Output formats such as LaTeX and Typst give braces and backslashes their own
//! meaning, so the engine's tokens are configurable. A [`Syntax`] names the
//! opening and closing strings of three token families:
//!
//! - **variable**: `\jvar{key}` (LaTeX preset) or `{{key}}` (braces preset)
//! - **block**: control tags such as `\jblock{each items |item|}`
//! - **comment**: `\jcomm{...\}`, rendered as nothing; the closer is `\}` so
//!   LaTeX with braces can be commented out
//!
//! Variable and block delimiters may be identical; tags are then told apart
//! from placeholders by their leading keyword.

use crate::template::error::TemplateError;
use serde::{Deserialize, Serialize};

/// Opening and closing strings of one token family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub start: String,
    pub end: String,
}

impl Delimiters {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Named delimiter presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxPreset {
    /// `\jvar{}`, `\jblock{}`, `\jcomm{\}` (safe inside LaTeX sources)
    #[default]
    Latex,
    /// `{{ }}` for variables and tags, `{{! }}` for comments
    Braces,
}

impl SyntaxPreset {
    /// Build the [`Syntax`] for this preset
    pub fn syntax(self) -> Syntax {
        match self {
            SyntaxPreset::Latex => Syntax::latex(),
            SyntaxPreset::Braces => Syntax::braces(),
        }
    }

    /// File extension conventionally produced with this preset
    pub fn output_extension(self) -> &'static str {
        match self {
            SyntaxPreset::Latex => "tex",
            SyntaxPreset::Braces => "typ",
        }
    }
}

/// Complete delimiter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    variable: Delimiters,
    block: Delimiters,
    comment: Delimiters,
}

impl Syntax {
    /// Create a custom syntax, validating that it can be tokenized unambiguously
    pub fn new(
        variable: Delimiters,
        block: Delimiters,
        comment: Delimiters,
    ) -> Result<Self, TemplateError> {
        for (family, delims) in [
            ("variable", &variable),
            ("block", &block),
            ("comment", &comment),
        ] {
            if delims.start.is_empty() || delims.end.is_empty() {
                return Err(TemplateError::InvalidSyntax {
                    message: format!("{} delimiters must not be empty", family),
                });
            }
        }

        if variable.start == block.start && variable.end != block.end {
            return Err(TemplateError::InvalidSyntax {
                message: format!(
                    "variable and block share opener '{}' but close with '{}' and '{}'",
                    variable.start, variable.end, block.end
                ),
            });
        }

        if comment.start == variable.start || comment.start == block.start {
            return Err(TemplateError::InvalidSyntax {
                message: format!(
                    "comment opener '{}' collides with another token family",
                    comment.start
                ),
            });
        }

        Ok(Self {
            variable,
            block,
            comment,
        })
    }

    /// LaTeX-friendly preset: `\jvar{key}`, `\jblock{tag}`, `\jcomm{text\}`
    pub fn latex() -> Self {
        Self {
            variable: Delimiters::new(r"\jvar{", "}"),
            block: Delimiters::new(r"\jblock{", "}"),
            comment: Delimiters::new(r"\jcomm{", r"\}"),
        }
    }

    /// Mustache-like preset: `{{key}}`, `{{each items |item|}}`, `{{! text }}`
    pub fn braces() -> Self {
        Self {
            variable: Delimiters::new("{{", "}}"),
            block: Delimiters::new("{{", "}}"),
            comment: Delimiters::new("{{!", "}}"),
        }
    }

    pub fn variable(&self) -> &Delimiters {
        &self.variable
    }

    pub fn block(&self) -> &Delimiters {
        &self.block
    }

    pub fn comment(&self) -> &Delimiters {
        &self.comment
    }

    /// Whether placeholders and tags share their delimiters
    pub fn shares_tag_delimiters(&self) -> bool {
        self.variable.start == self.block.start
    }

    /// Whether `\` before an opener escapes it
    ///
    /// Disabled when any opener itself starts with a backslash.
    pub fn supports_escapes(&self) -> bool {
        ![&self.variable, &self.block, &self.comment]
            .iter()
            .any(|d| d.start.starts_with('\\'))
    }

    /// Render a block tag with these delimiters, e.g. `\jblock{endblock}`
    pub fn block_tag(&self, content: &str) -> String {
        format!("{}{}{}", self.block.start, content, self.block.end)
    }

    /// Render a placeholder with these delimiters, e.g. `{{word}}`
    pub fn placeholder(&self, key: &str) -> String {
        format!("{}{}{}", self.variable.start, key, self.variable.end)
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::latex()
    }
}
