//! Shared test helpers for template engine tests

use crate::template::engine::{TemplateContext, TemplateEngine, UndefinedBehavior};
use crate::template::error::TemplateError;
use crate::template::syntax::Syntax;
use toml::{toml, Value};

/// Create a simple test context with basic scalar values
pub(super) fn simple_context() -> TemplateContext {
    let data = toml! {
        title = "My Title"
        count = 42
        price = 9.99
        enabled = true
        date = 2026-01-15
    };
    TemplateContext::new(Value::Table(data))
}

/// Create a nested test context with arrays and tables
pub(super) fn nested_context() -> TemplateContext {
    let data = toml! {
        [worksheet]
        title = "Counting Practice"
        language = "en"
        date = "2026-01-15"

        [[worksheet.problems]]
        title = "Arranging Letters"
        points = 4

        [[worksheet.problems]]
        title = "Binomial Expansion"
        points = 6
    };
    TemplateContext::new(Value::Table(data))
}

/// Engine using `{{ }}` delimiters
pub(super) fn braces_engine() -> TemplateEngine {
    TemplateEngine::builder()
        .syntax(Syntax::braces())
        .build()
        .unwrap()
}

/// Engine using `{{ }}` delimiters that rejects undefined keys
pub(super) fn strict_braces_engine() -> TemplateEngine {
    TemplateEngine::builder()
        .syntax(Syntax::braces())
        .undefined(UndefinedBehavior::Strict)
        .build()
        .unwrap()
}

/// Render with the braces preset
pub(super) fn render_braces(
    template: &str,
    context: &TemplateContext,
) -> Result<String, TemplateError> {
    braces_engine().render(template, context)
}

/// Render with the braces preset in strict mode
pub(super) fn render_strict(
    template: &str,
    context: &TemplateContext,
) -> Result<String, TemplateError> {
    strict_braces_engine().render(template, context)
}
