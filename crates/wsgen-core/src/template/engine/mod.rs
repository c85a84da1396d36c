//! Template engine implementation

pub(crate) mod blocks;
mod helpers;
mod tokenize;

use crate::template::error::TemplateError;
use crate::template::extract::BlockExtractor;
use crate::template::loader::TemplateLoader;
use crate::template::syntax::Syntax;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use toml::Value;

use blocks::{find_block_end, split_else};
use helpers::{
    create_loop_context, is_truthy, parse_each_syntax, parse_if_syntax, resolve_key,
    stringify_value,
};
use tokenize::{Token, TokenKind, TokenStream};

/// Default maximum duration for template rendering (malformed input protection)
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Check if rendering has exceeded the timeout
fn check_timeout(start: Instant, max_duration: Duration) -> Result<(), TemplateError> {
    let elapsed = start.elapsed();
    if elapsed >= max_duration {
        return Err(TemplateError::Timeout {
            max_duration,
            elapsed,
        });
    }
    Ok(())
}

/// What a placeholder referring to a missing key renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedBehavior {
    /// Render nothing and log a warning
    #[default]
    Lenient,
    /// Fail with [`TemplateError::UndefinedKey`]
    Strict,
}

/// Template context holding TOML data for rendering
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from TOML value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Get the underlying TOML value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl From<toml::Table> for TemplateContext {
    fn from(table: toml::Table) -> Self {
        Self::new(Value::Table(table))
    }
}

/// Builder for [`TemplateEngine`]
#[derive(Debug, Clone, Default)]
pub struct TemplateEngineBuilder {
    syntax: Syntax,
    undefined: UndefinedBehavior,
    search_paths: Vec<PathBuf>,
    render_timeout: Option<Duration>,
}

impl TemplateEngineBuilder {
    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn undefined(mut self, undefined: UndefinedBehavior) -> Self {
        self.undefined = undefined;
        self
    }

    /// Add a directory searched for document templates (in insertion order)
    pub fn search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    pub fn render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<TemplateEngine, TemplateError> {
        let extractor = BlockExtractor::new(&self.syntax)?;
        Ok(TemplateEngine {
            extractor,
            loader: TemplateLoader::new(self.search_paths),
            syntax: self.syntax,
            undefined: self.undefined,
            render_timeout: self.render_timeout.unwrap_or(DEFAULT_RENDER_TIMEOUT),
        })
    }
}

/// Template engine for rendering templates with TOML data
///
/// Immutable once built; share it between worksheets with `Arc`.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    syntax: Syntax,
    undefined: UndefinedBehavior,
    render_timeout: Duration,
    extractor: BlockExtractor,
    loader: TemplateLoader,
}

impl TemplateEngine {
    /// Create a template engine with the LaTeX preset and no search paths
    pub fn new() -> Result<Self, TemplateError> {
        Self::builder().build()
    }

    pub fn builder() -> TemplateEngineBuilder {
        TemplateEngineBuilder::default()
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn undefined_behavior(&self) -> UndefinedBehavior {
        self.undefined
    }

    /// Block extractor configured with this engine's delimiters
    pub fn extractor(&self) -> &BlockExtractor {
        &self.extractor
    }

    /// Resolve a document template by name or path
    pub fn load_template(&self, name: &str) -> Result<String, TemplateError> {
        self.loader.load(name)
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.render_fragment(template, context, Instant::now())
    }

    fn render_fragment(
        &self,
        template: &str,
        context: &TemplateContext,
        start: Instant,
    ) -> Result<String, TemplateError> {
        let mut output = String::new();
        let mut cursor = 0;
        let mut tokens = TokenStream::new(template, &self.syntax);

        while let Some(token) = tokens.next() {
            check_timeout(start, self.render_timeout)?;
            let token = token?;

            // Output text before the backslashes, then half of the backslashes
            let text_end = token.start - token.backslash_count;
            output.push_str(&template[cursor..text_end]);
            for _ in 0..(token.backslash_count / 2) {
                output.push('\\');
            }

            if token.is_escaped() {
                output.push_str(&template[token.start..token.end()]);
                cursor = token.end();
                continue;
            }

            cursor = match &token.kind {
                TokenKind::Placeholder { key } => {
                    self.process_placeholder(key, context, &mut output, token.line)?;
                    token.end()
                }
                TokenKind::Comment => token.end(),
                TokenKind::BlockStart { keyword, args } => {
                    let next = self.process_block(
                        template, &token, keyword, args, context, start, &mut output,
                    )?;
                    tokens.skip_to(next);
                    next
                }
                TokenKind::BlockEnd { keyword } => {
                    return Err(TemplateError::MalformedSyntax {
                        message: format!(
                            "Unexpected '/{}' without matching '{}'",
                            keyword, keyword
                        ),
                        line: token.line,
                    });
                }
                TokenKind::Else => {
                    return Err(TemplateError::MalformedSyntax {
                        message: "Unexpected 'else' outside of an if block".to_string(),
                        line: token.line,
                    });
                }
                TokenKind::Unknown { content } => {
                    return Err(TemplateError::MalformedSyntax {
                        message: format!("Unknown tag '{}'", content),
                        line: token.line,
                    });
                }
            };
        }

        output.push_str(&template[cursor..]);
        Ok(output)
    }

    /// Render a block (`each`, `if`, `block`) and return the position after its closing tag
    #[allow(clippy::too_many_arguments)]
    fn process_block(
        &self,
        template: &str,
        token: &Token,
        keyword: &str,
        args: &str,
        context: &TemplateContext,
        start: Instant,
        output: &mut String,
    ) -> Result<usize, TemplateError> {
        let body_start = token.end();
        let (body_len, end_len) = find_block_end(&template[body_start..], &self.syntax, keyword)?
            .ok_or_else(|| TemplateError::MalformedSyntax {
                message: format!("Unclosed {} block '{} {}'", keyword, keyword, args),
                line: token.line,
            })?;
        let body = &template[body_start..body_start + body_len];

        match keyword {
            "each" => self.process_each_loop(args, body, context, start, output, token.line)?,
            "if" => self.process_if(args, body, context, start, output, token.line)?,
            _ => output.push_str(&self.render_fragment(body, context, start)?),
        }

        Ok(body_start + body_len + end_len)
    }

    /// Render an each loop body once per array item
    fn process_each_loop(
        &self,
        args: &str,
        body: &str,
        context: &TemplateContext,
        start: Instant,
        output: &mut String,
        line: usize,
    ) -> Result<(), TemplateError> {
        let (key, var_name) = parse_each_syntax(args, line)?;

        let Some(value) = resolve_key(context.data(), key) else {
            return self.undefined(key, line);
        };
        let items = value
            .as_array()
            .ok_or_else(|| TemplateError::MalformedSyntax {
                message: format!("Key '{}' is not an array", key),
                line,
            })?;

        for (index, item) in items.iter().enumerate() {
            let loop_context =
                create_loop_context(context.data(), var_name, item.clone(), index, items.len());
            let rendered = self.render_fragment(body, &loop_context, start)?;
            output.push_str(&rendered);
        }
        Ok(())
    }

    /// Render the matching branch of an if block
    fn process_if(
        &self,
        args: &str,
        body: &str,
        context: &TemplateContext,
        start: Instant,
        output: &mut String,
        line: usize,
    ) -> Result<(), TemplateError> {
        let (key, negated) = parse_if_syntax(args, line)?;
        let truthy = resolve_key(context.data(), key).is_some_and(is_truthy);
        let (then_branch, else_branch) = split_else(body, &self.syntax)?;

        let branch = if truthy != negated {
            Some(then_branch)
        } else {
            else_branch
        };
        if let Some(branch) = branch {
            output.push_str(&self.render_fragment(branch, context, start)?);
        }
        Ok(())
    }

    /// Process a regular placeholder (`key` or `nested.key`)
    fn process_placeholder(
        &self,
        key: &str,
        context: &TemplateContext,
        output: &mut String,
        line: usize,
    ) -> Result<(), TemplateError> {
        match resolve_key(context.data(), key) {
            Some(value) => {
                output.push_str(&stringify_value(value, key)?);
                Ok(())
            }
            None => self.undefined(key, line),
        }
    }

    fn undefined(&self, key: &str, line: usize) -> Result<(), TemplateError> {
        match self.undefined {
            UndefinedBehavior::Strict => Err(TemplateError::UndefinedKey {
                key: key.to_string(),
                line,
            }),
            UndefinedBehavior::Lenient => {
                log::warn!("Undefined key '{}' at line {} rendered as empty", key, line);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests;
