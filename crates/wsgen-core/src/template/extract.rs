//! Named block extraction from problem templates
//!
//! A problem template carries its question and its worked solution as two
//! named blocks:
//!
//! ```text
//! \jblock{block problem} ... \jblock{endblock}
//! \jblock{block solution} ... \jblock{endblock}
//! ```
//!
//! Openers are found with a regex compiled once per [`Syntax`]; the matching
//! `endblock` is found by the engine's depth-aware scan, so named blocks may
//! nest.

use crate::template::engine::blocks::find_block_end;
use crate::template::error::TemplateError;
use crate::template::syntax::Syntax;
use regex::{Captures, Regex};

/// Finds `block <name>` ... `endblock` regions
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    opener: Regex,
    syntax: Syntax,
}

impl BlockExtractor {
    /// Compile the block opener pattern for the given syntax
    pub fn new(syntax: &Syntax) -> Result<Self, TemplateError> {
        let open = regex::escape(&syntax.block().start);
        let close = regex::escape(&syntax.block().end);
        let source = format!(r"{open}\s*block\s+(?P<name>[A-Za-z0-9_\-]+)\s*{close}");

        let opener = Regex::new(&source).map_err(|e| TemplateError::InvalidSyntax {
            message: format!("cannot build block pattern: {}", e),
        })?;
        Ok(Self {
            opener,
            syntax: syntax.clone(),
        })
    }

    /// Return the body of the first closed block called `name`
    ///
    /// The body is returned as written (not trimmed); an empty body is a
    /// valid block. Errors come from malformed tokens inside the body.
    pub fn extract<'a>(
        &self,
        text: &'a str,
        name: &str,
    ) -> Result<Option<&'a str>, TemplateError> {
        for caps in self.openers(text) {
            if caps.name("name").map(|m| m.as_str()) != Some(name) {
                continue;
            }
            if let Some(body) = self.body(text, &caps)? {
                return Ok(Some(body));
            }
        }
        Ok(None)
    }

    /// Names of all closed blocks in `text`, nested ones included, in order
    /// of their openers
    pub fn block_names<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TemplateError> {
        let mut names = Vec::new();
        for caps in self.openers(text) {
            if self.body(text, &caps)?.is_some() {
                if let Some(name) = caps.name("name") {
                    names.push(name.as_str());
                }
            }
        }
        Ok(names)
    }

    /// Unescaped openers in `text`
    fn openers<'a, 't>(&'a self, text: &'t str) -> impl Iterator<Item = Captures<'t>> + 'a
    where
        't: 'a,
    {
        self.opener.captures_iter(text).filter(move |caps| {
            caps.get(0)
                .is_some_and(|opener| !self.is_escaped(text, opener.start()))
        })
    }

    fn body<'t>(
        &self,
        text: &'t str,
        caps: &Captures<'t>,
    ) -> Result<Option<&'t str>, TemplateError> {
        let Some(opener) = caps.get(0) else {
            return Ok(None);
        };
        let rest = &text[opener.end()..];
        Ok(find_block_end(rest, &self.syntax, "block")?.map(|(end, _)| &rest[..end]))
    }

    fn is_escaped(&self, text: &str, pos: usize) -> bool {
        self.syntax.supports_escapes()
            && text[..pos].bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
    }
}
