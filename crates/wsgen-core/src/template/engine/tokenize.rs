//! Tokenization for template engine
//!
//! Forward-only scan over the template that recognizes the openers configured
//! in a [`Syntax`]. Each byte is visited once; the search for a closer starts
//! after the opener and the scan resumes after the closer.

use crate::template::error::TemplateError;
use crate::template::syntax::Syntax;

/// Keywords that open a block and take arguments
pub(crate) const BLOCK_KEYWORDS: [&str; 3] = ["each", "if", "block"];

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// `key` or `nested.key`
    Placeholder { key: String },

    /// `each items |var|`, `if key`, `block name`
    BlockStart { keyword: String, args: String },

    /// `/each`, `endif`, `endblock`, ...
    BlockEnd { keyword: String },

    /// `else` inside an `if` block
    Else,

    /// Comment token, renders as nothing
    Comment,

    /// Block-delimited content that is not a known tag
    Unknown { content: String },
}

/// Which delimiter family opened a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Variable,
    Block,
    /// Variable and block delimiters are identical
    Shared,
    Comment,
}

/// A single delimited token with position and classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Absolute byte position of the opener in the scanned text
    pub start: usize,
    /// Total length in bytes including opener and closer
    pub length: usize,
    /// Number of backslashes directly before the opener
    /// Odd count = escaped (literal), even = real (processed).
    /// Always 0 when the syntax does not support escapes.
    pub backslash_count: usize,
    /// Line number where token starts (for error messages)
    pub line: usize,
}

impl Token {
    /// Check if this token is escaped (odd backslash count)
    pub fn is_escaped(&self) -> bool {
        self.backslash_count % 2 == 1
    }

    /// Byte position just past the closer
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Iterator over tokens in a template string
///
/// Yields `Err(MalformedSyntax)` once for an opener without closer and then
/// stops.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    /// Openers sorted longest first so that `{{!` wins over `{{`
    openers: Vec<(&'a str, &'a str, Family)>,
    escapes: bool,
    pos: usize,
    line: usize,
    backslash_count: usize,
    done: bool,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream from template text
    pub fn new(text: &'a str, syntax: &'a Syntax) -> Self {
        let mut openers = Vec::with_capacity(3);
        if syntax.shares_tag_delimiters() {
            openers.push((
                syntax.variable().start.as_str(),
                syntax.variable().end.as_str(),
                Family::Shared,
            ));
        } else {
            openers.push((
                syntax.variable().start.as_str(),
                syntax.variable().end.as_str(),
                Family::Variable,
            ));
            openers.push((
                syntax.block().start.as_str(),
                syntax.block().end.as_str(),
                Family::Block,
            ));
        }
        openers.push((
            syntax.comment().start.as_str(),
            syntax.comment().end.as_str(),
            Family::Comment,
        ));
        openers.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            text,
            openers,
            escapes: syntax.supports_escapes(),
            pos: 0,
            line: 1,
            backslash_count: 0,
            done: false,
        }
    }

    /// Continue scanning from `pos`, which must not lie before the current position
    pub fn skip_to(&mut self, pos: usize) {
        if pos > self.pos {
            self.line += count_newlines(&self.text[self.pos..pos]);
            self.pos = pos;
        }
        self.backslash_count = 0;
    }

    fn match_opener(&self) -> Option<(&'a str, &'a str, Family)> {
        let rest = &self.text.as_bytes()[self.pos..];
        self.openers
            .iter()
            .find(|(open, _, _)| rest.starts_with(open.as_bytes()))
            .copied()
    }

    fn classify(content: &str, family: Family) -> TokenKind {
        let trimmed = content.trim();
        match family {
            Family::Comment => TokenKind::Comment,
            Family::Variable => TokenKind::Placeholder {
                key: trimmed.to_string(),
            },
            Family::Block => classify_tag(trimmed).unwrap_or_else(|| TokenKind::Unknown {
                content: trimmed.to_string(),
            }),
            Family::Shared => classify_tag(trimmed).unwrap_or_else(|| TokenKind::Placeholder {
                key: trimmed.to_string(),
            }),
        }
    }
}

/// Parse tag content into a block token
///
/// - `each items |var|` / `if key` / `block name` → BlockStart
/// - `/each` or `endeach` → BlockEnd
/// - `else` → Else
fn classify_tag(trimmed: &str) -> Option<TokenKind> {
    if trimmed == "else" {
        return Some(TokenKind::Else);
    }

    if let Some(rest) = trimmed.strip_prefix('/') {
        return Some(TokenKind::BlockEnd {
            keyword: rest.trim().to_string(),
        });
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) if BLOCK_KEYWORDS.contains(&word) => Some(TokenKind::BlockStart {
            keyword: word.to_string(),
            args: rest.trim().to_string(),
        }),
        Some(_) => None,
        None => trimmed
            .strip_prefix("end")
            .filter(|keyword| BLOCK_KEYWORDS.contains(keyword))
            .map(|keyword| TokenKind::BlockEnd {
                keyword: keyword.to_string(),
            }),
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            if let Some((open, close, family)) = self.match_opener() {
                let start = self.pos;
                let content_start = start + open.len();

                let Some(rel) = self.text[content_start..].find(close) else {
                    self.done = true;
                    return Some(Err(TemplateError::MalformedSyntax {
                        message: format!("Unclosed tag opened with '{}'", open),
                        line: self.line,
                    }));
                };

                let content = &self.text[content_start..content_start + rel];
                let end = content_start + rel + close.len();
                let token = Token {
                    kind: Self::classify(content, family),
                    start,
                    length: end - start,
                    backslash_count: if self.escapes { self.backslash_count } else { 0 },
                    line: self.line,
                };

                self.line += count_newlines(&self.text[start..end]);
                self.pos = end;
                self.backslash_count = 0;
                return Some(Ok(token));
            }

            match bytes[self.pos] {
                b'\\' => self.backslash_count += 1,
                b'\n' => {
                    self.line += 1;
                    self.backslash_count = 0;
                }
                _ => self.backslash_count = 0,
            }
            self.pos += 1;
        }

        None
    }
}

/// Count newlines in text
pub(crate) fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
