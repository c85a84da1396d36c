//! Block matching utilities (closing tags for loops and conditionals)

use super::tokenize::{TokenKind, TokenStream};
use crate::template::error::TemplateError;
use crate::template::syntax::Syntax;

/// Find the closing tag matching a block opened just before `text`
///
/// Returns (position, length) of the closing tag token, or `None` when the
/// block is never closed.
///
/// # Nesting
///
/// Respects nested blocks of the same keyword and escape sequences.
pub(crate) fn find_block_end(
    text: &str,
    syntax: &Syntax,
    keyword: &str,
) -> Result<Option<(usize, usize)>, TemplateError> {
    let mut depth = 0;

    for token in TokenStream::new(text, syntax) {
        let token = token?;
        if token.is_escaped() {
            continue;
        }

        match &token.kind {
            TokenKind::BlockStart { keyword: kw, .. } if kw == keyword => {
                depth += 1;
            }
            TokenKind::BlockEnd { keyword: kw } if kw == keyword => {
                if depth == 0 {
                    return Ok(Some((token.start, token.length)));
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    Ok(None)
}

/// Split an `if` body at its top-level `else`
///
/// Returns (then_branch, else_branch). Tags nested in inner blocks are not
/// considered.
pub(crate) fn split_else<'a>(
    body: &'a str,
    syntax: &Syntax,
) -> Result<(&'a str, Option<&'a str>), TemplateError> {
    let mut depth: usize = 0;

    for token in TokenStream::new(body, syntax) {
        let token = token?;
        if token.is_escaped() {
            continue;
        }

        match &token.kind {
            TokenKind::BlockStart { .. } => depth += 1,
            TokenKind::BlockEnd { .. } => depth = depth.saturating_sub(1),
            TokenKind::Else if depth == 0 => {
                return Ok((&body[..token.start], Some(&body[token.end()..])));
            }
            _ => {}
        }
    }

    Ok((body, None))
}
