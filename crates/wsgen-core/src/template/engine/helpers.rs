//! Helper functions for template rendering

use crate::template::error::TemplateError;
use toml::Value;

use super::TemplateContext;

/// Resolve a nested key from TOML data
pub(crate) fn resolve_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = data;

    for part in key.split('.') {
        current = match current {
            Value::Table(table) => table.get(part)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Stringify a TOML value for template output
pub(crate) fn stringify_value(value: &Value, key: &str) -> Result<String, TemplateError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Datetime(dt) => Ok(dt.to_string()),
        Value::Array(_) => Err(TemplateError::ArrayInNonEachContext {
            key: key.to_string(),
        }),
        Value::Table(_) => Err(TemplateError::TableInPlaceholder {
            key: key.to_string(),
        }),
    }
}

/// Truthiness used by `if` blocks
///
/// Empty strings, zero, `false` and empty collections are false.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty(),
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Boolean(b) => *b,
        Value::Datetime(_) => true,
        Value::Array(a) => !a.is_empty(),
        Value::Table(t) => !t.is_empty(),
    }
}

/// Create a loop context binding `var_name` to `item`
///
/// Also binds `loop.index` (1-based), `loop.first` and `loop.last`.
pub(crate) fn create_loop_context(
    base_data: &Value,
    var_name: &str,
    item: Value,
    index: usize,
    len: usize,
) -> TemplateContext {
    let mut table = if let Value::Table(t) = base_data {
        t.clone()
    } else {
        toml::map::Map::new()
    };

    let mut meta = toml::map::Map::new();
    meta.insert("index".to_string(), Value::Integer(index as i64 + 1));
    meta.insert("first".to_string(), Value::Boolean(index == 0));
    meta.insert("last".to_string(), Value::Boolean(index + 1 == len));

    table.insert("loop".to_string(), Value::Table(meta));
    table.insert(var_name.to_string(), item);
    TemplateContext::new(Value::Table(table))
}

/// Parse each loop syntax: "items |item|" → (key, var_name)
pub(crate) fn parse_each_syntax(rest: &str, line: usize) -> Result<(&str, &str), TemplateError> {
    let pipe_pos = rest
        .find('|')
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: expected |var| in 'each {}'", rest),
            line,
        })?;

    let key = rest[..pipe_pos].trim();
    let var_end = rest[pipe_pos + 1..]
        .find('|')
        .ok_or_else(|| TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: unclosed |var| in 'each {}'", rest),
            line,
        })?;

    let var_name = rest[pipe_pos + 1..pipe_pos + 1 + var_end].trim();
    if key.is_empty() || var_name.is_empty() {
        return Err(TemplateError::MalformedSyntax {
            message: format!("Invalid each syntax: empty key or variable in 'each {}'", rest),
            line,
        });
    }
    Ok((key, var_name))
}

/// Parse if syntax: "key" or "not key" → (key, negated)
pub(crate) fn parse_if_syntax(rest: &str, line: usize) -> Result<(&str, bool), TemplateError> {
    let (key, negated) = match rest.strip_prefix("not ") {
        Some(key) => (key.trim(), true),
        None => (rest.trim(), false),
    };

    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(TemplateError::MalformedSyntax {
            message: format!("Invalid if syntax: expected 'if key' or 'if not key', got 'if {}'", rest),
            line,
        });
    }
    Ok((key, negated))
}
