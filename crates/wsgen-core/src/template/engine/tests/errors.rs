//! Error handling tests for template engine

use super::helpers::{nested_context, render_braces, render_strict, simple_context};
use super::*;

#[test]
fn test_error_undefined_key_in_strict_mode() {
    let context = simple_context();
    let result = render_strict("Value: {{nonexistent}}", &context);
    match result {
        Err(TemplateError::UndefinedKey { key, line }) => {
            assert_eq!(key, "nonexistent");
            assert_eq!(line, 1);
        }
        _ => panic!("Expected UndefinedKey error"),
    }
}

#[test]
fn test_error_undefined_key_reports_line() {
    let context = simple_context();
    let result = render_strict("{{title}}\n\nline three {{nope}}", &context);
    match result {
        Err(TemplateError::UndefinedKey { key, line }) => {
            assert_eq!(key, "nope");
            assert_eq!(line, 3);
        }
        _ => panic!("Expected UndefinedKey error"),
    }
}

#[test]
fn test_error_undefined_nested_key() {
    let context = nested_context();
    let result = render_strict("Value: {{worksheet.nonexistent}}", &context);
    match result {
        Err(TemplateError::UndefinedKey { key, .. }) => {
            assert_eq!(key, "worksheet.nonexistent");
        }
        _ => panic!("Expected UndefinedKey error"),
    }
}

#[test]
fn test_error_undefined_each_key_in_strict_mode() {
    let context = nested_context();
    let result = render_strict("{{each missing |m|}}{{m}}{{/each}}", &context);
    assert!(matches!(result, Err(TemplateError::UndefinedKey { .. })));
}

#[test]
fn test_error_array_in_non_each() {
    let context = nested_context();
    let result = render_braces("Problems: {{worksheet.problems}}", &context);
    match result {
        Err(TemplateError::ArrayInNonEachContext { key }) => {
            assert_eq!(key, "worksheet.problems");
        }
        _ => panic!("Expected ArrayInNonEachContext error"),
    }
}

#[test]
fn test_error_table_in_placeholder() {
    let context = nested_context();
    let result = render_braces("Sheet: {{worksheet}}", &context);
    match result {
        Err(TemplateError::TableInPlaceholder { key }) => {
            assert_eq!(key, "worksheet");
        }
        _ => panic!("Expected TableInPlaceholder error"),
    }
}

#[test]
fn test_error_malformed_unclosed_placeholder() {
    let context = simple_context();
    let result = render_braces("Value: {{title", &context);
    assert!(matches!(result, Err(TemplateError::MalformedSyntax { .. })));
}

#[test]
fn test_error_malformed_unclosed_each() {
    let context = nested_context();
    let result = render_braces("{{each worksheet.problems |p|}}{{p.title}}", &context);
    match result {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("Unclosed") || message.contains("each"));
        }
        _ => panic!("Expected MalformedSyntax error"),
    }
}

#[test]
fn test_error_stray_end_tag() {
    let context = simple_context();
    let result = render_braces("{{title}}{{/each}}", &context);
    match result {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("without matching"));
        }
        _ => panic!("Expected MalformedSyntax error"),
    }
}

#[test]
fn test_error_display_mentions_key() {
    let err = TemplateError::UndefinedKey {
        key: "word".to_string(),
        line: 4,
    };
    assert_eq!(err.to_string(), "Undefined key 'word' at line 4");
}
