//! Loop rendering tests for template engine

use super::helpers::{nested_context, render_braces};
use super::*;
use toml::{toml, Value};

#[test]
fn test_render_each_loop() {
    let context = nested_context();
    let template = r#"{{each worksheet.problems |p|}}
Problem: {{p.title}}
{{/each}}"#;
    let result = render_braces(template, &context).unwrap();
    assert!(result.contains("Problem: Arranging Letters"));
    assert!(result.contains("Problem: Binomial Expansion"));
}

#[test]
fn test_render_each_loop_with_spaces() {
    let context = nested_context();
    let template = r#"{{ each worksheet.problems |p| }}
Problem: {{ p.title }}
{{ /each }}"#;
    let result = render_braces(template, &context).unwrap();
    assert!(result.contains("Problem: Arranging Letters"));
    assert!(result.contains("Problem: Binomial Expansion"));
}

#[test]
fn test_render_inline_each_preserves_order() {
    let context = nested_context();
    let template = "{{each worksheet.problems |p|}}{{p.title}};{{/each}}";
    let result = render_braces(template, &context).unwrap();
    assert_eq!(result, "Arranging Letters;Binomial Expansion;");
}

#[test]
fn test_render_each_with_end_keyword() {
    let context = nested_context();
    let template = "{{each worksheet.problems |p|}}{{p.points}}{{endeach}}";
    let result = render_braces(template, &context).unwrap();
    assert_eq!(result, "46");
}

#[test]
fn test_render_loop_metadata() {
    let data = toml! {
        items = ["a", "b", "c"]
    };
    let context = TemplateContext::new(Value::Table(data));
    let template =
        "{{each items |x|}}{{loop.index}}.{{x}}{{if not loop.last}}, {{/if}}{{/each}}";
    let result = render_braces(template, &context).unwrap();
    assert_eq!(result, "1.a, 2.b, 3.c");
}

#[test]
fn test_render_nested_each_loops() {
    let data = toml! {
        [[sections]]
        title = "Counting"
        [[sections.problems]]
        name = "Letters"
        [[sections.problems]]
        name = "Committees"

        [[sections]]
        title = "Algebra"
        [[sections.problems]]
        name = "Binomial"
    };
    let context = TemplateContext::new(Value::Table(data));

    let template = r#"{{each sections |section|}}
= {{section.title}}
{{each section.problems |problem|}}
- {{problem.name}}
{{/each}}
{{/each}}"#;

    let result = render_braces(template, &context).unwrap();
    assert!(result.contains("Counting"));
    assert!(result.contains("Letters"));
    assert!(result.contains("Committees"));
    assert!(result.contains("Algebra"));
    assert!(result.contains("Binomial"));
}

#[test]
fn test_render_empty_array() {
    let data = toml! {
        items = []
    };
    let context = TemplateContext::new(Value::Table(data));
    let result = render_braces("{{each items |item|}}{{item}}{{/each}}", &context).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_render_each_over_undefined_is_empty_when_lenient() {
    let context = nested_context();
    let result = render_braces("[{{each missing |m|}}{{m}}{{/each}}]", &context).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_render_each_over_scalar_fails() {
    let context = nested_context();
    let result = render_braces("{{each worksheet.title |t|}}{{t}}{{/each}}", &context);
    match result {
        Err(TemplateError::MalformedSyntax { message, .. }) => {
            assert!(message.contains("not an array"));
        }
        _ => panic!("Expected MalformedSyntax error"),
    }
}
