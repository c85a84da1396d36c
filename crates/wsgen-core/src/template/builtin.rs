//! Builtin document templates

/// LaTeX worksheet for the `latex` syntax preset
pub const SAMPLE_TEX: &str = include_str!("../../builtin_templates/sample.tex");

/// Typst worksheet for the `braces` syntax preset
pub const SAMPLE_TYP: &str = include_str!("../../builtin_templates/sample.typ");

/// Get builtin document template by name
pub fn get_builtin_template(name: &str) -> Option<&'static str> {
    match name {
        "sample.tex" => Some(SAMPLE_TEX),
        "sample.typ" => Some(SAMPLE_TYP),
        _ => None,
    }
}

/// Names of all builtin templates
pub fn builtin_template_names() -> &'static [&'static str] {
    &["sample.tex", "sample.typ"]
}
