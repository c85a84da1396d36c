use crate::template::SyntaxPreset;
use serde::Serialize;

/// Default document template name
pub const DEFAULT_TEMPLATE: &str = "sample.tex";

/// Default worksheet title
pub const DEFAULT_TITLE: &str = "Worksheet";

/// Default right footer (LaTeX page counter, needs the `lastpage` package)
pub const DEFAULT_RFOOT: &str = r"Page \thepage of \pageref{LastPage}";

/// Document template used with the braces preset
pub const TYPST_TEMPLATE: &str = "sample.typ";

/// Right footer used with the braces preset; evaluated in the page footer context
pub const TYPST_RFOOT: &str = "Page #counter(page).display() of #counter(page).final().first()";

/// Document-level settings of a worksheet
///
/// Header and footer fields are passed to the document template as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksheetOptions {
    /// Document template name or path, resolved by the engine's loader
    pub template: String,
    /// Include the question text
    pub render_problems: bool,
    /// Include the worked solutions
    pub render_solutions: bool,
    pub title: String,
    pub lhead: String,
    pub chead: String,
    pub rhead: String,
    pub lfoot: String,
    pub cfoot: String,
    pub rfoot: String,
}

impl WorksheetOptions {
    /// Default options with `title`, which is also used as the left header
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            render_problems: true,
            render_solutions: true,
            lhead: title.clone(),
            title,
            chead: String::new(),
            rhead: String::new(),
            lfoot: String::new(),
            cfoot: String::new(),
            rfoot: DEFAULT_RFOOT.to_string(),
        }
    }

    /// Default options for documents written in `preset`
    ///
    /// The braces preset targets Typst, so it gets the Typst builtin template
    /// and page counter.
    pub fn for_preset(title: impl Into<String>, preset: SyntaxPreset) -> Self {
        let mut options = Self::new(title);
        if preset == SyntaxPreset::Braces {
            options.template = TYPST_TEMPLATE.to_string();
            options.rfoot = TYPST_RFOOT.to_string();
        }
        options
    }

    /// Header and footer fields in `lhead, chead, rhead, lfoot, cfoot, rfoot` order
    pub fn page_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("lhead", &self.lhead),
            ("chead", &self.chead),
            ("rhead", &self.rhead),
            ("lfoot", &self.lfoot),
            ("cfoot", &self.cfoot),
            ("rfoot", &self.rfoot),
        ]
    }
}

impl Default for WorksheetOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WorksheetOptions::default();
        assert_eq!(options.template, "sample.tex");
        assert!(options.render_problems);
        assert!(options.render_solutions);
        assert_eq!(options.title, "Worksheet");
        assert_eq!(options.lhead, "Worksheet");
        assert_eq!(options.chead, "");
        assert_eq!(options.rhead, "");
        assert_eq!(options.lfoot, "");
        assert_eq!(options.cfoot, "");
        assert_eq!(options.rfoot, r"Page \thepage of \pageref{LastPage}");
    }

    #[test]
    fn test_lhead_follows_title() {
        let options = WorksheetOptions::new("Counting");
        assert_eq!(options.lhead, "Counting");
    }

    #[test]
    fn test_preset_defaults() {
        assert_eq!(
            WorksheetOptions::for_preset(DEFAULT_TITLE, SyntaxPreset::Latex),
            WorksheetOptions::default()
        );

        let typst = WorksheetOptions::for_preset("T", SyntaxPreset::Braces);
        assert_eq!(typst.template, "sample.typ");
        assert_eq!(typst.rfoot, TYPST_RFOOT);
        assert_eq!(typst.lhead, "T");
    }

    #[test]
    fn test_page_fields_are_distinct() {
        let mut options = WorksheetOptions::new("T");
        options.chead = "c".into();
        options.rhead = "r".into();
        options.lfoot = "lf".into();
        options.cfoot = "cf".into();

        let values: Vec<&str> = options.page_fields().iter().map(|(_, v)| *v).collect();
        assert_eq!(
            values,
            vec!["T", "c", "r", "lf", "cf", r"Page \thepage of \pageref{LastPage}"]
        );
    }
}
