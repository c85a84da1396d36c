//! Worksheet: an ordered collection of problems rendered into one document

mod options;

pub use options::{
    DEFAULT_RFOOT, DEFAULT_TEMPLATE, DEFAULT_TITLE, TYPST_RFOOT, TYPST_TEMPLATE, WorksheetOptions,
};

use crate::error::{Result, WorksheetError};
use crate::problem::{Problem, ProblemRef, RenderedProblem};
use crate::template::{TemplateContext, TemplateEngine};
use std::path::Path;
use std::sync::Arc;
use toml::Value;

/// Ordered, mutable list of problems plus document options
///
/// Insertion order is presentation order. The same problem handle may be
/// added more than once.
#[derive(Debug, Clone)]
pub struct Worksheet {
    engine: Arc<TemplateEngine>,
    options: WorksheetOptions,
    problems: Vec<ProblemRef>,
}

impl Worksheet {
    /// Empty worksheet with default options
    pub fn new(engine: Arc<TemplateEngine>) -> Self {
        Self::with_options(engine, WorksheetOptions::default())
    }

    pub fn with_options(engine: Arc<TemplateEngine>, options: WorksheetOptions) -> Self {
        log::debug!("Creating worksheet '{}'", options.title);
        Self {
            engine,
            options,
            problems: Vec::new(),
        }
    }

    pub fn engine(&self) -> &Arc<TemplateEngine> {
        &self.engine
    }

    pub fn options(&self) -> &WorksheetOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut WorksheetOptions {
        &mut self.options
    }

    /// Add a problem to the end
    pub fn append(&mut self, problem: ProblemRef) {
        self.problems.push(problem);
    }

    /// Wrap `problem` in a shared handle, append it and return the handle
    pub fn add<P: Problem + 'static>(&mut self, problem: P) -> ProblemRef {
        let handle: ProblemRef = Arc::new(problem);
        self.append(Arc::clone(&handle));
        handle
    }

    /// Insert before `index`; `index == count()` appends
    pub fn insert(&mut self, index: usize, problem: ProblemRef) -> Result<()> {
        if index > self.problems.len() {
            return Err(WorksheetError::IndexOutOfRange {
                index,
                len: self.problems.len(),
            });
        }
        self.problems.insert(index, problem);
        Ok(())
    }

    /// Remove the first occurrence of this exact handle
    pub fn remove(&mut self, problem: &ProblemRef) -> Result<ProblemRef> {
        let index = self
            .problems
            .iter()
            .position(|p| Arc::ptr_eq(p, problem))
            .ok_or(WorksheetError::NotFound)?;
        Ok(self.problems.remove(index))
    }

    pub fn pop(&mut self, index: usize) -> Result<ProblemRef> {
        if index >= self.problems.len() {
            return Err(WorksheetError::IndexOutOfRange {
                index,
                len: self.problems.len(),
            });
        }
        Ok(self.problems.remove(index))
    }

    pub fn clear(&mut self) {
        self.problems.clear();
    }

    /// Number of problems
    pub fn count(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[ProblemRef] {
        &self.problems
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProblemRef> {
        self.problems.iter()
    }

    /// Render every problem in order, stopping at the first failure
    pub fn render_problems(&self) -> Result<Vec<RenderedProblem>> {
        self.problems
            .iter()
            .map(|problem| problem.render(&self.engine))
            .collect()
    }

    /// Render the whole document
    pub fn render(&self) -> Result<String> {
        log::info!(
            "Rendering worksheet '{}' with {} problems",
            self.options.title,
            self.problems.len()
        );

        let rendered = self.render_problems()?;
        let context = self.document_context(&rendered);
        let template = self.engine.load_template(&self.options.template)?;
        Ok(self.engine.render(&template, &context)?)
    }

    /// Render and write the document to `path`
    ///
    /// An existing file is left untouched unless `overwrite` is set. Nothing
    /// is written when rendering fails.
    pub fn save_to_file(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(WorksheetError::type_mismatch("file path", "empty path"));
        }
        if path.file_name().is_none() {
            return Err(WorksheetError::type_mismatch(
                "file path",
                format!("'{}' (no file name)", path.display()),
            ));
        }
        if !overwrite && path.exists() {
            return Err(WorksheetError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let output = self.render()?;
        std::fs::write(path, output)?;
        log::info!("Saved worksheet to {}", path.display());
        Ok(())
    }

    fn document_context(&self, rendered: &[RenderedProblem]) -> TemplateContext {
        let options = &self.options;
        let problems: Vec<Value> = rendered.iter().map(|r| r.problem.as_str().into()).collect();
        let solutions: Vec<Value> = rendered.iter().map(|r| r.solution.as_str().into()).collect();

        let mut data = toml::Table::new();
        data.insert("title".into(), options.title.clone().into());
        data.insert("problems".into(), Value::Array(problems));
        data.insert("render_problems".into(), options.render_problems.into());
        data.insert("solutions".into(), Value::Array(solutions));
        data.insert("render_solutions".into(), options.render_solutions.into());
        for (name, value) in options.page_fields() {
            data.insert(name.into(), value.into());
        }
        data.insert(
            "entries".into(),
            Value::Array(
                rendered
                    .iter()
                    .map(|r| Value::Table(r.to_table()))
                    .collect(),
            ),
        );
        TemplateContext::from(data)
    }
}

impl<'a> IntoIterator for &'a Worksheet {
    type Item = &'a ProblemRef;
    type IntoIter = std::slice::Iter<'a, ProblemRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ProblemRef> for Worksheet {
    fn extend<I: IntoIterator<Item = ProblemRef>>(&mut self, iter: I) {
        self.problems.extend(iter);
    }
}
