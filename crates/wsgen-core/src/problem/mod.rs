//! Problem contract
//!
//! A problem is one exercise: a title, a template file holding a `problem`
//! block and a `solution` block, and the variables its [`Problem::setup`]
//! computed. Concrete problems embed a [`ProblemBase`] and implement `setup`;
//! rendering is shared.

use crate::error::{Result, WorksheetError};
use crate::template::{TemplateContext, TemplateEngine};
use rand::RngCore;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the block holding the question text
pub const PROBLEM_BLOCK: &str = "problem";

/// Name of the block holding the worked solution
pub const SOLUTION_BLOCK: &str = "solution";

/// Shared handle to a problem held by worksheets
pub type ProblemRef = Arc<dyn Problem>;

/// State common to every problem
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemBase {
    title: String,
    template_path: PathBuf,
    vars: toml::Table,
}

impl ProblemBase {
    /// Validate the title and template path; `vars` starts empty
    ///
    /// The template file is not required to exist until render.
    pub fn new(title: impl Into<String>, template_path: impl Into<PathBuf>) -> Result<Self> {
        let title = title.into();
        let template_path = template_path.into();

        if title.trim().is_empty() {
            return Err(WorksheetError::type_mismatch(
                "non-empty title",
                "empty string",
            ));
        }
        if template_path.as_os_str().is_empty() {
            return Err(WorksheetError::type_mismatch(
                "template path",
                "empty path",
            ));
        }

        Ok(Self {
            title,
            template_path,
            vars: toml::Table::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn vars(&self) -> &toml::Table {
        &self.vars
    }

    pub fn vars_mut(&mut self) -> &mut toml::Table {
        &mut self.vars
    }

    /// Replace all variables
    pub fn set_vars(&mut self, vars: toml::Table) {
        self.vars = vars;
    }
}

/// Rendered question and solution text of one problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedProblem {
    pub title: String,
    pub problem: String,
    pub solution: String,
}

impl RenderedProblem {
    /// Table form used in document template contexts
    pub fn to_table(&self) -> toml::Table {
        let mut table = toml::Table::new();
        table.insert("title".into(), self.title.clone().into());
        table.insert("problem".into(), self.problem.clone().into());
        table.insert("solution".into(), self.solution.clone().into());
        table
    }
}

/// One exercise with randomized variables
///
/// `setup` has no default: every problem must say how its variables are
/// produced. It runs once, during construction (see [`initialize`]).
pub trait Problem: fmt::Debug + Send + Sync {
    fn base(&self) -> &ProblemBase;

    /// Populate the variables; must not touch anything else
    fn setup(&mut self, rng: &mut dyn RngCore);

    fn title(&self) -> &str {
        self.base().title()
    }

    fn template_path(&self) -> &Path {
        self.base().template_path()
    }

    fn vars(&self) -> &toml::Table {
        self.base().vars()
    }

    /// Render the `problem` and `solution` blocks of the template file
    ///
    /// The file is read on every call. Results are trimmed.
    fn render(&self, engine: &TemplateEngine) -> Result<RenderedProblem> {
        render_blocks(engine, self.title(), self.template_path(), self.vars())
    }
}

/// Run `setup` on a freshly built problem
///
/// Logs a warning when setup leaves the variables empty.
pub fn initialize<P: Problem>(mut problem: P, rng: &mut dyn RngCore) -> P {
    problem.setup(rng);
    if problem.vars().is_empty() {
        log::warn!(
            "Problem '{}' has no variables after setup; placeholders will be undefined",
            problem.title()
        );
    } else {
        log::debug!(
            "Problem '{}' set up with {} variables",
            problem.title(),
            problem.vars().len()
        );
    }
    problem
}

/// Extract and render the two blocks of a problem template file
pub fn render_blocks(
    engine: &TemplateEngine,
    title: &str,
    template_path: &Path,
    vars: &toml::Table,
) -> Result<RenderedProblem> {
    let text = std::fs::read_to_string(template_path)?;
    let extractor = engine.extractor();

    let problem_block = extractor
        .extract(&text, PROBLEM_BLOCK)?
        .ok_or_else(|| WorksheetError::MissingBlock {
            block: PROBLEM_BLOCK.to_string(),
            path: template_path.to_path_buf(),
        })?;
    let solution_block = extractor
        .extract(&text, SOLUTION_BLOCK)?
        .ok_or_else(|| WorksheetError::MissingBlock {
            block: SOLUTION_BLOCK.to_string(),
            path: template_path.to_path_buf(),
        })?;

    let context = TemplateContext::from(vars.clone());
    let problem = engine.render(problem_block, &context)?;
    let solution = engine.render(solution_block, &context)?;

    Ok(RenderedProblem {
        title: title.to_string(),
        problem: problem.trim().to_string(),
        solution: solution.trim().to_string(),
    })
}

#[cfg(test)]
mod tests;
