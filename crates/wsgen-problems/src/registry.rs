//! Problem kinds known to `worksheet.toml`

use crate::{ArrangingLetters, BinomialExpansionSolveN, StaticProblem};
use rand::RngCore;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use wsgen_core::config::ProblemSpec;
use wsgen_core::{ProblemRef, Result, WorksheetError};

/// Registered problem kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    ArrangingLetters,
    BinomialExpansionSolveN,
    Static,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 3] = [
        ProblemKind::ArrangingLetters,
        ProblemKind::BinomialExpansionSolveN,
        ProblemKind::Static,
    ];

    /// Name used in the `kind` field
    pub fn name(self) -> &'static str {
        match self {
            ProblemKind::ArrangingLetters => "arranging-letters",
            ProblemKind::BinomialExpansionSolveN => "binomial-expansion-solve-n",
            ProblemKind::Static => "static",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Heading used for newly scaffolded entries
    pub fn default_title(self) -> &'static str {
        match self {
            ProblemKind::ArrangingLetters => "Arranging Letters",
            ProblemKind::BinomialExpansionSolveN => "Binomial Expansion",
            ProblemKind::Static => "Problem",
        }
    }

    /// Whether the kind takes its variables from `vars`
    pub fn uses_vars(self) -> bool {
        matches!(self, ProblemKind::Static)
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build one problem of `kind`
pub fn build_problem(
    kind: ProblemKind,
    spec: &ProblemSpec,
    base_dir: &Path,
    rng: &mut dyn RngCore,
) -> Result<ProblemRef> {
    let path = spec.template_path(base_dir);
    let problem: ProblemRef = match kind {
        ProblemKind::ArrangingLetters => {
            Arc::new(ArrangingLetters::with_rng(&spec.title, path, rng)?)
        }
        ProblemKind::BinomialExpansionSolveN => {
            Arc::new(BinomialExpansionSolveN::with_rng(&spec.title, path, rng)?)
        }
        ProblemKind::Static => Arc::new(StaticProblem::new(&spec.title, path, spec.vars.clone())?),
    };
    Ok(problem)
}

/// Build every `[[problems]]` entry, `count` copies each, in file order
///
/// Each copy runs its own setup, so random kinds get fresh variables.
pub fn build_problems(
    specs: &[ProblemSpec],
    base_dir: &Path,
    rng: &mut dyn RngCore,
) -> Result<Vec<ProblemRef>> {
    let mut problems = Vec::new();

    for (i, spec) in specs.iter().enumerate() {
        let kind = ProblemKind::from_name(&spec.kind).ok_or_else(|| {
            WorksheetError::ConfigInvalidValue {
                field: format!("problems[{}].kind", i),
                reason: format!(
                    "unknown kind '{}' (expected one of: {})",
                    spec.kind,
                    known_kinds()
                ),
            }
        })?;

        if !kind.uses_vars() && !spec.vars.is_empty() {
            return Err(WorksheetError::ConfigInvalidValue {
                field: format!("problems[{}].vars", i),
                reason: format!("'{}' problems compute their own variables", kind),
            });
        }

        log::debug!("Building {} x '{}' ({})", spec.count, spec.title, kind);
        for _ in 0..spec.count {
            problems.push(build_problem(kind, spec, base_dir, rng)?);
        }
    }

    Ok(problems)
}

fn known_kinds() -> String {
    ProblemKind::ALL
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
