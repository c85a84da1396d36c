//! Problems with fixed variables

use rand::rngs::mock::StepRng;
use rand::RngCore;
use std::path::PathBuf;
use wsgen_core::problem::{initialize, Problem, ProblemBase};
use wsgen_core::Result;

/// Problem whose variables are given up front, e.g. from `[[problems]] vars`
#[derive(Debug, Clone)]
pub struct StaticProblem {
    base: ProblemBase,
    fixed: toml::Table,
}

impl StaticProblem {
    pub fn new(
        title: impl Into<String>,
        template_path: impl Into<PathBuf>,
        vars: toml::Table,
    ) -> Result<Self> {
        let problem = Self {
            base: ProblemBase::new(title, template_path)?,
            fixed: vars,
        };
        // setup never draws
        Ok(initialize(problem, &mut StepRng::new(0, 0)))
    }
}

impl Problem for StaticProblem {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn setup(&mut self, _rng: &mut dyn RngCore) {
        self.base.set_vars(self.fixed.clone());
    }
}
