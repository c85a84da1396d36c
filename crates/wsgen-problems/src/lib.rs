//! Ready-made worksheet problems
//!
//! Each problem ships with a sample template written for the LaTeX syntax
//! preset.

pub mod arranging_letters;
pub mod binomial;
pub mod registry;
pub mod static_problem;

pub use arranging_letters::ArrangingLetters;
pub use binomial::BinomialExpansionSolveN;
pub use registry::{build_problem, build_problems, ProblemKind};
pub use static_problem::StaticProblem;

/// Sample problem template for [`ArrangingLetters`]
pub const ARRANGING_LETTERS_TEMPLATE: &str = include_str!("../templates/arranging_letters.tex");

/// Sample problem template for [`BinomialExpansionSolveN`]
pub const BINOMIAL_TEMPLATE: &str =
    include_str!("../templates/binomial_expansion_solve_for_n.tex");

/// Sample templates as `(file name, contents)` pairs with the kind they belong to
pub fn sample_templates() -> [(ProblemKind, &'static str, &'static str); 2] {
    [
        (
            ProblemKind::ArrangingLetters,
            "arranging_letters.tex",
            ARRANGING_LETTERS_TEMPLATE,
        ),
        (
            ProblemKind::BinomialExpansionSolveN,
            "binomial_expansion_solve_for_n.tex",
            BINOMIAL_TEMPLATE,
        ),
    ]
}
