//! Solving for `n` from the power of `x` in one term of `(A x^B + C x^D)^n`

use rand::{Rng, RngCore};
use std::path::PathBuf;
use toml::Value;
use wsgen_core::problem::{initialize, Problem, ProblemBase};
use wsgen_core::Result;

/// Power of `x` in the `term`-th term (1-based) of `(A x^B + C x^D)^n`
///
/// Valid for `1 <= term <= n + 1`.
pub fn term_exponent(b: i64, d: i64, n: i64, term: i64) -> i64 {
    b * (n - term + 1) + d * (term - 1)
}

/// English ordinal for a positive integer: 1st, 2nd, 3rd, 4th, 11th, 22nd
pub fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Randomly drawn coefficients of one binomial problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTerms {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub n: i64,
    pub term: i64,
}

impl BinomialTerms {
    /// Draw `A, C` from ±[2, 9], `B, D` from [2, 5] with `D != B`, `n` from
    /// [3, 16] and `term` from [2, n]
    ///
    /// Distinct exponents make the power of `x` identify a single term.
    pub fn draw(rng: &mut dyn RngCore) -> Self {
        let a = rng.gen_range(2..=9) * random_sign(rng);
        let b = rng.gen_range(2..=5);
        let c = rng.gen_range(2..=9) * random_sign(rng);
        let d = loop {
            let d = rng.gen_range(2..=5);
            if d != b {
                break d;
            }
        };
        let n = rng.gen_range(3..=16);
        let term = rng.gen_range(2..=n);

        Self { a, b, c, d, n, term }
    }

    pub fn term_exponent(&self) -> i64 {
        term_exponent(self.b, self.d, self.n, self.term)
    }

    /// Template variables
    pub fn to_vars(&self) -> toml::Table {
        let mut vars = toml::Table::new();
        vars.insert("A".to_string(), Value::Integer(self.a));
        vars.insert("B".to_string(), Value::Integer(self.b));
        vars.insert("C".to_string(), Value::Integer(self.c));
        vars.insert("D".to_string(), Value::Integer(self.d));
        vars.insert("n".to_string(), Value::Integer(self.n));
        vars.insert("term".to_string(), Value::Integer(self.term));
        vars.insert(
            "term_exponent".to_string(),
            Value::Integer(self.term_exponent()),
        );
        vars.insert("k".to_string(), Value::Integer(self.term - 1));
        vars.insert("ordinal".to_string(), ordinal(self.term).into());
        let op = if self.c < 0 { "-" } else { "+" };
        vars.insert("op".to_string(), op.into());
        vars.insert("C_abs".to_string(), Value::Integer(self.c.abs()));
        vars
    }
}

fn random_sign(rng: &mut dyn RngCore) -> i64 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

/// Find `n` given which term of a binomial expansion carries a power of `x`
#[derive(Debug, Clone)]
pub struct BinomialExpansionSolveN {
    base: ProblemBase,
}

impl BinomialExpansionSolveN {
    pub fn new(title: impl Into<String>, template_path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_rng(title, template_path, &mut rand::thread_rng())
    }

    pub fn with_rng(
        title: impl Into<String>,
        template_path: impl Into<PathBuf>,
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        let problem = Self {
            base: ProblemBase::new(title, template_path)?,
        };
        Ok(initialize(problem, rng))
    }
}

impl Problem for BinomialExpansionSolveN {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn setup(&mut self, rng: &mut dyn RngCore) {
        let terms = BinomialTerms::draw(rng);
        self.base.set_vars(terms.to_vars());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_term_exponent_example() {
        let terms = BinomialTerms {
            a: 2,
            b: 3,
            c: -1,
            d: 2,
            n: 5,
            term: 3,
        };
        assert_eq!(terms.term_exponent(), 13);
    }

    #[test]
    fn test_term_exponent_bounds() {
        // First term is pure (A x^B)^n, last is (C x^D)^n
        assert_eq!(term_exponent(3, 2, 5, 1), 15);
        assert_eq!(term_exponent(3, 2, 5, 6), 10);
    }

    #[test]
    fn test_ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 16, 21, 22, 23].map(ordinal).to_vec();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "16th", "21st", "22nd", "23rd"]
        );
    }

    #[test]
    fn test_draw_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let t = BinomialTerms::draw(&mut rng);
            assert!((2..=9).contains(&t.a.abs()));
            assert!((2..=9).contains(&t.c.abs()));
            assert!((2..=5).contains(&t.b));
            assert!((2..=5).contains(&t.d));
            assert_ne!(t.b, t.d);
            assert!((3..=16).contains(&t.n));
            assert!((2..=t.n).contains(&t.term));
        }
    }

    #[test]
    fn test_draw_uses_both_signs() {
        let mut rng = StdRng::seed_from_u64(5);
        let draws: Vec<BinomialTerms> = (0..200).map(|_| BinomialTerms::draw(&mut rng)).collect();
        assert!(draws.iter().any(|t| t.a < 0));
        assert!(draws.iter().any(|t| t.a > 0));
        assert!(draws.iter().any(|t| t.c < 0));
    }

    #[test]
    fn test_exponent_identifies_term() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let t = BinomialTerms::draw(&mut rng);
            let matching = (1..=t.n + 1)
                .filter(|&term| term_exponent(t.b, t.d, t.n, term) == t.term_exponent())
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn test_vars() {
        let terms = BinomialTerms {
            a: 4,
            b: 2,
            c: -7,
            d: 5,
            n: 9,
            term: 4,
        };
        let vars = terms.to_vars();
        assert_eq!(vars["term_exponent"].as_integer(), Some(2 * 6 + 5 * 3));
        assert_eq!(vars["k"].as_integer(), Some(3));
        assert_eq!(vars["op"].as_str(), Some("-"));
        assert_eq!(vars["C_abs"].as_integer(), Some(7));
        assert_eq!(vars["ordinal"].as_str(), Some("4th"));
    }

    #[test]
    fn test_setup_matches_draw() {
        let problem = BinomialExpansionSolveN::with_rng(
            "Binomial",
            "b.tex",
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let expected = BinomialTerms::draw(&mut StdRng::seed_from_u64(42)).to_vars();
        assert_eq!(problem.vars(), &expected);
    }
}
