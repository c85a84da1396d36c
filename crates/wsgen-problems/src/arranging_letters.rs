//! Counting distinct arrangements of a word with repeated letters

use rand::seq::SliceRandom;
use rand::RngCore;
use std::path::PathBuf;
use toml::Value;
use wsgen_core::problem::{initialize, Problem, ProblemBase};
use wsgen_core::Result;

/// Words with at least one repeated letter
pub const WORDS: [&str; 8] = [
    "celebration",
    "letter",
    "ingenious",
    "balloon",
    "racecar",
    "winnipeg",
    "hannah",
    "mississippi",
];

/// How many distinct arrangements can be made of the letters in a word?
///
/// Variables: `word`, `wrong_ans` (letter count, the naive answer),
/// `multiples` (counts of repeated letters) and `answer`.
#[derive(Debug, Clone)]
pub struct ArrangingLetters {
    base: ProblemBase,
}

impl ArrangingLetters {
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

impl Problem for ArrangingLetters {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn setup(&mut self, rng: &mut dyn RngCore) {
        let word = WORDS.choose(rng).copied().unwrap_or(WORDS[0]);
        let multiples = letter_multiples(word);

        let vars = self.base.vars_mut();
        vars.insert("word".to_string(), word.into());
        vars.insert(
            "wrong_ans".to_string(),
            Value::Integer(word.chars().count() as i64),
        );
        vars.insert(
            "multiples".to_string(),
            Value::Array(
                multiples
                    .iter()
                    .map(|&m| Value::Integer(m as i64))
                    .collect(),
            ),
        );
        vars.insert(
            "answer".to_string(),
            Value::Integer(arrangements(word) as i64),
        );
    }
}

/// Letter occurrence counts in order of first appearance
fn letter_counts(word: &str) -> Vec<(char, u64)> {
    let mut counts: Vec<(char, u64)> = Vec::new();
    for letter in word.chars() {
        match counts.iter_mut().find(|(c, _)| *c == letter) {
            Some((_, count)) => *count += 1,
            None => counts.push((letter, 1)),
        }
    }
    counts
}

/// Occurrence counts greater than one, in order of each letter's first appearance
pub fn letter_multiples(word: &str) -> Vec<u64> {
    letter_counts(word)
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(_, count)| count)
        .collect()
}

/// Distinct arrangements: n! / (m1! m2! ...)
///
/// Built as a product of binomial coefficients so intermediate values stay
/// no larger than the result.
pub fn arrangements(word: &str) -> u64 {
    let mut result: u64 = 1;
    let mut placed: u64 = 0;
    for (_, count) in letter_counts(word) {
        for i in 1..=count {
            result = result * (placed + i) / i;
        }
        placed += count;
    }
    result
}
