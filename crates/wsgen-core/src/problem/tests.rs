use super::*;
use crate::template::{Syntax, TemplateError, UndefinedBehavior};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wsgen_testkit::{
    braces_problem_template, latex_problem_template, temp_dir_in_workspace, write_file,
};

/// Problem whose setup installs one fixed variable
#[derive(Debug)]
struct FixedProblem {
    base: ProblemBase,
    value: Option<String>,
}

impl FixedProblem {
    fn build(title: &str, path: &Path, value: Option<&str>) -> Result<Self> {
        let problem = Self {
            base: ProblemBase::new(title, path)?,
            value: value.map(str::to_string),
        };
        Ok(initialize(problem, &mut StdRng::seed_from_u64(7)))
    }
}

impl Problem for FixedProblem {
    fn base(&self) -> &ProblemBase {
        &self.base
    }

    fn setup(&mut self, _rng: &mut dyn RngCore) {
        if let Some(value) = &self.value {
            self.base
                .vars_mut()
                .insert("var".to_string(), value.clone().into());
        }
    }
}

fn braces_engine() -> TemplateEngine {
    TemplateEngine::builder()
        .syntax(Syntax::braces())
        .build()
        .unwrap()
}

#[test]
fn test_render_substitutes_vars() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "p.typ",
        &braces_problem_template("Value: {{var}}", "Answer: {{ var }}"),
    );

    let problem = FixedProblem::build("Fixed", &path, Some("X")).unwrap();
    let rendered = problem.render(&braces_engine()).unwrap();

    assert_eq!(rendered.title, "Fixed");
    assert_eq!(rendered.problem, "Value: X");
    assert_eq!(rendered.solution, "Answer: X");
}

#[test]
fn test_render_latex_template() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "p.tex",
        &latex_problem_template(r"Spell \textsc{\jvar{var}}.", r"\jvar{var}"),
    );

    let problem = FixedProblem::build("Fixed", &path, Some("balloon")).unwrap();
    let rendered = problem.render(&TemplateEngine::new().unwrap()).unwrap();

    assert_eq!(rendered.problem, r"Spell \textsc{balloon}.");
    assert_eq!(rendered.solution, "balloon");
}

#[test]
fn test_empty_blocks_render_empty() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "p.typ",
        "{{block problem}}{{endblock}}{{block solution}}   {{endblock}}",
    );

    let problem = FixedProblem::build("Empty", &path, Some("X")).unwrap();
    let rendered = problem.render(&braces_engine()).unwrap();
    assert_eq!(rendered.problem, "");
    assert_eq!(rendered.solution, "");
}

#[test]
fn test_missing_problem_block() {
    let temp = temp_dir_in_workspace();
    let path = write_file(temp.path(), "p.typ", "{{block solution}}s{{endblock}}");

    let problem = FixedProblem::build("Fixed", &path, Some("X")).unwrap();
    match problem.render(&braces_engine()) {
        Err(WorksheetError::MissingBlock { block, path: p }) => {
            assert_eq!(block, "problem");
            assert_eq!(p, path);
        }
        other => panic!("Expected MissingBlock, got {:?}", other),
    }
}

#[test]
fn test_missing_solution_block() {
    let temp = temp_dir_in_workspace();
    let path = write_file(temp.path(), "p.typ", "{{block problem}}p{{endblock}}");

    let problem = FixedProblem::build("Fixed", &path, Some("X")).unwrap();
    match problem.render(&braces_engine()) {
        Err(WorksheetError::MissingBlock { block, .. }) => assert_eq!(block, "solution"),
        other => panic!("Expected MissingBlock, got {:?}", other),
    }
}

#[test]
fn test_missing_template_file_is_io_error() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("absent.tex");

    let problem = FixedProblem::build("Fixed", &path, Some("X")).unwrap();
    match problem.render(&braces_engine()) {
        Err(WorksheetError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io, got {:?}", other),
    }
}

#[test]
fn test_empty_title_rejected() {
    let result = FixedProblem::build("", Path::new("p.tex"), Some("X"));
    assert!(matches!(result, Err(WorksheetError::TypeMismatch { .. })));
}

#[test]
fn test_empty_path_rejected() {
    let result = FixedProblem::build("Fixed", Path::new(""), Some("X"));
    assert!(matches!(result, Err(WorksheetError::TypeMismatch { .. })));
}

#[test]
fn test_setup_runs_during_construction() {
    let problem = FixedProblem::build("Fixed", Path::new("p.tex"), Some("X")).unwrap();
    assert_eq!(problem.vars().get("var"), Some(&toml::Value::from("X")));
}

#[test]
fn test_empty_vars_render_blank_when_lenient() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "p.typ",
        &braces_problem_template("Value: {{var}}", "done"),
    );

    let problem = FixedProblem::build("Fixed", &path, None).unwrap();
    let rendered = problem.render(&braces_engine()).unwrap();
    assert_eq!(rendered.problem, "Value:");
}

#[test]
fn test_empty_vars_fail_when_strict() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "p.typ",
        &braces_problem_template("Value: {{var}}", "done"),
    );
    let engine = TemplateEngine::builder()
        .syntax(Syntax::braces())
        .undefined(UndefinedBehavior::Strict)
        .build()
        .unwrap();

    let problem = FixedProblem::build("Fixed", &path, None).unwrap();
    match problem.render(&engine) {
        Err(WorksheetError::Template(TemplateError::UndefinedKey { key, .. })) => {
            assert_eq!(key, "var")
        }
        other => panic!("Expected UndefinedKey, got {:?}", other),
    }
}

#[test]
fn test_render_is_repeatable_and_rereads_file() {
    let temp = temp_dir_in_workspace();
    let path = write_file(temp.path(), "p.typ", &braces_problem_template("{{var}}", "a"));
    let problem = FixedProblem::build("Fixed", &path, Some("X")).unwrap();
    let engine = braces_engine();

    assert_eq!(problem.render(&engine).unwrap(), problem.render(&engine).unwrap());

    write_file(temp.path(), "p.typ", &braces_problem_template("new {{var}}", "a"));
    assert_eq!(problem.render(&engine).unwrap().problem, "new X");
}

#[test]
fn test_rendered_problem_table() {
    let rendered = RenderedProblem {
        title: "T".to_string(),
        problem: "P".to_string(),
        solution: "S".to_string(),
    };
    let table = rendered.to_table();
    assert_eq!(table.get("problem"), Some(&toml::Value::from("P")));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_render_nested_named_block() {
    let temp = temp_dir_in_workspace();
    let path = write_file(
        temp.path(),
        "nested.tex",
        &latex_problem_template(
            r"Spell \jvar{var}. \jblock{block hint}Count letters.\jblock{endblock} Go.",
            r"\jvar{var}",
        ),
    );

    let problem = FixedProblem::build("Nested", &path, Some("balloon")).unwrap();
    let rendered = problem.render(&TemplateEngine::new().unwrap()).unwrap();

    assert_eq!(rendered.problem, "Spell balloon. Count letters. Go.");
    assert_eq!(rendered.solution, "balloon");
}
