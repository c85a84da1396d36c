//! Check command - verify problem templates have both blocks

use crate::output::print_json;
use anyhow::{Result, bail};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use wsgen_core::SyntaxPreset;
use wsgen_core::problem::{PROBLEM_BLOCK, SOLUTION_BLOCK};
use wsgen_core::template::BlockExtractor;
use wsgen_core::template::loader::read_template;

#[derive(Debug, Serialize)]
struct CheckOutput {
    ok: bool,
    templates: Vec<TemplateCheck>,
}

#[derive(Debug, Serialize)]
struct TemplateCheck {
    path: String,
    ok: bool,
    /// Every named block found, nested ones included
    blocks: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TemplateCheck {
    fn run(extractor: &BlockExtractor, path: &Path) -> Self {
        let names = read_template(path).and_then(|text| {
            extractor
                .block_names(&text)
                .map(|names| names.into_iter().map(str::to_string).collect::<Vec<_>>())
        });

        match names {
            Ok(blocks) => {
                let missing: Vec<&'static str> = [PROBLEM_BLOCK, SOLUTION_BLOCK]
                    .into_iter()
                    .filter(|required| !blocks.iter().any(|name| name == required))
                    .collect();
                Self {
                    path: path.display().to_string(),
                    ok: missing.is_empty(),
                    blocks,
                    missing,
                    error: None,
                }
            }
            Err(e) => Self {
                path: path.display().to_string(),
                ok: false,
                blocks: Vec::new(),
                missing: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn run(
    templates: Vec<PathBuf>,
    syntax: SyntaxPreset,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let extractor = BlockExtractor::new(&syntax.syntax())?;
    let checks: Vec<TemplateCheck> = templates
        .iter()
        .map(|path| TemplateCheck::run(&extractor, path))
        .collect();
    let failed = checks.iter().filter(|c| !c.ok).count();

    if json {
        print_json(&CheckOutput {
            ok: failed == 0,
            templates: checks,
        })?;
    } else {
        print_human(&checks, verbose);
    }

    if failed > 0 {
        bail!("{} of {} templates failed the check", failed, templates.len());
    }
    Ok(())
}

fn print_human(checks: &[TemplateCheck], verbose: bool) {
    for check in checks {
        if check.ok {
            println!("{} {}", "✓".green(), check.path);
            if verbose {
                println!("    blocks: {}", check.blocks.join(", "));
            }
        } else if let Some(error) = &check.error {
            println!("{} {}: {}", "✗".red(), check.path, error);
        } else {
            println!(
                "{} {}: missing {} block",
                "✗".red(),
                check.path,
                check.missing.join(", ")
            );
        }
    }
}
