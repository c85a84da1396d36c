//! New command - scaffold a worksheet project

use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use wsgen_core::WorksheetConfig;
use wsgen_core::config::{CONFIG_FILE_NAME, ProblemSpec};
use wsgen_core::worksheet::DEFAULT_TITLE;
use wsgen_problems::sample_templates;

const PROBLEM_TEMPLATE_DIR: &str = "templates/problems";

/// Create `worksheet.toml` and the sample problem templates in `dir`
///
/// `dir` may already exist, but must not contain a `worksheet.toml`.
/// Existing template files are kept as they are.
pub fn run(dir: PathBuf, verbose: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    if verbose {
        println!("{} Creating worksheet project in {}", "→".cyan(), dir.display());
    }

    let template_dir = dir.join(PROBLEM_TEMPLATE_DIR);
    fs::create_dir_all(&template_dir)
        .with_context(|| format!("Failed to create {}", template_dir.display()))?;

    let mut config = WorksheetConfig::default();
    config.worksheet.title = Some(DEFAULT_TITLE.to_string());

    for (kind, file_name, contents) in sample_templates() {
        let path = template_dir.join(file_name);
        write_if_missing(&path, contents, verbose)?;

        config.problems.push(ProblemSpec::new(
            kind.name(),
            kind.default_title(),
            format!("{}/{}", PROBLEM_TEMPLATE_DIR, file_name),
        ));
    }

    config.to_file(&config_path)?;

    println!(
        "{} Created worksheet project at {}",
        "✓".green().bold(),
        dir.display()
    );
    print_next_steps(&dir);

    Ok(())
}

fn write_if_missing(path: &Path, contents: &str, verbose: bool) -> Result<()> {
    if path.exists() {
        if verbose {
            println!("  {} Keeping existing {}", "!".yellow(), path.display());
        }
        return Ok(());
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    if verbose {
        println!("  {} {}", "+".green(), path.display());
    }
    Ok(())
}

fn print_next_steps(dir: &Path) {
    println!("\n{} Next steps:", "→".cyan());
    println!("  1. cd {}", dir.display());
    println!("  2. Edit {} and templates/problems/", CONFIG_FILE_NAME);
    println!("  3. wsgen generate");
}
