//! Generate command - render a worksheet from worksheet.toml

use crate::cli::GenerateArgs;
use crate::output::{print_json, print_text};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use wsgen_core::{Worksheet, WorksheetConfig, WorksheetOptions};
use wsgen_problems::build_problems;

/// `--json` output
#[derive(Debug, Serialize)]
struct GenerateOutput {
    output: String,
    title: String,
    template: String,
    seed: u64,
    problems: Vec<String>,
    render_problems: bool,
    render_solutions: bool,
}

pub fn run(args: GenerateArgs, verbose: bool) -> Result<()> {
    let config = WorksheetConfig::from_file(&args.config)?;
    let base_dir = WorksheetConfig::base_dir(&args.config);
    let engine = Arc::new(config.engine.build_engine(&base_dir)?);

    let options = worksheet_options(&config, &args);

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    log::info!("Using seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let problems = build_problems(&config.problems, &base_dir, &mut rng)?;
    if problems.is_empty() {
        log::warn!("{} has no [[problems]] entries", args.config.display());
    }

    let mut worksheet = Worksheet::with_options(engine, options);
    worksheet.extend(problems);

    if args.stdout {
        print_text(&worksheet.render()?)?;
        return Ok(());
    }

    let output = args.output.clone().unwrap_or_else(|| {
        base_dir.join(format!(
            "worksheet.{}",
            config.engine.syntax.output_extension()
        ))
    });

    if verbose {
        println!(
            "{} Rendering {} problems with {}",
            "→".cyan(),
            worksheet.count(),
            worksheet.options().template
        );
    }

    worksheet
        .save_to_file(&output, args.force)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    if args.json {
        print_json(&summary(&worksheet, &output, seed))?;
    } else {
        println!(
            "{} Generated {} ({} problems, seed {})",
            "✓".green().bold(),
            output.display(),
            worksheet.count(),
            seed
        );
    }

    Ok(())
}

/// Configured options with command-line overrides applied
fn worksheet_options(config: &WorksheetConfig, args: &GenerateArgs) -> WorksheetOptions {
    let mut options = config.worksheet.to_options(config.engine.syntax);
    if args.no_problems {
        options.render_problems = false;
    }
    if args.no_solutions {
        options.render_solutions = false;
    }
    options
}

fn summary(worksheet: &Worksheet, output: &Path, seed: u64) -> GenerateOutput {
    let options = worksheet.options();
    GenerateOutput {
        output: output.display().to_string(),
        title: options.title.clone(),
        template: options.template.clone(),
        seed,
        problems: worksheet.iter().map(|p| p.title().to_string()).collect(),
        render_problems: options.render_problems,
        render_solutions: options.render_solutions,
    }
}
