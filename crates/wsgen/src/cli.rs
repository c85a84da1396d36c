//! CLI command structure using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wsgen_core::SyntaxPreset;
use wsgen_core::config::CONFIG_FILE_NAME;

#[derive(Parser)]
#[command(name = "wsgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a worksheet project with sample problem templates
    New {
        /// Directory to create (may already exist)
        dir: PathBuf,
    },

    /// Render a worksheet from its configuration
    Generate(GenerateArgs),

    /// Verify that problem templates contain problem and solution blocks
    Check {
        /// Problem template files
        #[arg(required = true)]
        templates: Vec<PathBuf>,

        /// Delimiter preset the templates are written in
        #[arg(long, value_enum, default_value_t = SyntaxArg::Latex)]
        syntax: SyntaxArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Worksheet configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output file (default: worksheet.tex or worksheet.typ next to the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing output file
    #[arg(short, long)]
    pub force: bool,

    /// Seed for problem variables (overrides the config)
    #[arg(long, env = "WSGEN_SEED")]
    pub seed: Option<u64>,

    /// Leave the problems out of the document
    #[arg(long)]
    pub no_problems: bool,

    /// Leave the solutions out of the document
    #[arg(long)]
    pub no_solutions: bool,

    /// Print the document instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "force", "json"])]
    pub stdout: bool,

    /// Print a JSON summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SyntaxArg {
    Latex,
    Braces,
}

impl From<SyntaxArg> for SyntaxPreset {
    fn from(arg: SyntaxArg) -> Self {
        match arg {
            SyntaxArg::Latex => SyntaxPreset::Latex,
            SyntaxArg::Braces => SyntaxPreset::Braces,
        }
    }
}
