mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::New { dir } => commands::new::run(dir, cli.verbose),
        Commands::Generate(args) => commands::generate::run(args, cli.verbose),
        Commands::Check {
            templates,
            syntax,
            json,
        } => commands::check::run(templates, syntax.into(), json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Library logs go to stderr; `RUST_LOG` overrides the level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
