use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use relimport_rule::{Config, OutputFormat};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "relimport")]
#[command(about = "Keep JavaScript/TypeScript imports absolute", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Flag (and optionally rewrite) relative import paths
    NoRelativeImports(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::NoRelativeImports(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running relative import check (using {} threads)", num_threads);
            debug!("Config: root={:?}, cwd={:?}, config={:?}", cfg.root, cfg.cwd, cfg.config);

            let result = relimport_rule::run_no_relative_imports_check(cfg.clone())?;
            debug!("Found {} violations", result.violations.len());

            let elapsed_ms = start.elapsed().as_millis();

            if cfg.format == OutputFormat::Json {
                relimport_rule::print_violations_json(&mut stdout, &result)?;
            } else if result.violations.is_empty() {
                info!("No relative imports detected");
                relimport_rule::print_no_violations_message(&mut stdout)?;
            } else {
                relimport_rule::print_violations(&mut stdout, &result, &cfg)?;
            }

            if cfg.format == OutputFormat::Pretty {
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms on {} files (using {} threads).",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    result.files_analyzed.to_string().cyan(),
                    num_threads.to_string().cyan()
                )?;
            }
            stdout.flush()?;

            // Non-zero exit to fail CI
            if result.remaining() > 0 {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
