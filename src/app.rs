// Declare modules
pub mod cli;
pub mod config;
pub mod dump;
pub mod errors;
pub mod formatter;
pub mod ignore_rules;
pub mod models;
pub mod prompt;
pub mod scanner;
pub mod signal;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::{catalog_locations, resolve_config};
use self::dump::write_dump;
use self::formatter::OutputGenerator;
use self::ignore_rules::load_ignore_spec;
use self::models::{RunOutcome, CONTEXT_DIR_NAME, DUMP_FILE_NAME};
use self::prompt::TerminalPicker;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<RunOutcome> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Identify the scan root
    let current_dir = match &args.directory {
        Some(dir) => dir
            .canonicalize()
            .context(format!("Cannot access directory {:?}", dir))?,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let context_dir = current_dir.join(CONTEXT_DIR_NAME);

    // 3. Resolve Configuration
    let locations = catalog_locations(args.install_dir.as_deref());
    let mut picker = TerminalPicker::stdio();
    let config = resolve_config(&current_dir, &locations, &mut picker)?;
    if config.was_interactive() {
        log::debug!("Language picked interactively; later runs reuse the local config");
    }

    // 4. Scan Directory
    let ignore_spec = load_ignore_spec(&current_dir)?;
    log::info!("Scanning for relevant files...");
    let scanner = Scanner::new(
        current_dir.clone(),
        &config.language.extensions,
        ignore_spec,
        &args.exclude.unwrap_or_default(),
    )?;
    let entries = scanner.collect();

    if entries.is_empty() {
        println!("No files found matching the criteria. Nothing to do.");
        return Ok(RunOutcome::NothingToDo);
    }

    // 5. Generate Output
    log::info!("Found {} files. Generating context file...", entries.len());
    let tree = OutputGenerator::generate_tree(&entries);
    let report = write_dump(
        &context_dir.join(DUMP_FILE_NAME),
        &entries,
        &current_dir,
        &tree,
    )?;

    // 6. Summary
    let rule = "-".repeat(50);
    println!("{}", rule);
    println!("Processing complete.");
    println!("Total files added to context: {}", report.listed);
    if !report.failed.is_empty() {
        println!(
            "Files omitted because they could not be read: {}",
            report.failed.len()
        );
    }
    println!("Repository dump created at: {}", report.output_path.display());
    println!("{}", rule);

    Ok(RunOutcome::Dumped(report))
}
