//! Command-line interface entry point for `GradeAdvisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use grade_advisor::config::Config;
use grade_advisor::info;
use grade_advisor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Grade {
            workbook,
            course,
            mode,
            what_if,
        } => {
            commands::grade::run(
                workbook.as_deref(),
                course.as_deref(),
                &mode,
                &what_if,
                &config,
            );
        }
        Command::Gpa { workbook } => {
            commands::gpa::run(workbook.as_deref(), &config);
        }
        Command::Recommend {
            workbook,
            course,
            advice,
        } => {
            commands::recommend::run(workbook.as_deref(), course.as_deref(), advice, &config);
        }
        Command::Check {
            grade,
            passing,
            stress,
            hours,
            elective,
        } => {
            commands::recommend::check(grade, passing, stress, hours, elective, &config);
        }
        Command::Report {
            workbook,
            output,
            format,
        } => {
            commands::report::run(workbook.as_deref(), output.as_deref(), &format, &config);
        }
    }
}
