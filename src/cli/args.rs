//! CLI argument definitions for `GradeAdvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_advisor::config::ConfigOverrides;
use grade_advisor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `default_credits`, `workbook`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show current, best, worst and projected grades.
    ///
    /// Prints a category breakdown for every course in the workbook.
    Grade {
        /// Path to the semester workbook (defaults to config `workbook`)
        #[arg(value_name = "WORKBOOK")]
        workbook: Option<PathBuf>,

        /// Only show this course id
        #[arg(short, long, value_name = "ID")]
        course: Option<String>,

        /// Assumption for ungraded work: maintain, optimistic, realistic, conservative, pessimistic
        #[arg(short, long, value_name = "MODE", default_value = "maintain")]
        mode: String,

        /// Hypothetical score for an assignment, as NAME=SCORE (repeatable)
        #[arg(long = "set", value_name = "NAME=SCORE")]
        what_if: Vec<String>,
    },
    /// Compute the GPA per term and overall.
    Gpa {
        /// Path to the semester workbook (defaults to config `workbook`)
        #[arg(value_name = "WORKBOOK")]
        workbook: Option<PathBuf>,
    },
    /// Recommend whether to keep or drop each course.
    Recommend {
        /// Path to the semester workbook (defaults to config `workbook`)
        #[arg(value_name = "WORKBOOK")]
        workbook: Option<PathBuf>,

        /// Only show this course id
        #[arg(short, long, value_name = "ID")]
        course: Option<String>,

        /// Include the strategic advisor plan
        #[arg(long)]
        advice: bool,
    },
    /// Score a single course from the command line, without a workbook.
    Check {
        /// Current grade percentage
        #[arg(long, value_name = "PERCENT")]
        grade: f64,

        /// Passing grade percentage (defaults to config `default_passing_grade`)
        #[arg(long, value_name = "PERCENT")]
        passing: Option<f64>,

        /// Self-reported stress, 0-10
        #[arg(long, value_name = "LEVEL", default_value_t = 5.0)]
        stress: f64,

        /// Hours spent on the course per week
        #[arg(long, value_name = "HOURS", default_value_t = 0.0)]
        hours: f64,

        /// The course is an elective rather than a requirement
        #[arg(long)]
        elective: bool,
    },
    /// Generate a semester report from a workbook.
    ///
    /// Creates a formatted report with GPA, risk counts, and per-course advice.
    Report {
        /// Path to the semester workbook (defaults to config `workbook`)
        #[arg(value_name = "WORKBOOK")]
        workbook: Option<PathBuf>,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradeadvisor",
    about = "GradeAdvisor command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override credits assumed for courses that do not list any
    #[arg(long = "default-credits", value_name = "CREDITS")]
    pub default_credits: Option<f64>,

    /// Override passing grade assumed for courses that do not list one
    #[arg(long = "passing-grade", value_name = "PERCENT")]
    pub passing_grade: Option<f64>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config default workbook
    #[arg(long = "config-workbook", value_name = "FILE")]
    pub config_workbook: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(|p| path_string(p)),
            verbose: self.config_verbose,
            default_credits: self.default_credits,
            default_passing_grade: self.passing_grade,
            reports_dir: self.reports_dir.as_ref().map(|p| path_string(p)),
            workbook: self.config_workbook.as_ref().map(|p| path_string(p)),
        }
    }
}

fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}
