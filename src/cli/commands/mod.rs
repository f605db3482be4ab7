//! CLI command handlers for `GradeAdvisor`.
//!
//! Each command is implemented in its own submodule. Workbook loading is shared
//! here so every command resolves paths and defaults the same way.

pub mod config;
pub mod gpa;
pub mod grade;
pub mod recommend;
pub mod report;

use grade_advisor::config::Config;
use grade_advisor::core::models::Course;
use grade_advisor::core::workbook::{load_workbook, Workbook};
use grade_advisor::{error, info, warn};
use std::path::{Path, PathBuf};

/// Workbook path from the argument, or the configured default
fn resolve_workbook_path(path: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None if !config.paths.workbook.is_empty() => Ok(PathBuf::from(&config.paths.workbook)),
        None => Err(
            "✗ No workbook given. Pass a path or run `gradeadvisor config set workbook <FILE>`"
                .to_string(),
        ),
    }
}

/// Load a workbook, fill configured defaults, and report validation warnings
///
/// # Errors
/// Returns a printable message if no path is known or the file cannot be loaded.
pub fn open_workbook(path: Option<&Path>, config: &Config) -> Result<Workbook, String> {
    let path = resolve_workbook_path(path, config)?;
    let mut workbook = load_workbook(&path).map_err(|e| {
        error!("Failed to load workbook {}: {e}", path.display());
        format!("✗ {e}")
    })?;

    workbook.apply_defaults(&config.grading);
    for warning in workbook.validate() {
        warn!("{}: {warning}", path.display());
    }
    info!("Workbook loaded: {}", path.display());
    Ok(workbook)
}

/// Courses to show: one if `course` is given, otherwise all of them
///
/// # Errors
/// Returns a printable message if the course id is not in the workbook.
pub fn select_courses<'a>(
    workbook: &'a Workbook,
    course: Option<&str>,
) -> Result<Vec<&'a Course>, String> {
    match course {
        Some(id) => workbook
            .find_course(id)
            .map(|c| vec![c])
            .ok_or_else(|| format!("✗ Course '{id}' not found in workbook")),
        None => Ok(workbook.courses.iter().collect()),
    }
}

/// Print a command failure and exit with status 1
pub fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
