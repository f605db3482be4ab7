//! Grade command handler
//!
//! Prints current, best, worst and projected grades with a per-category
//! breakdown, optionally recomputed with `--set NAME=SCORE` hypotheticals.

use super::{fail, open_workbook, select_courses};
use grade_advisor::config::Config;
use grade_advisor::core::grading::{
    best_case, category_breakdown, current_grade, percentage_to_gpa, percentage_to_letter_grade,
    projected_grade, what_if, worst_case, AssumptionMode, CategoryScore,
};
use grade_advisor::core::models::Course;
use grade_advisor::core::report::percent;
use grade_advisor::{debug, error};
use std::collections::HashMap;
use std::fmt::Write;
use std::path::Path;

/// Run the grade command.
pub fn run(
    workbook_path: Option<&Path>,
    course: Option<&str>,
    mode: &str,
    what_if_args: &[String],
    config: &Config,
) {
    if let Err(err) = show_grades(workbook_path, course, mode, what_if_args, config) {
        error!("Grade command failed: {err}");
        fail(&err);
    }
}

fn show_grades(
    workbook_path: Option<&Path>,
    course: Option<&str>,
    mode: &str,
    what_if_args: &[String],
    config: &Config,
) -> Result<(), String> {
    let mode: AssumptionMode = mode.parse().map_err(|e| format!("✗ {e}"))?;
    let overrides = parse_overrides(what_if_args)?;
    let workbook = open_workbook(workbook_path, config)?;
    let courses = select_courses(&workbook, course)?;

    println!("\n=== {} ===", workbook.display_title());
    for course in courses {
        print_course(course, mode, &overrides);
    }
    Ok(())
}

/// Parse `NAME=SCORE` pairs into a what-if map
fn parse_overrides(args: &[String]) -> Result<HashMap<String, f64>, String> {
    args.iter()
        .map(|arg| {
            let (name, score) = arg
                .rsplit_once('=')
                .ok_or_else(|| format!("✗ Expected NAME=SCORE, got '{arg}'"))?;
            let score = score
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("✗ Invalid score in '{arg}'"))?;
            Ok((name.trim().to_string(), score))
        })
        .collect()
}

fn print_course(course: &Course, mode: AssumptionMode, overrides: &HashMap<String, f64>) {
    let snapshot = course.snapshot();
    let grade = current_grade(&snapshot);

    println!();
    match &course.term {
        Some(term) => println!("{} - {} ({term})", course.id, course.name),
        None => println!("{} - {}", course.id, course.name),
    }

    match grade {
        Some(g) => println!(
            "  Current:    {} ({}, {:.1})",
            percent(grade),
            percentage_to_letter_grade(g),
            percentage_to_gpa(g)
        ),
        None => println!("  Current:    no graded work yet"),
    }
    println!("  Best case:  {}", percent(best_case(&snapshot)));
    println!("  Worst case: {}", percent(worst_case(&snapshot)));
    println!(
        "  Projected ({mode}): {}",
        percent(projected_grade(&snapshot, mode))
    );

    if !overrides.is_empty() {
        let matched = course
            .assignments
            .iter()
            .filter(|a| overrides.contains_key(&a.name))
            .count();
        debug!("{}: {matched} what-if scores matched", course.id);
        if matched > 0 {
            println!("  What-if:    {}", percent(what_if(&snapshot, overrides)));
        }
    }

    let breakdown = category_breakdown(&snapshot);
    if !breakdown.is_empty() {
        println!("  Categories:");
        for category in &breakdown {
            println!("    {}", category_line(category));
        }
    }
}

fn category_line(category: &CategoryScore) -> String {
    let mut line = format!(
        "{:<16} {:>5.1}%  {:>7}  {} graded",
        category.name,
        category.weight,
        percent(category.percentage),
        category.graded
    );
    if category.dropped > 0 {
        let _ = write!(line, ", {} dropped", category.dropped);
    }
    if category.ungraded > 0 {
        let _ = write!(line, ", {} pending", category.ungraded);
    }
    line
}
