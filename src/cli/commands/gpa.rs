//! GPA command handler

use super::{fail, open_workbook};
use grade_advisor::config::Config;
use grade_advisor::core::grading::{cumulative_gpa, gpa_to_letter_grade, GradedCourse};
use grade_advisor::core::report::percent;
use grade_advisor::core::summary::{group_by_term, CourseAnalysis, TermGroup};
use grade_advisor::{error, verbose};
use std::path::Path;

/// Run the gpa command.
pub fn run(workbook_path: Option<&Path>, config: &Config) {
    if let Err(err) = show_gpa(workbook_path, config) {
        error!("GPA command failed: {err}");
        fail(&err);
    }
}

fn show_gpa(workbook_path: Option<&Path>, config: &Config) -> Result<(), String> {
    let workbook = open_workbook(workbook_path, config)?;
    let analyses: Vec<CourseAnalysis> = workbook
        .courses
        .iter()
        .map(CourseAnalysis::analyze)
        .collect();
    let groups = group_by_term(&analyses);

    println!("\n=== {} ===\n", workbook.display_title());
    for group in &groups {
        let summary = group.summary();
        println!(
            "{:<16} {}  ({} of {} courses graded, {:.1} credits)",
            group.label(),
            gpa_line(summary.gpa),
            summary.graded_courses,
            group.courses.len(),
            summary.total_credits
        );
        for analysis in &group.courses {
            verbose!(
                "    {:<10} {:>7}  {}",
                analysis.id,
                percent(analysis.current_grade),
                analysis.letter.unwrap_or("-")
            );
        }
    }

    let terms: Vec<Vec<GradedCourse>> = groups.iter().map(TermGroup::graded_courses).collect();
    println!("\n{:<16} {}", "Cumulative", gpa_line(cumulative_gpa(&terms)));
    Ok(())
}

fn gpa_line(gpa: Option<f64>) -> String {
    gpa.map_or_else(
        || "GPA -".to_string(),
        |g| format!("GPA {g:.2} ({})", gpa_to_letter_grade(g)),
    )
}
