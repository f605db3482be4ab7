//! Recommend and check command handlers
//!
//! `recommend` scores every graded course in a workbook; `check` scores a single
//! course described on the command line.

use super::{fail, open_workbook, select_courses};
use grade_advisor::config::Config;
use grade_advisor::core::advisor::{request_advice, AdviceContext, OfflineAdvisor};
use grade_advisor::core::recommendation::{recommend, RecommendationInput, RecommendationResult};
use grade_advisor::core::report::percent;
use grade_advisor::core::summary::CourseAnalysis;
use grade_advisor::error;
use std::path::Path;

/// Run the recommend command.
pub fn run(workbook_path: Option<&Path>, course: Option<&str>, advice: bool, config: &Config) {
    if let Err(err) = show_recommendations(workbook_path, course, advice, config) {
        error!("Recommend command failed: {err}");
        fail(&err);
    }
}

fn show_recommendations(
    workbook_path: Option<&Path>,
    course: Option<&str>,
    advice: bool,
    config: &Config,
) -> Result<(), String> {
    let workbook = open_workbook(workbook_path, config)?;
    let courses = select_courses(&workbook, course)?;

    println!("\n=== {} ===", workbook.display_title());
    for course in courses {
        let analysis = CourseAnalysis::analyze(course);
        println!("\n{} - {}", analysis.id, analysis.name);

        let (Some(input), Some(result)) = (&analysis.input, &analysis.recommendation) else {
            println!("  No graded work yet; nothing to recommend.");
            continue;
        };
        print_result(input, result);
        if advice {
            print_plan(&analysis.name, input, result);
        }
    }
    Ok(())
}

/// Run the check command.
pub fn check(
    grade: f64,
    passing: Option<f64>,
    stress: f64,
    hours: f64,
    elective: bool,
    config: &Config,
) {
    let input = RecommendationInput {
        current_grade: grade,
        passing_grade: passing.unwrap_or(config.grading.default_passing_grade),
        is_required: !elective,
        stress_level: stress,
        weekly_hours: hours,
    };
    let result = recommend(&input);

    println!();
    print_result(&input, &result);
    print_plan("This course", &input, &result);
}

fn print_result(input: &RecommendationInput, result: &RecommendationResult) {
    println!(
        "  Grade {} against {} to pass ({})",
        percent(Some(input.current_grade)),
        percent(Some(input.passing_grade)),
        if input.is_required {
            "required"
        } else {
            "elective"
        }
    );
    println!(
        "  Recommendation: {:.1} / 100, {}",
        result.score, result.risk_level
    );
    for line in &result.advice {
        println!("  - {line}");
    }
}

fn print_plan(course_name: &str, input: &RecommendationInput, result: &RecommendationResult) {
    let ctx = AdviceContext::from_recommendation(course_name, input, result);
    println!();
    for line in request_advice(&OfflineAdvisor, &ctx).lines() {
        println!("  {line}");
    }
}
