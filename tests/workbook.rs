//! End-to-end tests: sample workbook -> analysis -> reports

use chrono::NaiveDate;
use grade_advisor::config::GradingConfig;
use grade_advisor::core::grading::cumulative_gpa;
use grade_advisor::core::models::{Season, Term};
use grade_advisor::core::recommendation::RiskLevel;
use grade_advisor::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use grade_advisor::core::summary::{group_by_term, CourseAnalysis, SemesterSummary, TermGroup};
use grade_advisor::core::workbook::{load_workbook, Workbook};
use std::path::PathBuf;
use tempfile::TempDir;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/fall_2026.toml")
}

fn sample() -> Workbook {
    let mut workbook = load_workbook(sample_path()).expect("sample workbook loads");
    workbook.apply_defaults(&GradingConfig::default());
    workbook
}

fn analyze(workbook: &Workbook) -> Vec<CourseAnalysis> {
    workbook
        .courses
        .iter()
        .map(CourseAnalysis::analyze)
        .collect()
}

fn analysis<'a>(analyses: &'a [CourseAnalysis], id: &str) -> &'a CourseAnalysis {
    analyses
        .iter()
        .find(|a| a.id == id)
        .unwrap_or_else(|| panic!("{id} missing from sample"))
}

#[test]
fn sample_workbook_is_clean() {
    let workbook = sample();
    assert_eq!(workbook.courses.len(), 5);
    assert_eq!(workbook.display_title(), "Fall 2026 Semester");
    assert!(workbook.validate().is_empty(), "{:?}", workbook.validate());
}

#[test]
fn defaults_fill_missing_course_fields() {
    let workbook = sample();
    let linear_algebra = workbook.find_course("math2331").expect("case-insensitive lookup");
    assert_eq!(linear_algebra.passing_grade, Some(60.0));
    assert_eq!(linear_algebra.term.as_deref(), Some("Fall 2026"));

    let ethics = workbook.find_course("PHIL1145").expect("ethics course");
    assert_eq!(ethics.credits, Some(3.0));
    assert_eq!(ethics.term.as_deref(), Some("Spring 2027"));
}

#[test]
fn sample_course_grades() {
    let workbook = sample();
    let analyses = analyze(&workbook);

    // Homework drops HW2: 38/40; Exams 85/100; Labs 18/20
    let fundies = analysis(&analyses, "CS2510");
    assert!(approx(fundies.current_grade.expect("graded"), 89.0));
    assert_eq!(fundies.letter, Some("B+"));
    assert_eq!(fundies.risk_level(), Some(RiskLevel::Safe));
    let best = fundies.best_case.expect("best");
    let worst = fundies.worst_case.expect("worst");
    assert!(worst < 89.0 && 89.0 < best);

    let linear_algebra = analysis(&analyses, "MATH2331");
    assert!(approx(linear_algebra.current_grade.expect("graded"), 49.4));
    assert_eq!(linear_algebra.letter, Some("F"));
    assert_eq!(linear_algebra.risk_level(), Some(RiskLevel::Critical));

    let studio = analysis(&analyses, "ARTD1020");
    assert!(!studio.is_required);
    assert_eq!(studio.risk_level(), Some(RiskLevel::Safe));

    let ethics = analysis(&analyses, "PHIL1145");
    assert_eq!(ethics.current_grade, None);
    assert!(ethics.recommendation.is_none());
}

#[test]
fn semester_summary_of_sample() {
    let workbook = sample();
    let analyses = analyze(&workbook);
    let summary = SemesterSummary::from_courses(&analyses);

    // (3.3 * 4 + 0.0 * 4 + 3.3 * 2 + 2.3 * 4) / 14
    let gpa = summary.gpa.expect("graded courses");
    assert!(approx(gpa, 29.0 / 14.0));
    assert_eq!(summary.letter, Some("C"));
    assert_eq!(summary.graded_courses, 4);
    assert_eq!(summary.ungraded_courses, 1);
    assert!(approx(summary.total_credits, 17.0));
    assert_eq!(summary.risk_counts.get(RiskLevel::Safe), 3);
    assert_eq!(summary.risk_counts.get(RiskLevel::Critical), 1);
    assert_eq!(summary.risk_counts.needing_attention(), 1);
}

#[test]
fn terms_are_grouped_chronologically() {
    let workbook = sample();
    let analyses = analyze(&workbook);
    let groups = group_by_term(&analyses);

    let labels: Vec<String> = groups.iter().map(TermGroup::label).collect();
    assert_eq!(labels, ["Summer 2026", "Fall 2026", "Spring 2027"]);
    assert_eq!(groups[1].term, Some(Term::new(Season::Fall, 2026)));
    assert_eq!(groups[1].courses.len(), 3);
    assert_eq!(groups[2].summary().gpa, None);

    let terms: Vec<_> = groups.iter().map(TermGroup::graded_courses).collect();
    let cumulative = cumulative_gpa(&terms).expect("graded terms");
    assert!(approx(cumulative, 29.0 / 14.0));
}

#[test]
fn reports_render_in_both_formats() {
    let workbook = sample();
    let analyses = analyze(&workbook);
    let summary = SemesterSummary::from_courses(&analyses);
    let generated_on = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
    let ctx = ReportContext::new(&workbook, &analyses, &summary, generated_on);

    let markdown = MarkdownReporter::new().render(&ctx).expect("markdown renders");
    assert!(markdown.starts_with("# Fall 2026 Semester"));
    assert!(markdown.contains("**Student:** Jordan Lee"));
    assert!(markdown.contains("_Generated 2026-10-18_"));
    assert!(markdown.contains("| Semester GPA | 2.07 (C) |"));
    assert!(markdown.contains("| CS2510 | Fundamentals of Computer Science 2 |"));
    assert!(markdown.contains("Not graded"));
    assert!(!markdown.contains("{{"));

    let html = HtmlReporter::new().render(&ctx).expect("html renders");
    assert!(html.contains("<title>Fall 2026 Semester</title>"));
    assert!(html.contains("Jordan Lee"));
    assert!(html.contains("pill critical"));
    assert!(html.contains("pill ungraded"));
    assert!(html.contains("Color &amp; Form &lt;Studio&gt;"));
    assert!(!html.contains("<Studio>"));
}

#[test]
fn generate_writes_report_file() {
    let workbook = sample();
    let analyses = analyze(&workbook);
    let summary = SemesterSummary::from_courses(&analyses);
    let generated_on = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
    let ctx = ReportContext::new(&workbook, &analyses, &summary, generated_on);

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = temp_dir
            .path()
            .join(format!("fall_2026.{}", format.extension()));
        let reporter: Box<dyn ReportGenerator> = match format {
            ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
            ReportFormat::Html => Box::new(HtmlReporter::new()),
        };
        reporter.generate(&ctx, &path).expect("report written");

        let written = std::fs::read_to_string(&path).expect("report readable");
        assert_eq!(written, reporter.render(&ctx).expect("render"));
    }
}

#[test]
fn missing_workbook_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_workbook(temp_dir.path().join("nope.toml")).expect_err("file is missing");
    assert!(err.to_string().contains("nope.toml"));
}
