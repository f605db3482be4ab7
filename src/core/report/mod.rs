//! Report generation for a semester workbook
//!
//! Reports are rendered from a [`ReportContext`] in Markdown or HTML. Both
//! formats share the row builders below so they always show the same numbers.

pub mod formats;

use crate::core::recommendation::RiskLevel;
use crate::core::summary::{group_by_term, CourseAnalysis, SemesterSummary, TermGroup};
use crate::core::workbook::Workbook;
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Placeholder for values that do not exist yet
pub const MISSING: &str = "-";

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Workbook being reported
    pub workbook: &'a Workbook,
    /// One analysis per workbook course, in workbook order
    pub analyses: &'a [CourseAnalysis],
    /// Roll-up over `analyses`
    pub summary: &'a SemesterSummary,
    /// Date printed in the report header
    pub generated_on: NaiveDate,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        workbook: &'a Workbook,
        analyses: &'a [CourseAnalysis],
        summary: &'a SemesterSummary,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            workbook,
            analyses,
            summary,
            generated_on,
        }
    }

    /// Report title
    #[must_use]
    pub fn title(&self) -> &str {
        self.workbook.display_title()
    }

    /// Student name, empty when the workbook has none
    #[must_use]
    pub fn student(&self) -> &str {
        self.workbook.student.as_deref().unwrap_or("")
    }

    /// Analyses grouped by term
    #[must_use]
    pub fn term_groups(&self) -> Vec<TermGroup<'a>> {
        group_by_term(self.analyses)
    }

    /// Semester GPA to two decimals with its letter, e.g. "3.50 (A-)"
    #[must_use]
    pub fn gpa_display(&self) -> String {
        gpa_display(self.summary)
    }

    /// One row per course
    #[must_use]
    pub fn course_rows(&self) -> Vec<CourseRow> {
        self.analyses.iter().map(CourseRow::from_analysis).collect()
    }

    /// One row per term
    #[must_use]
    pub fn term_rows(&self) -> Vec<TermRow> {
        self.term_groups()
            .iter()
            .map(|group| {
                let summary = group.summary();
                TermRow {
                    label: group.label(),
                    courses: group.courses.len(),
                    credits: format!("{:.1}", summary.total_credits),
                    gpa: gpa_display(&summary),
                }
            })
            .collect()
    }

    /// Course counts per risk level, most worrying first
    #[must_use]
    pub fn risk_rows(&self) -> Vec<RiskRow> {
        RiskLevel::ALL
            .iter()
            .map(|&level| RiskRow {
                label: level.to_string(),
                slug: level.slug(),
                count: self.summary.risk_counts.get(level),
            })
            .collect()
    }
}

fn gpa_display(summary: &SemesterSummary) -> String {
    match (summary.gpa, summary.letter) {
        (Some(gpa), Some(letter)) => format!("{gpa:.2} ({letter})"),
        _ => MISSING.to_string(),
    }
}

/// Format an optional percentage to one decimal
#[must_use]
pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.1}%"))
}

/// Pre-formatted course values shared by every report format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    /// Course identifier
    pub id: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credits: String,
    /// Passing grade
    pub passing: String,
    /// Current percentage
    pub grade: String,
    /// Letter grade
    pub letter: String,
    /// Grade points
    pub gpa: String,
    /// Best case percentage
    pub best: String,
    /// Worst case percentage
    pub worst: String,
    /// Risk label
    pub risk: String,
    /// Risk CSS class
    pub risk_slug: &'static str,
    /// Recommendation score
    pub score: String,
    /// Engine advice lines
    pub advice: Vec<String>,
}

impl CourseRow {
    /// Build a row from an analysis
    #[must_use]
    pub fn from_analysis(analysis: &CourseAnalysis) -> Self {
        let recommendation = analysis.recommendation.as_ref();
        Self {
            id: analysis.id.clone(),
            name: analysis.name.clone(),
            credits: analysis
                .credits
                .map_or_else(|| MISSING.to_string(), |c| format!("{c:.1}")),
            passing: format!("{:.0}%", analysis.passing_grade),
            grade: percent(analysis.current_grade),
            letter: analysis.letter.unwrap_or(MISSING).to_string(),
            gpa: analysis
                .gpa_points
                .map_or_else(|| MISSING.to_string(), |g| format!("{g:.1}")),
            best: percent(analysis.best_case),
            worst: percent(analysis.worst_case),
            risk: recommendation
                .map_or_else(|| "Not graded".to_string(), |r| r.risk_level.to_string()),
            risk_slug: recommendation.map_or("ungraded", |r| r.risk_level.slug()),
            score: recommendation
                .map_or_else(|| MISSING.to_string(), |r| format!("{:.1}", r.score)),
            advice: recommendation.map(|r| r.advice.clone()).unwrap_or_default(),
        }
    }
}

/// Pre-formatted per-term values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRow {
    /// Term label
    pub label: String,
    /// Number of courses
    pub courses: usize,
    /// Credit hours
    pub credits: String,
    /// GPA with letter
    pub gpa: String,
}

/// Number of courses at one risk level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRow {
    /// Risk label
    pub label: String,
    /// Risk CSS class
    pub slug: &'static str,
    /// Course count
    pub count: usize,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
