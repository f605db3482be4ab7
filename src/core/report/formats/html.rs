//! HTML report generator
//!
//! Renders `templates/semester_report.html` through askama. Every interpolated
//! value is HTML-escaped, so course names from the workbook are safe to embed.
//! The page is self-contained with embedded CSS.

use crate::core::report::{CourseRow, ReportContext, ReportGenerator, RiskRow, TermRow};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "semester_report.html")]
struct SemesterReportPage<'a> {
    title: &'a str,
    student: &'a str,
    has_student: bool,
    generated_on: String,
    gpa: String,
    graded_courses: usize,
    course_count: usize,
    total_credits: String,
    risks: Vec<RiskRow>,
    terms: Vec<TermRow>,
    courses: Vec<CourseRow>,
}

impl<'a> SemesterReportPage<'a> {
    fn from_context(ctx: &'a ReportContext<'a>) -> Self {
        Self {
            title: ctx.title(),
            student: ctx.student(),
            has_student: !ctx.student().is_empty(),
            generated_on: ctx.generated_on.to_string(),
            gpa: ctx.gpa_display(),
            graded_courses: ctx.summary.graded_courses,
            course_count: ctx.analyses.len(),
            total_credits: format!("{:.1}", ctx.summary.total_credits),
            risks: ctx.risk_rows(),
            terms: ctx.term_rows(),
            courses: ctx.course_rows(),
        }
    }
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(SemesterReportPage::from_context(ctx).render()?)
    }
}
