//! Markdown report generator
//!
//! Fills the embedded `report.md` template with summary, term, and course
//! tables. The output renders well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &escape_cell(ctx.title()));
        let student_line = if ctx.student().is_empty() {
            String::new()
        } else {
            format!("**Student:** {}\n\n", escape_cell(ctx.student()))
        };
        output = output.replace("{{student_line}}", &student_line);
        output = output.replace("{{generated_on}}", &ctx.generated_on.to_string());

        output = output.replace("{{gpa}}", &ctx.gpa_display());
        output = output.replace(
            "{{graded_courses}}",
            &ctx.summary.graded_courses.to_string(),
        );
        output = output.replace("{{course_count}}", &ctx.analyses.len().to_string());
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.summary.total_credits),
        );
        output = output.replace(
            "{{needing_attention}}",
            &ctx.summary.risk_counts.needing_attention().to_string(),
        );

        output = output.replace("{{risk_table}}", &Self::generate_risk_table(ctx));
        output = output.replace("{{term_table}}", &Self::generate_term_table(ctx));
        output = output.replace("{{course_table}}", &Self::generate_course_table(ctx));
        output = output.replace("{{recommendations}}", &Self::generate_recommendations(ctx));

        output
    }

    fn generate_risk_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Risk | Courses |\n");
        table.push_str("|---|---|\n");
        for row in ctx.risk_rows() {
            let _ = writeln!(table, "| {} | {} |", row.label, row.count);
        }
        table
    }

    fn generate_term_table(ctx: &ReportContext) -> String {
        let rows = ctx.term_rows();
        if rows.is_empty() {
            return "_No courses._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Term | Courses | Credits | GPA |\n");
        table.push_str("|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                row.label, row.courses, row.credits, row.gpa
            );
        }
        table
    }

    fn generate_course_table(ctx: &ReportContext) -> String {
        let rows = ctx.course_rows();
        if rows.is_empty() {
            return "_No courses._\n".to_string();
        }

        let mut table = String::new();
        table.push_str(
            "| Course | Name | Credits | Passing | Grade | Letter | GPA | Best | Worst | Risk | Score |\n",
        );
        table.push_str("|---|---|---|---|---|---|---|---|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                escape_cell(&row.id),
                escape_cell(&row.name),
                row.credits,
                row.passing,
                row.grade,
                row.letter,
                row.gpa,
                row.best,
                row.worst,
                row.risk,
                row.score
            );
        }
        table
    }

    fn generate_recommendations(ctx: &ReportContext) -> String {
        let mut out = String::new();
        for row in ctx.course_rows() {
            let _ = writeln!(
                out,
                "### {} - {} ({})\n",
                escape_cell(&row.id),
                escape_cell(&row.name),
                row.risk
            );
            if row.advice.is_empty() {
                out.push_str("No graded work yet.\n\n");
                continue;
            }
            for line in &row.advice {
                let _ = writeln!(out, "- {line}");
            }
            out.push('\n');
        }
        out
    }
}

/// Escape characters that would break a Markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
