//! Report command handler
//!
//! Analyzes every course in a workbook and writes a Markdown or HTML semester
//! report.

use super::{fail, open_workbook, resolve_workbook_path};
use grade_advisor::config::Config;
use grade_advisor::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use grade_advisor::core::summary::{CourseAnalysis, SemesterSummary};
use grade_advisor::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
pub fn run(workbook_path: Option<&Path>, output: Option<&Path>, format: &str, config: &Config) {
    match generate_report(workbook_path, output, format, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed: {err}");
            fail(&err);
        }
    }
}

fn generate_report(
    workbook_path: Option<&Path>,
    output: Option<&Path>,
    format: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format: ReportFormat = format.parse().map_err(|e| format!("✗ {e}"))?;
    let source = resolve_workbook_path(workbook_path, config)?;
    let workbook = open_workbook(Some(source.as_path()), config)?;

    let analyses: Vec<CourseAnalysis> = workbook
        .courses
        .iter()
        .map(CourseAnalysis::analyze)
        .collect();
    let summary = SemesterSummary::from_courses(&analyses);
    let ctx = ReportContext::new(
        &workbook,
        &analyses,
        &summary,
        chrono::Local::now().date_naive(),
    );

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(&source, format, config)?,
    };

    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };
    reporter.generate(&ctx, &output_path).map_err(|e| {
        format!(
            "✗ Failed to write {} report to {}: {e}",
            format,
            output_path.display()
        )
    })?;

    info!(
        "{} report for {} written to {}",
        format,
        source.display(),
        output_path.display()
    );
    Ok(output_path)
}

/// `<reports_dir>/<workbook stem>.<ext>`, creating the directory if needed
fn default_output_path(
    source: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = source
        .file_stem()
        .map_or_else(|| "report".into(), |s| s.to_string_lossy());
    Ok(reports_dir.join(format!("{stem}.{}", format.extension())))
}
