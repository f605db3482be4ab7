//! TOML semester workbook: courses with their rubrics and assignment records
//!
//! ```toml
//! title = "Fall 2026"
//!
//! [[courses]]
//! id = "CS2510"
//! name = "Fundamentals of Computer Science 2"
//! credits = 4
//! passing_grade = 70
//! stress_level = 6
//! weekly_hours = 12
//!
//! [[courses.categories]]
//! name = "Homework"
//! weight = 30
//! drop_lowest = 1
//!
//! [[courses.assignments]]
//! name = "HW1"
//! category = "Homework"
//! score = 18
//! max_score = 20
//! ```

use crate::core::config::GradingConfig;
use crate::core::models::{Course, Term};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// A student's courses for one or more terms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    /// Display title for reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Student name for reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,

    /// Term applied to courses that do not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    /// Courses in file order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Workbook {
    /// Parse a workbook from TOML text.
    ///
    /// Courses without a `term` inherit the workbook-level `term`.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or does not match the
    /// workbook schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let mut workbook: Self = toml::from_str(toml_str)?;
        if let Some(term) = workbook.term.clone() {
            for course in workbook.courses.iter_mut().filter(|c| c.term.is_none()) {
                course.term = Some(term.clone());
            }
        }
        Ok(workbook)
    }

    /// Title, falling back to the workbook-level term or a generic label
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.term.as_deref())
            .unwrap_or("Semester Workbook")
    }

    /// Fill credits and passing grades the courses leave unset
    pub fn apply_defaults(&mut self, grading: &GradingConfig) {
        for course in &mut self.courses {
            if course.credits.is_none() {
                course.credits = Some(grading.default_credits);
            }
            if course.passing_grade.is_none() {
                course.passing_grade = Some(grading.default_passing_grade);
            }
        }
    }

    /// Find a course by id (case-insensitive)
    #[must_use]
    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    /// Problems worth telling the user about. None of them stop the workbook
    /// from loading; grading simply ignores what it cannot use.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut course_ids = HashSet::new();

        for course in &self.courses {
            if !course_ids.insert(course.id.to_ascii_lowercase()) {
                warnings.push(format!("Duplicate course id '{}'", course.id));
            }
            if course.categories.is_empty() {
                warnings.push(format!("{}: no grade categories defined", course.id));
            }

            let mut categories = HashSet::new();
            for category in &course.categories {
                if !categories.insert(category.name.as_str()) {
                    warnings.push(format!(
                        "{}: duplicate category '{}'",
                        course.id, category.name
                    ));
                }
                if category.weight < 0.0 {
                    warnings.push(format!(
                        "{}: category '{}' has negative weight {}",
                        course.id, category.name, category.weight
                    ));
                }
            }

            for assignment in &course.assignments {
                if !categories.contains(assignment.category.as_str()) {
                    warnings.push(format!(
                        "{}: assignment '{}' uses unknown category '{}' and will be ignored",
                        course.id, assignment.name, assignment.category
                    ));
                }
                if assignment.max_score <= 0.0 {
                    warnings.push(format!(
                        "{}: assignment '{}' has non-positive max score {}",
                        course.id, assignment.name, assignment.max_score
                    ));
                }
            }

            if let Some(passing) = course.passing_grade {
                if passing <= 0.0 || passing >= 100.0 {
                    warnings.push(format!(
                        "{}: passing grade {passing} is outside 0-100",
                        course.id
                    ));
                }
            }
            if let Some(term) = &course.term {
                if term.parse::<Term>().is_err() {
                    warnings.push(format!(
                        "{}: term '{term}' is not '<Season> <Year>' and will be uncategorized",
                        course.id
                    ));
                }
            }
            if !(0.0..=10.0).contains(&course.stress_level) {
                warnings.push(format!(
                    "{}: stress level {} is outside 0-10",
                    course.id, course.stress_level
                ));
            }
        }

        warnings
    }
}

/// Read and parse a workbook file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read workbook {}: {e}", path.display()))?;
    let workbook = Workbook::from_toml(&content)
        .map_err(|e| format!("Invalid workbook {}: {e}", path.display()))?;
    crate::debug!(
        "Loaded workbook {} with {} courses",
        path.display(),
        workbook.courses.len()
    );
    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
title = "Fall 2026"
term = "Fall 2026"

[[courses]]
id = "CS2510"
name = "Fundamentals of Computer Science 2"
credits = 4
passing_grade = 70
stress_level = 6
weekly_hours = 12

[[courses.categories]]
name = "Homework"
weight = 30
drop_lowest = 1

[[courses.categories]]
name = "Exams"
weight = 70

[[courses.assignments]]
name = "HW1"
category = "Homework"
score = 18
max_score = 20

[[courses.assignments]]
name = "Midterm"
category = "Exams"
max_score = 100

[[courses]]
id = "ART1001"
name = "Drawing Basics"
required = false
term = "Spring 2026"
"#;

    #[test]
    fn parses_nested_courses() {
        let workbook = Workbook::from_toml(SAMPLE).expect("parse workbook");

        assert_eq!(workbook.display_title(), "Fall 2026");
        assert_eq!(workbook.courses.len(), 2);

        let cs = workbook.find_course("cs2510").expect("case-insensitive lookup");
        assert_eq!(cs.credits, Some(4.0));
        assert_eq!(cs.categories.len(), 2);
        assert_eq!(cs.assignments[0].score_earned, Some(18.0));
        assert_eq!(cs.assignments[1].score_earned, None);
        assert_eq!(cs.term.as_deref(), Some("Fall 2026"));

        let art = workbook.find_course("ART1001").expect("art course");
        assert!(!art.is_required);
        assert_eq!(art.term.as_deref(), Some("Spring 2026"));
    }

    #[test]
    fn applies_configured_defaults() {
        let mut workbook = Workbook::from_toml(SAMPLE).expect("parse workbook");
        workbook.apply_defaults(&GradingConfig {
            default_credits: 2.0,
            default_passing_grade: 65.0,
        });

        let cs = workbook.find_course("CS2510").expect("cs course");
        assert_eq!(cs.credits, Some(4.0));
        assert_eq!(cs.passing_grade, Some(70.0));

        let art = workbook.find_course("ART1001").expect("art course");
        assert_eq!(art.credits, Some(2.0));
        assert_eq!(art.passing_grade, Some(65.0));
    }

    #[test]
    fn validate_reports_problems_without_rejecting() {
        let text = r#"
[[courses]]
id = "MATH1341"
name = "Calculus 1"
passing_grade = 120
term = "Fourth quarter"

[[courses.categories]]
name = "Quizzes"
weight = 20

[[courses.categories]]
name = "Quizzes"
weight = 10

[[courses.assignments]]
name = "Lab 1"
category = "Labs"
score = 5
max_score = 0
"#;
        let workbook = Workbook::from_toml(text).expect("still parses");
        let warnings = workbook.validate();

        assert!(warnings.iter().any(|w| w.contains("duplicate category 'Quizzes'")));
        assert!(warnings.iter().any(|w| w.contains("unknown category 'Labs'")));
        assert!(warnings.iter().any(|w| w.contains("non-positive max score")));
        assert!(warnings.iter().any(|w| w.contains("passing grade 120")));
        assert!(warnings.iter().any(|w| w.contains("term 'Fourth quarter'")));
    }

    #[test]
    fn clean_workbook_has_only_expected_warnings() {
        let workbook = Workbook::from_toml(SAMPLE).expect("parse workbook");
        assert_eq!(
            workbook.validate(),
            vec!["ART1001: no grade categories defined".to_string()]
        );
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(Workbook::from_toml("[[courses]]\nid = 5\n").is_err());
    }

    #[test]
    fn empty_workbook_uses_generic_title() {
        let workbook = Workbook::from_toml("").expect("empty workbook");
        assert!(workbook.courses.is_empty());
        assert_eq!(workbook.display_title(), "Semester Workbook");
    }
}
