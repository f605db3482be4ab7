//! Course model

use super::{Assignment, GradeCategory};
use serde::{Deserialize, Serialize};

/// Passing percentage assumed when neither the course nor the configuration sets one
pub const DEFAULT_PASSING_GRADE: f64 = 60.0;

const fn default_required() -> bool {
    true
}

/// A course a student is taking, with its grading rubric and assignment records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g., "CS2510")
    pub id: String,

    /// Course name (e.g., "Fundamentals of Computer Science 2")
    pub name: String,

    /// Credit hours; `None` falls back to the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,

    /// Minimum passing percentage; `None` falls back to the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_grade: Option<f64>,

    /// Whether the course is required for the student's program (vs. an elective)
    #[serde(default = "default_required", rename = "required")]
    pub is_required: bool,

    /// Self-reported stress level, 0-10
    #[serde(default)]
    pub stress_level: f64,

    /// Hours per week spent on this course
    #[serde(default)]
    pub weekly_hours: f64,

    /// Term label (e.g., "Fall 2026")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,

    /// Grading rubric
    #[serde(default)]
    pub categories: Vec<GradeCategory>,

    /// Assignment records
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Course {
    /// Create a course with no rubric or assignments
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `name` - Full course name
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            credits: None,
            passing_grade: None,
            is_required: true,
            stress_level: 0.0,
            weekly_hours: 0.0,
            term: None,
            categories: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Look up a category by key
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&GradeCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Add a category, replacing any existing category with the same key
    pub fn add_category(&mut self, category: GradeCategory) {
        if let Some(existing) = self.categories.iter_mut().find(|c| c.name == category.name) {
            *existing = category;
        } else {
            self.categories.push(category);
        }
    }

    /// Add an assignment record
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Passing grade with the built-in default applied
    #[must_use]
    pub fn effective_passing_grade(&self) -> f64 {
        self.passing_grade.unwrap_or(DEFAULT_PASSING_GRADE)
    }

    /// Whether at least one assignment has a score
    #[must_use]
    pub fn has_graded_work(&self) -> bool {
        self.assignments.iter().any(Assignment::is_graded)
    }

    /// Borrow the rubric and assignments as a calculator input
    #[must_use]
    pub fn snapshot(&self) -> CourseGradeSnapshot<'_> {
        CourseGradeSnapshot::new(&self.categories, &self.assignments)
    }
}

/// One course's categories plus their assignments, as read at a single point in time
///
/// Assignments whose category key is not among `categories` are ignored by every
/// calculation that consumes the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CourseGradeSnapshot<'a> {
    /// Grading rubric
    pub categories: &'a [GradeCategory],
    /// Assignment records
    pub assignments: &'a [Assignment],
}

impl<'a> CourseGradeSnapshot<'a> {
    /// Create a snapshot over borrowed rubric and assignment slices
    #[must_use]
    pub const fn new(categories: &'a [GradeCategory], assignments: &'a [Assignment]) -> Self {
        Self {
            categories,
            assignments,
        }
    }

    /// Assignments filed under `category`, in input order
    pub fn assignments_in(&self, category: &'a str) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.category == category)
    }
}
