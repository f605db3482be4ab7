//! Credit-weighted semester and cumulative GPA

use super::gpa::percentage_to_gpa;
use serde::{Deserialize, Serialize};

/// Credit hours assumed when a course does not specify any
pub const DEFAULT_CREDITS: f64 = 3.0;

/// Aggregator input: one course's current percentage and credit hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradedCourse {
    /// Current percentage, `None` while nothing is graded
    pub current_grade: Option<f64>,
    /// Credit hours, `None` to use [`DEFAULT_CREDITS`]
    pub credits: Option<f64>,
}

impl GradedCourse {
    /// Create an aggregator entry
    #[must_use]
    pub const fn new(current_grade: Option<f64>, credits: Option<f64>) -> Self {
        Self {
            current_grade,
            credits,
        }
    }

    /// Credits with the default applied; an explicit zero stays zero
    #[must_use]
    pub fn effective_credits(&self) -> f64 {
        self.credits.unwrap_or(DEFAULT_CREDITS)
    }
}

/// Credit-weighted GPA over the graded courses of one semester.
///
/// Ungraded courses are skipped. Returns `None` when no course is graded or
/// the graded courses carry zero total credits.
#[must_use]
pub fn semester_gpa(courses: &[GradedCourse]) -> Option<f64> {
    weighted_gpa(courses.iter())
}

/// Credit-weighted GPA across several semesters, treating every graded course
/// of every term as one pool.
#[must_use]
pub fn cumulative_gpa<T: AsRef<[GradedCourse]>>(terms: &[T]) -> Option<f64> {
    weighted_gpa(terms.iter().flat_map(|term| term.as_ref().iter()))
}

fn weighted_gpa<'a>(courses: impl Iterator<Item = &'a GradedCourse>) -> Option<f64> {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    let mut graded = 0usize;

    for course in courses {
        let Some(grade) = course.current_grade else {
            continue;
        };
        let credits = course.effective_credits();
        total_points += percentage_to_gpa(grade) * credits;
        total_credits += credits;
        graded += 1;
    }

    if graded == 0 || total_credits == 0.0 {
        return None;
    }
    Some(total_points / total_credits)
}
