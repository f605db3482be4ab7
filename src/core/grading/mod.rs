//! Grade arithmetic: GPA conversion, semester aggregation, course grades, and projections
//!
//! Everything here is pure and deterministic. Absent values are `None`, never zero.

pub mod calculator;
pub mod gpa;
pub mod projection;
pub mod semester;

pub use calculator::{category_breakdown, current_grade, CategoryScore};
pub use gpa::{gpa_to_letter_grade, percentage_to_gpa, percentage_to_letter_grade};
pub use projection::{best_case, projected_grade, what_if, worst_case, AssumptionMode};
pub use semester::{cumulative_gpa, semester_gpa, GradedCourse, DEFAULT_CREDITS};
