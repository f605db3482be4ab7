//! Data models for `GradeAdvisor`

pub mod assignment;
pub mod category;
pub mod course;
pub mod term;

pub use assignment::Assignment;
pub use category::GradeCategory;
pub use course::{Course, CourseGradeSnapshot, DEFAULT_PASSING_GRADE};
pub use term::{Season, Term};
