//! Core module: pure grading algorithms plus the loaders and reports around them

pub mod advisor;
pub mod config;
pub mod grading;
pub mod models;
pub mod recommendation;
pub mod report;
pub mod summary;
pub mod workbook;

/// Returns the current version of the `GradeAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
