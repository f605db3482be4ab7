//! Shared library for `GradeAdvisor`
//! Contains the grade, GPA and recommendation core used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
