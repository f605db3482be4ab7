//! Continue-vs-drop recommendation engine
//!
//! A course is scored from four normalised factors (academic standing, stress,
//! workload, and whether the course is required). The closer the grade sits to
//! the passing line, the more weight shifts from academics to wellbeing.

pub mod advice;
pub mod engine;
pub mod weights;

pub use advice::generate_advice;
pub use engine::{recommend, sub_scores};
pub use weights::{compute_weights, Weights};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the engine needs about one course, built fresh per call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationInput {
    /// Current percentage, 0-100
    pub current_grade: f64,
    /// Minimum passing percentage
    pub passing_grade: f64,
    /// Required course (vs. elective)
    pub is_required: bool,
    /// Self-reported stress, 0-10
    pub stress_level: f64,
    /// Hours per week spent on the course
    pub weekly_hours: f64,
}

/// Engine output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Continue score, 0-100; higher means keep the course
    pub score: f64,
    /// Risk bucket derived from `score`
    pub risk_level: RiskLevel,
    /// Fixed advice strings, never empty
    pub advice: Vec<String>,
}

/// The four normalised factors, each nominally in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    /// Standing relative to the passing grade
    pub academic: f64,
    /// Inverted stress
    pub stress: f64,
    /// Inverted weekly hours against a 40-hour ceiling
    pub workload: f64,
    /// 1.0 required, 0.5 elective
    pub requirement: f64,
}

/// Risk bucket, from most to least worrying
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 50
    Critical,
    /// Score 50 to below 75
    AtRisk,
    /// Score 75 to below 90
    Safe,
    /// Score 90 and above
    Excellent,
}

impl RiskLevel {
    /// Every level, most worrying first
    pub const ALL: [Self; 4] = [Self::Critical, Self::AtRisk, Self::Safe, Self::Excellent];

    /// Bucket a 0-100 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 75.0 {
            Self::Safe
        } else if score >= 50.0 {
            Self::AtRisk
        } else {
            Self::Critical
        }
    }

    /// Lowercase slug for CSS classes and file names
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Safe => "safe",
            Self::AtRisk => "at-risk",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Safe => "Safe",
            Self::AtRisk => "At Risk",
            Self::Critical => "Critical",
        };
        write!(f, "{label}")
    }
}
