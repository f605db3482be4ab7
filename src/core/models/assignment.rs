//! Assignment model

use serde::{Deserialize, Serialize};

/// A single piece of graded (or not yet graded) work in a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment name (e.g., "Homework 3")
    pub name: String,

    /// Key of the grade category this assignment belongs to (e.g., "Homework")
    pub category: String,

    /// Points earned; `None` while the assignment is ungraded
    #[serde(default, rename = "score", skip_serializing_if = "Option::is_none")]
    pub score_earned: Option<f64>,

    /// Points possible (expected to be > 0)
    pub max_score: f64,
}

impl Assignment {
    /// Create an ungraded assignment
    #[must_use]
    pub const fn new(name: String, category: String, max_score: f64) -> Self {
        Self {
            name,
            category,
            score_earned: None,
            max_score,
        }
    }

    /// Create an assignment that already has a score
    #[must_use]
    pub const fn graded(name: String, category: String, score_earned: f64, max_score: f64) -> Self {
        Self {
            name,
            category,
            score_earned: Some(score_earned),
            max_score,
        }
    }

    /// Whether a score has been recorded
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.score_earned.is_some()
    }

    /// Earned/possible ratio, or `None` while ungraded
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        self.score_earned.map(|earned| earned / self.max_score)
    }
}
