//! Grade category model

use serde::{Deserialize, Serialize};

/// A weighted bucket of assignments (e.g., "Homework" worth 30 points of the final grade)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeCategory {
    /// Category key, unique within a course
    pub name: String,

    /// Percentage points this category contributes; weights need not sum to 100
    pub weight: f64,

    /// Number of lowest-scoring graded assignments to drop before averaging
    #[serde(default)]
    pub drop_lowest: usize,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GradeCategory {
    /// Create a category without a drop-lowest policy
    #[must_use]
    pub const fn new(name: String, weight: f64) -> Self {
        Self {
            name,
            weight,
            drop_lowest: 0,
            description: None,
        }
    }

    /// Builder-style setter for the drop-lowest policy
    #[must_use]
    pub fn with_drop_lowest(mut self, drop_lowest: usize) -> Self {
        self.drop_lowest = drop_lowest;
        self
    }
}
