//! Free-text advice boundary
//!
//! The engine's fixed advice strings are always available. Richer, narrative
//! advice comes from an [`AdviceProvider`] the caller constructs and passes in;
//! its output is opaque text. When the provider fails, [`request_advice`] falls
//! back to the deterministic [`OfflineAdvisor`] plan.

mod offline;

pub use offline::OfflineAdvisor;

use crate::core::recommendation::{RecommendationInput, RecommendationResult, RiskLevel};
use serde::{Deserialize, Serialize};
use std::error::Error;

/// What a provider is told about one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceContext {
    /// Course display name
    pub course_name: String,
    /// Current percentage
    pub current_grade: f64,
    /// Self-reported stress, 0-10
    pub stress_level: f64,
    /// Hours per week spent on the course
    pub hours_spent: f64,
    /// Risk bucket from the engine
    pub risk_level: RiskLevel,
    /// Minimum passing percentage
    pub passing_grade: f64,
    /// Required course (vs. elective)
    pub is_required: bool,
    /// Engine score, 0-100
    pub recommendation_score: f64,
}

impl AdviceContext {
    /// Combine an engine input and its result into a provider context
    #[must_use]
    pub fn from_recommendation(
        course_name: &str,
        input: &RecommendationInput,
        result: &RecommendationResult,
    ) -> Self {
        Self {
            course_name: course_name.to_string(),
            current_grade: input.current_grade,
            stress_level: input.stress_level,
            hours_spent: input.weekly_hours,
            risk_level: result.risk_level,
            passing_grade: input.passing_grade,
            is_required: input.is_required,
            recommendation_score: result.score,
        }
    }

    /// Whether the current grade meets the passing grade
    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.current_grade >= self.passing_grade
    }
}

/// Source of narrative advice, typically backed by a generative model.
///
/// Implementations own their transport, timeouts, and cancellation.
pub trait AdviceProvider {
    /// Produce advice text for `ctx`
    ///
    /// # Errors
    ///
    /// Returns an error when the provider cannot produce advice.
    fn generate_advice(&self, ctx: &AdviceContext) -> Result<String, Box<dyn Error>>;
}

/// Ask `provider` for advice, falling back to the offline plan on failure.
#[must_use]
pub fn request_advice(provider: &dyn AdviceProvider, ctx: &AdviceContext) -> String {
    match provider.generate_advice(ctx) {
        Ok(text) => text,
        Err(e) => {
            crate::warn!(
                "Advice provider failed for '{}': {e}. Using offline plan.",
                ctx.course_name
            );
            OfflineAdvisor.plan(ctx)
        }
    }
}
