//! Scoring: sub-scores, weighting, safety nets, and risk bucketing

use super::advice::generate_advice;
use super::weights::compute_weights;
use super::{RecommendationInput, RecommendationResult, RiskLevel, SubScores};

/// Hours per week at which the workload sub-score reaches zero
pub const WORKLOAD_CEILING: f64 = 40.0;

/// Academic sub-score at exactly the passing grade
const PASSING_BASELINE: f64 = 0.6;

/// Any grade at or above this is always at least [`EXCELLENT_FLOOR`]
const EXCELLENT_GRADE: f64 = 90.0;
const EXCELLENT_FLOOR: f64 = 0.90;
/// Grades this far above passing are always at least [`SAFE_FLOOR`]
const SAFE_MARGIN: f64 = 15.0;
const SAFE_FLOOR: f64 = 0.75;

/// Academic standing: quadratic from 0 to 0.6 below passing, linear from 0.6
/// to 1.0 above it.
#[must_use]
pub fn academic_score(current_grade: f64, passing_grade: f64) -> f64 {
    if current_grade < passing_grade {
        let ratio = current_grade / passing_grade;
        PASSING_BASELINE * ratio.powi(2)
    } else {
        let ratio = (current_grade - passing_grade) / (100.0 - passing_grade);
        (1.0 - PASSING_BASELINE).mul_add(ratio, PASSING_BASELINE)
    }
}

/// `(10 − stress) × 0.1`; not clamped
#[must_use]
pub fn stress_score(stress_level: f64) -> f64 {
    (10.0 - stress_level) * 0.1
}

/// `max(0, (40 − hours) / 40)`
#[must_use]
pub fn workload_score(weekly_hours: f64) -> f64 {
    ((WORKLOAD_CEILING - weekly_hours) / WORKLOAD_CEILING).max(0.0)
}

/// All four sub-scores for an input
#[must_use]
pub fn sub_scores(input: &RecommendationInput) -> SubScores {
    SubScores {
        academic: academic_score(input.current_grade, input.passing_grade),
        stress: stress_score(input.stress_level),
        workload: workload_score(input.weekly_hours),
        requirement: if input.is_required { 1.0 } else { 0.5 },
    }
}

/// Score a course and decide how risky continuing it is.
///
/// Pure and total: no input is rejected and NaN propagates into the score.
#[must_use]
pub fn recommend(input: &RecommendationInput) -> RecommendationResult {
    let scores = sub_scores(input);
    let weights = compute_weights((input.current_grade - input.passing_grade).abs());

    let mut raw = scores.academic * weights.academic
        + scores.stress * weights.stress
        + scores.workload * weights.workload
        + scores.requirement * weights.importance;

    if input.current_grade >= EXCELLENT_GRADE {
        raw = raw.max(EXCELLENT_FLOOR);
    } else if input.current_grade >= input.passing_grade + SAFE_MARGIN {
        raw = raw.max(SAFE_FLOOR);
    }

    let score = raw * 100.0;
    RecommendationResult {
        score,
        risk_level: RiskLevel::from_score(score),
        advice: generate_advice(&scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recommendation::advice::{POSITIVE_ADVICE, WORKLOAD_ADVICE};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn input(grade: f64, passing: f64, stress: f64, hours: f64) -> RecommendationInput {
        RecommendationInput {
            current_grade: grade,
            passing_grade: passing,
            is_required: true,
            stress_level: stress,
            weekly_hours: hours,
        }
    }

    #[test]
    fn academic_score_is_continuous_at_passing() {
        assert!(approx(academic_score(60.0, 60.0), 0.6));
        assert!(approx(academic_score(30.0, 60.0), 0.15));
        assert!(approx(academic_score(0.0, 60.0), 0.0));
        assert!(approx(academic_score(80.0, 60.0), 0.8));
        assert!(approx(academic_score(100.0, 60.0), 1.0));
    }

    #[test]
    fn workload_bottoms_out_at_ceiling() {
        assert!(approx(workload_score(0.0), 1.0));
        assert!(approx(workload_score(10.0), 0.75));
        assert!(approx(workload_score(40.0), 0.0));
        assert!(approx(workload_score(45.0), 0.0));
    }

    #[test]
    fn stress_is_not_clamped() {
        assert!(approx(stress_score(0.0), 1.0));
        assert!(approx(stress_score(10.0), 0.0));
        assert!(approx(stress_score(12.0), -0.2));
    }

    #[test]
    fn high_grade_is_always_excellent() {
        let result = recommend(&input(95.0, 60.0, 10.0, 50.0));
        assert!(result.score >= 90.0);
        assert_eq!(result.risk_level, RiskLevel::Excellent);
    }

    #[test]
    fn comfortable_margin_is_at_least_safe() {
        // 80 is 20 points above passing but below 90
        let result = recommend(&input(80.0, 60.0, 10.0, 45.0));
        assert!(result.score >= 75.0);
        assert_eq!(result.risk_level, RiskLevel::Safe);
    }

    #[test]
    fn base_weighting_far_from_passing() {
        // academic 0.6 + 0.4 * 25/40 = 0.85, stress 0.5, workload 0.75
        // 0.85 * 0.6 + 0.5 * 0.1 + 0.75 * 0.1 + 1.0 * 0.2 = 0.835
        let result = recommend(&input(85.0, 60.0, 5.0, 10.0));
        assert!(approx(result.score, 83.5));
        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert_eq!(result.advice, vec![POSITIVE_ADVICE]);
    }

    #[test]
    fn failing_course_is_critical() {
        let result = recommend(&input(20.0, 60.0, 9.0, 35.0));
        assert_eq!(result.risk_level, RiskLevel::Critical);
        assert_eq!(result.advice.len(), 3);
    }

    #[test]
    fn stress_matters_more_near_passing_line() {
        let gap = |grade: f64| {
            let calm = recommend(&input(grade, 50.0, 2.0, 10.0)).score;
            let stressed = recommend(&input(grade, 50.0, 9.0, 10.0)).score;
            calm - stressed
        };
        let near = gap(53.0);
        let far = gap(80.0);
        assert!(near > far, "near {near} should exceed far {far}");
    }

    #[test]
    fn heavy_workload_zeroes_workload_factor() {
        let scores = sub_scores(&input(70.0, 60.0, 5.0, 45.0));
        assert!(approx(scores.workload, 0.0));

        let result = recommend(&input(70.0, 60.0, 5.0, 45.0));
        assert!(result.advice.iter().any(|a| a == WORKLOAD_ADVICE));
    }

    #[test]
    fn elective_halves_requirement_factor() {
        let mut elective = input(70.0, 60.0, 5.0, 10.0);
        elective.is_required = false;
        assert!(approx(sub_scores(&elective).requirement, 0.5));

        let required = recommend(&input(70.0, 60.0, 5.0, 10.0)).score;
        let optional = recommend(&elective).score;
        assert!(approx(required - optional, 10.0));
    }

    #[test]
    fn nan_propagates() {
        let result = recommend(&input(f64::NAN, 60.0, 5.0, 10.0));
        assert!(result.score.is_nan());
        assert_eq!(result.risk_level, RiskLevel::Critical);
    }
}
