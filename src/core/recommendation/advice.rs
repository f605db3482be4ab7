//! Fixed advice strings chosen from the weak sub-scores

use super::SubScores;

/// Shown when the academic sub-score is below [`ACADEMIC_THRESHOLD`]
pub const ACADEMIC_ADVICE: &str = "Focus on improving your academic performance by dedicating more time to studying and seeking help when needed.";
/// Shown when the stress sub-score is below [`STRESS_THRESHOLD`]
pub const STRESS_ADVICE: &str = "Consider stress management techniques such as mindfulness, exercise, or talking to a counselor to help reduce your stress levels.";
/// Shown when the workload sub-score is below [`WORKLOAD_THRESHOLD`]
pub const WORKLOAD_ADVICE: &str = "Evaluate your study schedule and try to allocate more time to this course to better manage your workload.";
/// Shown when no factor is weak
pub const POSITIVE_ADVICE: &str =
    "Keep up the good work! Maintain your current strategies to continue succeeding in this course.";

/// Academic sub-score below which academic advice is given
pub const ACADEMIC_THRESHOLD: f64 = 0.7;
/// Stress sub-score below which stress advice is given
pub const STRESS_THRESHOLD: f64 = 0.5;
/// Workload sub-score below which workload advice is given
pub const WORKLOAD_THRESHOLD: f64 = 0.5;

/// Advice for the weak factors, academic then stress then workload, or the
/// single positive message when none is weak. Never empty.
#[must_use]
pub fn generate_advice(scores: &SubScores) -> Vec<String> {
    let mut advice: Vec<String> = [
        (scores.academic < ACADEMIC_THRESHOLD, ACADEMIC_ADVICE),
        (scores.stress < STRESS_THRESHOLD, STRESS_ADVICE),
        (scores.workload < WORKLOAD_THRESHOLD, WORKLOAD_ADVICE),
    ]
    .into_iter()
    .filter(|(weak, _)| *weak)
    .map(|(_, text)| text.to_string())
    .collect();

    if advice.is_empty() {
        advice.push(POSITIVE_ADVICE.to_string());
    }
    advice
}
