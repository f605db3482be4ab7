//! Best, worst, and assumption-based projections of the final grade

use super::calculator::{current_grade, graded_points, score_category, weighted_average, Points};
use crate::core::models::{Assignment, CourseGradeSnapshot};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Assumption about performance on work that has not been graded yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssumptionMode {
    /// Keep performing at the current average
    #[default]
    Maintain,
    /// 100% on everything left
    Optimistic,
    /// 90% on everything left
    Realistic,
    /// 70% on everything left
    Conservative,
    /// 50% on everything left
    Pessimistic,
}

impl AssumptionMode {
    /// All modes, in the order the CLI lists them
    pub const ALL: [Self; 5] = [
        Self::Maintain,
        Self::Optimistic,
        Self::Realistic,
        Self::Conservative,
        Self::Pessimistic,
    ];

    /// Fraction of the remaining weight assumed to be earned; `None` for `Maintain`
    #[must_use]
    pub const fn factor(self) -> Option<f64> {
        match self {
            Self::Maintain => None,
            Self::Optimistic => Some(1.0),
            Self::Realistic => Some(0.9),
            Self::Conservative => Some(0.7),
            Self::Pessimistic => Some(0.5),
        }
    }
}

impl fmt::Display for AssumptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Maintain => "maintain",
            Self::Optimistic => "optimistic",
            Self::Realistic => "realistic",
            Self::Conservative => "conservative",
            Self::Pessimistic => "pessimistic",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AssumptionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_string() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown assumption mode: '{s}'. Use maintain, optimistic, realistic, conservative, or pessimistic"
                )
            })
    }
}

/// Grade if every ungraded assignment earns full marks.
///
/// Categories without any assignments are skipped; drop-lowest still applies.
#[must_use]
pub fn best_case(snapshot: &CourseGradeSnapshot<'_>) -> Option<f64> {
    filled_grade(snapshot, |a| a.max_score)
}

/// Grade if every ungraded assignment earns zero.
///
/// Categories without any assignments are skipped; drop-lowest still applies.
#[must_use]
pub fn worst_case(snapshot: &CourseGradeSnapshot<'_>) -> Option<f64> {
    filled_grade(snapshot, |_| 0.0)
}

fn filled_grade(
    snapshot: &CourseGradeSnapshot<'_>,
    fill: impl Fn(&Assignment) -> f64,
) -> Option<f64> {
    weighted_average(snapshot.categories.iter().filter_map(|category| {
        let points: Vec<Points> = snapshot
            .assignments_in(&category.name)
            .map(|a| Points {
                earned: a.score_earned.unwrap_or_else(|| fill(a)),
                possible: a.max_score,
            })
            .collect();
        if points.is_empty() {
            return None;
        }
        score_category(points, category.drop_lowest)
            .percentage
            .map(|percentage| (percentage, category.weight))
    }))
}

/// Projected final grade under an assumption about the remaining work.
///
/// `Maintain` is the current grade. Every other mode keeps the points already
/// locked in by categories with graded work and fills the rest of a 100-point
/// course with the mode's factor. `None` only for `Maintain` with nothing graded.
#[must_use]
pub fn projected_grade(snapshot: &CourseGradeSnapshot<'_>, mode: AssumptionMode) -> Option<f64> {
    let Some(factor) = mode.factor() else {
        return current_grade(snapshot);
    };

    let (locked, used_weight) = snapshot
        .categories
        .iter()
        .filter_map(|category| {
            score_category(graded_points(snapshot, category), category.drop_lowest)
                .percentage
                .map(|percentage| (percentage / 100.0 * category.weight, category.weight))
        })
        .fold((0.0, 0.0), |(points, used), (earned, weight)| {
            (points + earned, used + weight)
        });

    Some((100.0 - used_weight).mul_add(factor, locked))
}

/// Current grade recomputed with hypothetical scores for named assignments.
///
/// Overrides are keyed by assignment name and replace the recorded score (or
/// fill an ungraded one). Names that match nothing are ignored.
#[must_use]
pub fn what_if(
    snapshot: &CourseGradeSnapshot<'_>,
    overrides: &HashMap<String, f64>,
) -> Option<f64> {
    let assignments: Vec<Assignment> = snapshot
        .assignments
        .iter()
        .map(|a| {
            let mut hypothetical = a.clone();
            if let Some(score) = overrides.get(&a.name) {
                hypothetical.score_earned = Some(*score);
            }
            hypothetical
        })
        .collect();
    current_grade(&CourseGradeSnapshot::new(snapshot.categories, &assignments))
}
