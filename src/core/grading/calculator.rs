//! Weighted course grade from categories, assignments, and drop-lowest policies

use crate::core::models::{CourseGradeSnapshot, GradeCategory};
use serde::{Deserialize, Serialize};

/// How one category contributed to the course grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category key
    pub name: String,
    /// Category weight as defined on the course
    pub weight: f64,
    /// Category percentage after drops, `None` when nothing counts yet
    pub percentage: Option<f64>,
    /// Graded assignments in the category, before drops
    pub graded: usize,
    /// Graded assignments removed by the drop-lowest policy
    pub dropped: usize,
    /// Assignments still waiting for a score
    pub ungraded: usize,
}

/// Earned and possible points for one counted assignment
#[derive(Debug, Clone, Copy)]
pub(crate) struct Points {
    pub earned: f64,
    pub possible: f64,
}

impl Points {
    fn ratio(self) -> f64 {
        self.earned / self.possible
    }
}

/// Result of scoring one category's counted work
#[derive(Debug, Clone, Copy)]
pub(crate) struct CategoryTotal {
    pub percentage: Option<f64>,
    pub dropped: usize,
}

/// Apply the drop-lowest policy and total the remaining points.
///
/// `points` must be in input order. Drops happen only when more than
/// `drop_lowest` entries exist; ties drop the earlier entry first.
pub(crate) fn score_category(mut points: Vec<Points>, drop_lowest: usize) -> CategoryTotal {
    let mut dropped = 0;
    if drop_lowest > 0 && points.len() > drop_lowest {
        // sort_by is stable, so equal ratios keep input order
        points.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));
        points.drain(..drop_lowest);
        dropped = drop_lowest;
    }

    let (earned, possible) = points
        .iter()
        .fold((0.0, 0.0), |(e, p), pts| (e + pts.earned, p + pts.possible));

    let percentage = if possible > 0.0 {
        Some(earned / possible * 100.0)
    } else {
        None
    };
    CategoryTotal {
        percentage,
        dropped,
    }
}

/// Weighted mean of `(percentage, weight)` pairs, renormalised by the weight
/// that actually contributed. `None` when that weight is zero.
pub(crate) fn weighted_average(parts: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let (weighted, total_weight) = parts
        .into_iter()
        .fold((0.0, 0.0), |(sum, total), (percentage, weight)| {
            (sum + percentage * weight, total + weight)
        });

    if total_weight == 0.0 {
        return None;
    }
    Some(weighted / total_weight)
}

/// Points of the graded assignments in `category`, in input order
pub(crate) fn graded_points<'a>(
    snapshot: &CourseGradeSnapshot<'a>,
    category: &'a GradeCategory,
) -> Vec<Points> {
    snapshot
        .assignments_in(&category.name)
        .filter_map(|a| {
            a.score_earned.map(|earned| Points {
                earned,
                possible: a.max_score,
            })
        })
        .collect()
}

/// Current course grade as a percentage.
///
/// Only graded assignments in categories defined on the course count. Each
/// category's percentage is weighted by its weight, and the result is
/// renormalised by the total weight of categories that had anything to count.
/// Returns `None` when no category contributes.
#[must_use]
pub fn current_grade(snapshot: &CourseGradeSnapshot<'_>) -> Option<f64> {
    weighted_average(snapshot.categories.iter().filter_map(|category| {
        score_category(graded_points(snapshot, category), category.drop_lowest)
            .percentage
            .map(|percentage| (percentage, category.weight))
    }))
}

/// Per-category view of [`current_grade`], in rubric order
#[must_use]
pub fn category_breakdown(snapshot: &CourseGradeSnapshot<'_>) -> Vec<CategoryScore> {
    snapshot
        .categories
        .iter()
        .map(|category| {
            let points = graded_points(snapshot, category);
            let graded = points.len();
            let ungraded = snapshot
                .assignments_in(&category.name)
                .filter(|a| !a.is_graded())
                .count();
            let total = score_category(points, category.drop_lowest);
            CategoryScore {
                name: category.name.clone(),
                weight: category.weight,
                percentage: total.percentage,
                graded,
                dropped: total.dropped,
                ungraded,
            }
        })
        .collect()
}
