//! Per-course analysis and semester roll-ups
//!
//! This is where the pure pieces meet: one [`CourseAnalysis`] carries every
//! number the CLI and reports show for a course, and [`SemesterSummary`]
//! aggregates a set of them.

use crate::core::grading::{
    best_case, category_breakdown, current_grade, percentage_to_gpa, percentage_to_letter_grade,
    semester_gpa, gpa_to_letter_grade, worst_case, CategoryScore, GradedCourse,
};
use crate::core::models::{Course, Term};
use crate::core::recommendation::{recommend, RecommendationInput, RecommendationResult, RiskLevel};
use serde::Serialize;

/// Label of the group holding courses without a recognisable term
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Everything computed for one course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseAnalysis {
    /// Course identifier
    pub id: String,
    /// Course name
    pub name: String,
    /// Parsed term, if the course names a valid one
    pub term: Option<Term>,
    /// Credit hours as recorded
    pub credits: Option<f64>,
    /// Passing grade used for the recommendation
    pub passing_grade: f64,
    /// Required course (vs. elective)
    pub is_required: bool,
    /// Current percentage
    pub current_grade: Option<f64>,
    /// Letter for the current grade
    pub letter: Option<&'static str>,
    /// Grade points for the current grade
    pub gpa_points: Option<f64>,
    /// Grade with full marks on everything left
    pub best_case: Option<f64>,
    /// Grade with zero on everything left
    pub worst_case: Option<f64>,
    /// Per-category breakdown in rubric order
    pub categories: Vec<CategoryScore>,
    /// Engine input, present once something is graded
    pub input: Option<RecommendationInput>,
    /// Engine output, present once something is graded
    pub recommendation: Option<RecommendationResult>,
}

impl CourseAnalysis {
    /// Analyse a course.
    ///
    /// An ungraded course gets no recommendation: the engine needs a numeric
    /// grade and zero would be a false signal.
    #[must_use]
    pub fn analyze(course: &Course) -> Self {
        let snapshot = course.snapshot();
        let grade = current_grade(&snapshot);
        let passing_grade = course.effective_passing_grade();

        let input = grade.map(|current_grade| RecommendationInput {
            current_grade,
            passing_grade,
            is_required: course.is_required,
            stress_level: course.stress_level,
            weekly_hours: course.weekly_hours,
        });

        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            term: course.term.as_deref().and_then(|t| t.parse().ok()),
            credits: course.credits,
            passing_grade,
            is_required: course.is_required,
            current_grade: grade,
            letter: grade.map(percentage_to_letter_grade),
            gpa_points: grade.map(percentage_to_gpa),
            best_case: best_case(&snapshot),
            worst_case: worst_case(&snapshot),
            categories: category_breakdown(&snapshot),
            recommendation: input.as_ref().map(recommend),
            input,
        }
    }

    /// Risk level, if the course has been scored
    #[must_use]
    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.recommendation.as_ref().map(|r| r.risk_level)
    }

    /// Aggregator input for this course
    #[must_use]
    pub const fn graded_course(&self) -> GradedCourse {
        GradedCourse::new(self.current_grade, self.credits)
    }
}

/// Number of courses in each risk bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    /// Excellent courses
    pub excellent: usize,
    /// Safe courses
    pub safe: usize,
    /// At-risk courses
    pub at_risk: usize,
    /// Critical courses
    pub critical: usize,
}

impl RiskCounts {
    /// Count one more course at `level`
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Excellent => self.excellent += 1,
            RiskLevel::Safe => self.safe += 1,
            RiskLevel::AtRisk => self.at_risk += 1,
            RiskLevel::Critical => self.critical += 1,
        }
    }

    /// Courses counted at `level`
    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Excellent => self.excellent,
            RiskLevel::Safe => self.safe,
            RiskLevel::AtRisk => self.at_risk,
            RiskLevel::Critical => self.critical,
        }
    }

    /// Courses that are at risk or critical
    #[must_use]
    pub const fn needing_attention(&self) -> usize {
        self.at_risk + self.critical
    }
}

/// Roll-up over a set of analysed courses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Credit-weighted GPA of graded courses
    pub gpa: Option<f64>,
    /// Letter for `gpa`
    pub letter: Option<&'static str>,
    /// Courses with at least one counted score
    pub graded_courses: usize,
    /// Courses with nothing counted yet
    pub ungraded_courses: usize,
    /// Credit hours across all courses, with the default applied
    pub total_credits: f64,
    /// Courses per risk bucket
    pub risk_counts: RiskCounts,
}

impl SemesterSummary {
    /// Summarise a set of analyses
    #[must_use]
    pub fn from_courses<'a>(courses: impl IntoIterator<Item = &'a CourseAnalysis>) -> Self {
        let mut graded = Vec::new();
        let mut ungraded_courses = 0;
        let mut total_credits = 0.0;
        let mut risk_counts = RiskCounts::default();

        for course in courses {
            let entry = course.graded_course();
            total_credits += entry.effective_credits();
            if course.current_grade.is_some() {
                graded.push(entry);
            } else {
                ungraded_courses += 1;
            }
            if let Some(level) = course.risk_level() {
                risk_counts.record(level);
            }
        }

        let gpa = semester_gpa(&graded);
        Self {
            gpa,
            letter: gpa.map(gpa_to_letter_grade),
            graded_courses: graded.len(),
            ungraded_courses,
            total_credits,
            risk_counts,
        }
    }
}

/// Courses sharing one term
#[derive(Debug, Clone)]
pub struct TermGroup<'a> {
    /// Term, or `None` for the uncategorized group
    pub term: Option<Term>,
    /// Courses in input order
    pub courses: Vec<&'a CourseAnalysis>,
}

impl TermGroup<'_> {
    /// Display label such as "Fall 2026" or [`UNCATEGORIZED`]
    #[must_use]
    pub fn label(&self) -> String {
        self.term
            .map_or_else(|| UNCATEGORIZED.to_string(), |t| t.to_string())
    }

    /// Summary of this group's courses
    #[must_use]
    pub fn summary(&self) -> SemesterSummary {
        SemesterSummary::from_courses(self.courses.iter().copied())
    }

    /// Aggregator inputs for this group's courses
    #[must_use]
    pub fn graded_courses(&self) -> Vec<GradedCourse> {
        self.courses.iter().map(|c| c.graded_course()).collect()
    }
}

/// Group analyses by term, oldest term first, with uncategorized courses last
#[must_use]
pub fn group_by_term(courses: &[CourseAnalysis]) -> Vec<TermGroup<'_>> {
    let mut groups: Vec<TermGroup<'_>> = Vec::new();
    for course in courses {
        match groups.iter_mut().find(|g| g.term == course.term) {
            Some(group) => group.courses.push(course),
            None => groups.push(TermGroup {
                term: course.term,
                courses: vec![course],
            }),
        }
    }
    // None sorts before Some, so order by (is_none, term) to put it last
    groups.sort_by_key(|g| (g.term.is_none(), g.term));
    groups
}
