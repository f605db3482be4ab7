//! Integration tests for GPA conversion, semester aggregation and course grades

use grade_advisor::core::grading::{
    best_case, cumulative_gpa, current_grade, gpa_to_letter_grade, percentage_to_gpa,
    percentage_to_letter_grade, projected_grade, semester_gpa, what_if, worst_case,
    AssumptionMode, GradedCourse,
};
use grade_advisor::core::models::{Assignment, Course, GradeCategory};
use std::collections::HashMap;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn graded(name: &str, category: &str, earned: f64, max: f64) -> Assignment {
    Assignment::graded(name.to_string(), category.to_string(), earned, max)
}

fn pending(name: &str, category: &str, max: f64) -> Assignment {
    Assignment::new(name.to_string(), category.to_string(), max)
}

#[test]
fn gpa_breakpoints() {
    assert!(approx(percentage_to_gpa(93.0), 4.0));
    assert!(approx(percentage_to_gpa(92.99), 3.7));
    assert!(approx(percentage_to_gpa(59.99), 0.0));
    assert!(approx(percentage_to_gpa(100.0), 4.0));
    assert!(approx(percentage_to_gpa(140.0), 4.0));
    assert!(approx(percentage_to_gpa(-5.0), 0.0));
}

#[test]
fn letter_midpoints() {
    assert_eq!(gpa_to_letter_grade(3.85), "A");
    assert_eq!(gpa_to_letter_grade(3.84999), "A-");
    assert_eq!(gpa_to_letter_grade(0.5), "D-");
    assert_eq!(gpa_to_letter_grade(0.49), "F");
    assert_eq!(percentage_to_letter_grade(88.0), "B+");
    assert_eq!(percentage_to_letter_grade(59.0), "F");
}

#[test]
fn every_percentage_band_keeps_its_letter() {
    let bands = [
        (95.0, "A"),
        (91.0, "A-"),
        (88.0, "B+"),
        (85.0, "B"),
        (81.0, "B-"),
        (78.0, "C+"),
        (75.0, "C"),
        (71.0, "C-"),
        (68.0, "D+"),
        (65.0, "D"),
        (61.0, "D-"),
        (40.0, "F"),
    ];
    for (percentage, letter) in bands {
        assert_eq!(percentage_to_letter_grade(percentage), letter, "{percentage}%");
    }
}

#[test]
fn semester_gpa_needs_graded_courses() {
    assert_eq!(semester_gpa(&[]), None);
    assert_eq!(semester_gpa(&[GradedCourse::new(None, Some(3.0))]), None);
    assert_eq!(semester_gpa(&[GradedCourse::new(Some(95.0), Some(0.0))]), None);

    let gpa = semester_gpa(&[
        GradedCourse::new(Some(93.0), Some(3.0)),
        GradedCourse::new(Some(83.0), Some(3.0)),
    ])
    .expect("two graded courses");
    assert!(approx(gpa, 3.5));
}

#[test]
fn semester_gpa_defaults_missing_credits_and_skips_ungraded() {
    let gpa = semester_gpa(&[
        GradedCourse::new(Some(93.0), Some(1.0)),
        GradedCourse::new(Some(73.0), None),
        GradedCourse::new(None, Some(4.0)),
    ])
    .expect("graded courses present");
    // (4.0 * 1 + 2.0 * 3) / 4
    assert!(approx(gpa, 2.5));
}

#[test]
fn cumulative_gpa_pools_terms_by_credit() {
    let fall = vec![GradedCourse::new(Some(93.0), Some(4.0))];
    let spring = vec![
        GradedCourse::new(Some(83.0), Some(2.0)),
        GradedCourse::new(None, Some(3.0)),
    ];
    let gpa = cumulative_gpa(&[fall, spring]).expect("graded terms");
    // (4.0 * 4 + 3.0 * 2) / 6
    assert!(approx(gpa, 22.0 / 6.0));

    let empty: [Vec<GradedCourse>; 0] = [];
    assert_eq!(cumulative_gpa(&empty), None);
}

fn drop_lowest_course() -> Course {
    let mut course = Course::new("CS3500".to_string(), "Object-Oriented Design".to_string());
    course.add_category(GradeCategory::new("A".to_string(), 50.0).with_drop_lowest(1));
    course.add_category(GradeCategory::new("B".to_string(), 50.0));
    course.add_assignment(graded("A1", "A", 50.0, 50.0));
    course.add_assignment(graded("A2", "A", 40.0, 50.0));
    course.add_assignment(graded("A3", "A", 30.0, 50.0));
    course.add_assignment(pending("B1", "B", 100.0));
    course
}

#[test]
fn empty_category_is_left_out_of_the_average() {
    let course = drop_lowest_course();
    let grade = current_grade(&course.snapshot()).expect("category A is graded");
    assert!(approx(grade, 90.0), "got {grade}");
}

#[test]
fn course_without_graded_work_has_no_grade() {
    let mut course = drop_lowest_course();
    for assignment in &mut course.assignments {
        assignment.score_earned = None;
    }
    assert!(!course.has_graded_work());
    assert_eq!(current_grade(&course.snapshot()), None);
}

#[test]
fn drop_lowest_needs_more_graded_work_than_it_drops() {
    let mut course = Course::new("MATH1365".to_string(), "Intro to Proofs".to_string());
    course.add_category(GradeCategory::new("Quizzes".to_string(), 100.0).with_drop_lowest(2));
    course.add_assignment(graded("Q1", "Quizzes", 5.0, 10.0));
    course.add_assignment(graded("Q2", "Quizzes", 10.0, 10.0));

    // Two graded, two to drop: nothing is dropped
    let grade = current_grade(&course.snapshot()).expect("graded");
    assert!(approx(grade, 75.0));
}

#[test]
fn projections_bracket_the_current_grade() {
    let mut course = Course::new("PHYS1151".to_string(), "Physics for Engineering".to_string());
    course.add_category(GradeCategory::new("Labs".to_string(), 40.0));
    course.add_category(GradeCategory::new("Exams".to_string(), 60.0));
    course.add_assignment(graded("Lab 1", "Labs", 9.0, 10.0));
    course.add_assignment(pending("Lab 2", "Labs", 10.0));
    course.add_assignment(graded("Exam 1", "Exams", 70.0, 100.0));
    course.add_assignment(pending("Exam 2", "Exams", 100.0));

    let snapshot = course.snapshot();
    let current = current_grade(&snapshot).expect("graded");
    let best = best_case(&snapshot).expect("best");
    let worst = worst_case(&snapshot).expect("worst");
    assert!(worst <= current && current <= best);

    // Labs 19/20, Exams 170/200
    assert!(approx(best, 0.4f64.mul_add(95.0, 0.6 * 85.0)));
    // Labs 9/20, Exams 70/200
    assert!(approx(worst, 0.4f64.mul_add(45.0, 0.6 * 35.0)));

    let maintain = projected_grade(&snapshot, AssumptionMode::Maintain).expect("maintain");
    assert!(approx(maintain, current));
}

#[test]
fn projection_modes_fill_untouched_categories() {
    let mut course = Course::new("CHEM1211".to_string(), "General Chemistry".to_string());
    course.add_category(GradeCategory::new("Labs".to_string(), 40.0));
    course.add_category(GradeCategory::new("Exams".to_string(), 60.0));
    course.add_assignment(graded("Lab 1", "Labs", 9.0, 10.0));
    course.add_assignment(pending("Final", "Exams", 100.0));

    let snapshot = course.snapshot();
    let expected = [
        (AssumptionMode::Maintain, 90.0),
        (AssumptionMode::Optimistic, 96.0),
        (AssumptionMode::Realistic, 90.0),
        (AssumptionMode::Conservative, 78.0),
        (AssumptionMode::Pessimistic, 66.0),
    ];
    for (mode, grade) in expected {
        let projected = projected_grade(&snapshot, mode).expect("projection");
        assert!((projected - grade).abs() < 1e-6, "{mode}: {projected}");
    }
}

#[test]
fn what_if_replaces_and_fills_scores() {
    let mut course = Course::new("CS2500".to_string(), "Fundamentals 1".to_string());
    course.add_category(GradeCategory::new("Exams".to_string(), 100.0));
    course.add_assignment(graded("Exam 1", "Exams", 60.0, 100.0));
    course.add_assignment(pending("Exam 2", "Exams", 100.0));

    let mut overrides = HashMap::new();
    overrides.insert("Exam 2".to_string(), 100.0);
    overrides.insert("Nonexistent".to_string(), 0.0);

    let snapshot = course.snapshot();
    let hypothetical = what_if(&snapshot, &overrides).expect("graded");
    assert!(approx(hypothetical, 80.0));
    // The course itself is untouched
    assert!(approx(current_grade(&snapshot).expect("graded"), 60.0));
}

#[test]
fn grading_functions_are_deterministic() {
    let course = drop_lowest_course();
    let snapshot = course.snapshot();
    assert_eq!(
        current_grade(&snapshot).map(f64::to_bits),
        current_grade(&snapshot).map(f64::to_bits)
    );
    assert_eq!(
        percentage_to_gpa(87.3).to_bits(),
        percentage_to_gpa(87.3).to_bits()
    );
    let courses = [
        GradedCourse::new(Some(88.0), Some(4.0)),
        GradedCourse::new(Some(71.0), None),
    ];
    assert_eq!(
        semester_gpa(&courses).map(f64::to_bits),
        semester_gpa(&courses).map(f64::to_bits)
    );
}
