//! Percentage to GPA conversion on the 4.0 scale

/// Breakpoints checked from the top down: the first `(minimum, points)` whose
/// minimum the percentage reaches wins.
const GPA_BREAKPOINTS: [(f64, f64); 11] = [
    (93.0, 4.0),
    (90.0, 3.7),
    (87.0, 3.3),
    (83.0, 3.0),
    (80.0, 2.7),
    (77.0, 2.3),
    (73.0, 2.0),
    (70.0, 1.7),
    (67.0, 1.3),
    (63.0, 1.0),
    (60.0, 0.7),
];

/// Letter thresholds sit at the midpoints between adjacent GPA values, so
/// they are deliberately not the inverse of [`GPA_BREAKPOINTS`].
const LETTER_MIDPOINTS: [(f64, &str); 11] = [
    (3.85, "A"),
    (3.5, "A-"),
    (3.15, "B+"),
    (2.85, "B"),
    (2.5, "B-"),
    (2.15, "C+"),
    (1.85, "C"),
    (1.5, "C-"),
    (1.15, "D+"),
    (0.85, "D"),
    (0.5, "D-"),
];

/// Convert a course percentage to grade points.
///
/// Any numeric input is accepted: values above 100 map to 4.0 and negative
/// values (or NaN) map to 0.0.
#[must_use]
pub fn percentage_to_gpa(percentage: f64) -> f64 {
    GPA_BREAKPOINTS
        .iter()
        .find(|(minimum, _)| percentage >= *minimum)
        .map_or(0.0, |(_, points)| *points)
}

/// Convert grade points back to a letter grade using midpoint thresholds.
#[must_use]
pub fn gpa_to_letter_grade(gpa: f64) -> &'static str {
    LETTER_MIDPOINTS
        .iter()
        .find(|(minimum, _)| gpa >= *minimum)
        .map_or("F", |(_, letter)| *letter)
}

/// Letter grade for a course percentage
#[must_use]
pub fn percentage_to_letter_grade(percentage: f64) -> &'static str {
    gpa_to_letter_grade(percentage_to_gpa(percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn converts_at_breakpoint_boundaries() {
        assert!(approx(percentage_to_gpa(93.0), 4.0));
        assert!(approx(percentage_to_gpa(92.99), 3.7));
        assert!(approx(percentage_to_gpa(60.0), 0.7));
        assert!(approx(percentage_to_gpa(59.99), 0.0));
        assert!(approx(percentage_to_gpa(100.0), 4.0));
    }

    #[test]
    fn accepts_out_of_range_input() {
        assert!(approx(percentage_to_gpa(140.0), 4.0));
        assert!(approx(percentage_to_gpa(-5.0), 0.0));
        assert!(approx(percentage_to_gpa(f64::NAN), 0.0));
    }

    #[test]
    fn every_breakpoint_maps_to_its_points() {
        let expected = [
            (95.0, 4.0),
            (91.0, 3.7),
            (88.0, 3.3),
            (85.0, 3.0),
            (81.0, 2.7),
            (78.0, 2.3),
            (75.0, 2.0),
            (71.0, 1.7),
            (68.0, 1.3),
            (64.0, 1.0),
            (61.0, 0.7),
            (30.0, 0.0),
        ];
        for (percentage, points) in expected {
            assert!(
                approx(percentage_to_gpa(percentage), points),
                "{percentage}% should be {points}"
            );
        }
    }

    #[test]
    fn letter_grades_use_midpoints() {
        assert_eq!(gpa_to_letter_grade(3.85), "A");
        assert_eq!(gpa_to_letter_grade(3.849_99), "A-");
        assert_eq!(gpa_to_letter_grade(3.7), "A-");
        assert_eq!(gpa_to_letter_grade(3.0), "B");
        assert_eq!(gpa_to_letter_grade(0.5), "D-");
        assert_eq!(gpa_to_letter_grade(0.49), "F");
        assert_eq!(gpa_to_letter_grade(0.0), "F");
    }

    #[test]
    fn percentage_letter_composes_both_tables() {
        assert_eq!(percentage_to_letter_grade(93.0), "A");
        assert_eq!(percentage_to_letter_grade(90.0), "A-");
        assert_eq!(percentage_to_letter_grade(84.0), "B");
        assert_eq!(percentage_to_letter_grade(72.0), "C-");
        assert_eq!(percentage_to_letter_grade(10.0), "F");
    }
}
