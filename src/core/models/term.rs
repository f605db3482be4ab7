//! Academic term model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season of an academic term, in calendar order within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// January through May
    Spring,
    /// June through August
    Summer,
    /// September through December
    Fall,
    /// Intersession term; never produced by date detection
    Winter,
}

impl Season {
    /// Season a calendar month (1-12) falls in
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            1..=5 => Self::Spring,
            6..=8 => Self::Summer,
            _ => Self::Fall,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            other => Err(format!("Unknown season: '{other}'")),
        }
    }
}

/// An academic term such as "Fall 2026"
///
/// Terms order chronologically: by year, then by season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Calendar year
    pub year: i32,
    /// Season within the year
    pub season: Season,
}

impl Term {
    /// Create a term
    #[must_use]
    pub const fn new(season: Season, year: i32) -> Self {
        Self { year, season }
    }

    /// Term a date falls in
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(Season::from_month(date.month()), date.year())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

impl FromStr for Term {
    type Err = String;

    /// Parse `"<Season> <Year>"`, e.g. `"Spring 2026"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(season), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!(
                "Invalid term '{s}': expected '<Season> <Year>' (e.g. 'Fall 2026')"
            ));
        };
        let season = season.parse::<Season>()?;
        let year = year
            .parse::<i32>()
            .map_err(|_| format!("Invalid year in term '{s}'"))?;
        Ok(Self::new(season, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let term: Term = "Spring 2026".parse().expect("parse term");
        assert_eq!(term, Term::new(Season::Spring, 2026));
        assert_eq!(term.to_string(), "Spring 2026");

        let fall: Term = "  fall   2025 ".parse().expect("parse lowercase term");
        assert_eq!(fall, Term::new(Season::Fall, 2025));
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        assert!("Spring".parse::<Term>().is_err());
        assert!("Spring twenty".parse::<Term>().is_err());
        assert!("Monsoon 2026".parse::<Term>().is_err());
        assert!("Fall 2026 extra".parse::<Term>().is_err());
    }

    #[test]
    fn test_containing_date() {
        let cases = [
            ((2026, 1, 15), Season::Spring),
            ((2026, 5, 31), Season::Spring),
            ((2026, 6, 1), Season::Summer),
            ((2026, 8, 31), Season::Summer),
            ((2026, 9, 1), Season::Fall),
            ((2026, 12, 20), Season::Fall),
        ];
        for ((y, m, d), season) in cases {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
            assert_eq!(Term::containing(date), Term::new(season, 2026));
        }
    }

    #[test]
    fn test_terms_order_chronologically() {
        let mut terms = vec![
            Term::new(Season::Fall, 2026),
            Term::new(Season::Spring, 2026),
            Term::new(Season::Fall, 2025),
            Term::new(Season::Summer, 2026),
        ];
        terms.sort();
        let labels: Vec<String> = terms.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec!["Fall 2025", "Spring 2026", "Summer 2026", "Fall 2026"]
        );
    }
}
