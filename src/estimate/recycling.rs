use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::{error::EstimateError, quantity::mass::Tonnes};

/// Nation-wide average recycling rate, in percent.
pub const NATIONAL_AVERAGE_RATE: f64 = 69.8;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RecyclingGrade {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RecyclingGrade {
    /// Band the rate relative to the national average, in percent.
    fn from_relative_rate(relative_rate: f64) -> Self {
        if relative_rate < 50.0 {
            Self::Low
        } else if relative_rate < 75.0 {
            Self::Moderate
        } else if relative_rate < 100.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Low => Color::Red,
            Self::Moderate => Color::DarkYellow,
            Self::High => Color::Green,
            Self::VeryHigh => Color::Blue,
        }
    }
}

impl Display for RecyclingGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::VeryHigh => write!(f, "Very high"),
        }
    }
}

/// Informational only: the grade never feeds the footprint tally.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RecyclingAssessment {
    /// Recycled share of the total waste, in percent.
    pub rate: f64,

    /// The rate relative to [`NATIONAL_AVERAGE_RATE`], in percent.
    pub relative_rate: f64,

    pub grade: RecyclingGrade,
}

pub fn grade(waste: Tonnes, recycled: Tonnes) -> Result<RecyclingAssessment, EstimateError> {
    ensure_input!(waste > Tonnes::ZERO, "total waste must be positive, got {waste}");
    ensure_input!(recycled >= Tonnes::ZERO, "recycled amount must be non-negative, got {recycled}");
    ensure_input!(
        recycled <= waste,
        "recycled amount ({recycled}) must not exceed the total waste ({waste})",
    );

    let rate = (recycled / waste) * 100.0;
    let relative_rate = rate / NATIONAL_AVERAGE_RATE * 100.0;
    Ok(RecyclingAssessment { rate, relative_rate, grade: RecyclingGrade::from_relative_rate(relative_rate) })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_below_average_rate() -> Result<(), EstimateError> {
        let assessment = grade(Tonnes(1000.0), Tonnes(300.0))?;
        assert_abs_diff_eq!(assessment.rate, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(assessment.relative_rate, 42.98, epsilon = 0.01);
        assert_eq!(assessment.grade, RecyclingGrade::Low);
        Ok(())
    }

    #[test]
    fn test_grade_banding() {
        assert_eq!(RecyclingGrade::from_relative_rate(0.0), RecyclingGrade::Low);
        assert_eq!(RecyclingGrade::from_relative_rate(49.9), RecyclingGrade::Low);
        assert_eq!(RecyclingGrade::from_relative_rate(50.0), RecyclingGrade::Moderate);
        assert_eq!(RecyclingGrade::from_relative_rate(74.9), RecyclingGrade::Moderate);
        assert_eq!(RecyclingGrade::from_relative_rate(75.0), RecyclingGrade::High);
        assert_eq!(RecyclingGrade::from_relative_rate(99.9), RecyclingGrade::High);
        assert_eq!(RecyclingGrade::from_relative_rate(100.0), RecyclingGrade::VeryHigh);
    }

    #[test]
    fn test_recycling_everything() -> Result<(), EstimateError> {
        let assessment = grade(Tonnes(100.0), Tonnes(100.0))?;
        assert_abs_diff_eq!(assessment.rate, 100.0, epsilon = 1e-9);
        assert_eq!(assessment.grade, RecyclingGrade::VeryHigh);
        Ok(())
    }

    #[test]
    fn test_recycled_exceeding_waste_fails() {
        assert!(matches!(
            grade(Tonnes(1000.0), Tonnes(1500.0)),
            Err(EstimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_waste_fails() {
        assert!(matches!(grade(Tonnes(0.0), Tonnes(0.0)), Err(EstimateError::InvalidInput(_))));
    }
}
