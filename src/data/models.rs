//! Data models for teacher salary records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of four fixed U.S. geographic groupings used to bucket states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    South,
    Midwest,
    West,
}

impl Region {
    /// All regions, in the order the dashboard lists them (alphabetical).
    pub const ALL: [Region; 4] = [
        Region::Midwest,
        Region::Northeast,
        Region::South,
        Region::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::South => "South",
            Region::Midwest => "Midwest",
            Region::West => "West",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a region string is not one of the four groupings
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown region {0:?} (expected Northeast, South, Midwest, or West)")]
pub struct ParseRegionError(pub String);

impl std::str::FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Northeast" => Ok(Region::Northeast),
            "South" => Ok(Region::South),
            "Midwest" => Ok(Region::Midwest),
            "West" => Ok(Region::West),
            other => Err(ParseRegionError(other.to_string())),
        }
    }
}

/// One district-level salary row, either synthetic or hand-curated.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub state: String,
    pub region: Region,
    pub district: String,
    pub starting_salary: u32,
    pub median_salary: u32,
    pub top_salary: u32,
    pub years_to_top: u32,
    pub budget_share_pct: f64,
    pub num_teachers: u32,
    pub student_teacher_ratio: f64,
    pub avg_raise_pct: f64,
    /// Source attribution; only curated rows carry one.
    #[serde(default)]
    pub data_source: Option<String>,
}

impl SalaryRecord {
    /// Salary growth potential in dollars (top minus starting).
    pub fn salary_range(&self) -> u32 {
        self.top_salary - self.starting_salary
    }

    /// Salary growth as a percentage of the starting salary.
    pub fn growth_pct(&self) -> f64 {
        f64::from(self.salary_range()) / f64::from(self.starting_salary) * 100.0
    }

    /// Salary after `year` years of experience, assuming linear progression
    /// from starting to top pay. Clamped to top pay past `years_to_top`.
    pub fn salary_at_year(&self, year: u32) -> f64 {
        if year >= self.years_to_top {
            return f64::from(self.top_salary);
        }
        f64::from(self.starting_salary)
            + f64::from(self.salary_range()) * f64::from(year) / f64::from(self.years_to_top)
    }
}

/// The in-memory table the dashboard serves from.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<SalaryRecord>,
    /// True when the curated district file was found and merged in.
    pub has_district_detail: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_record(starting: u32, top: u32, years: u32) -> SalaryRecord {
        SalaryRecord {
            state: "Testland".to_string(),
            region: Region::Midwest,
            district: "Testland District 1".to_string(),
            starting_salary: starting,
            median_salary: (starting + top) / 2,
            top_salary: top,
            years_to_top: years,
            budget_share_pct: 50.0,
            num_teachers: 100,
            student_teacher_ratio: 15.0,
            avg_raise_pct: 2.0,
            data_source: None,
        }
    }

    #[test]
    fn test_region_round_trips_through_str() {
        for region in Region::ALL {
            assert_eq!(Region::from_str(region.as_str()), Ok(region));
        }
    }

    #[test]
    fn test_region_rejects_unknown() {
        let err = Region::from_str("Atlantis").unwrap_err();
        assert_eq!(err, ParseRegionError("Atlantis".to_string()));
    }

    #[test]
    fn test_salary_range_and_growth() {
        let record = make_record(40_000, 60_000, 20);
        assert_eq!(record.salary_range(), 20_000);
        assert!((record.growth_pct() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progression_endpoints() {
        let record = make_record(40_000, 60_000, 20);
        assert_eq!(record.salary_at_year(0), 40_000.0);
        assert_eq!(record.salary_at_year(20), 60_000.0);
        // Past the top step the salary stays flat
        assert_eq!(record.salary_at_year(30), 60_000.0);
    }

    #[test]
    fn test_progression_is_linear() {
        let record = make_record(40_000, 60_000, 20);
        assert_eq!(record.salary_at_year(10), 50_000.0);
        assert_eq!(record.salary_at_year(5), 45_000.0);
    }
}
