//! Hand-curated Alabama district salary data.
//!
//! Values compiled from official 2024-2025 district salary schedules and
//! third-party aggregators (Indeed, Glassdoor, Salary.com). Unlike the
//! synthetic generator, nothing here is randomized; every row carries its
//! source attribution.

use crate::data::{Region, SalaryRecord, DISTRICT_DETAIL_STATE};

use super::sample::implied_annual_raise_pct;

struct DistrictFacts {
    name: &'static str,
    starting_salary: u32,
    median_salary: u32,
    top_salary: u32,
    years_to_top: u32,
    budget_share_pct: f64,
    num_teachers: u32,
    student_teacher_ratio: f64,
    source: &'static str,
}

/// 2024-2025 school year figures.
const DISTRICTS: [DistrictFacts; 9] = [
    DistrictFacts {
        name: "Baldwin County Schools",
        starting_salary: 47_000,
        median_salary: 54_000,
        top_salary: 72_000,
        years_to_top: 25,
        budget_share_pct: 52.0,
        num_teachers: 1650,
        student_teacher_ratio: 16.5,
        source: "Baldwin County Board of Education salary schedule",
    },
    DistrictFacts {
        name: "Mobile County Public Schools",
        starting_salary: 46_500,
        median_salary: 52_000,
        top_salary: 70_000,
        years_to_top: 25,
        budget_share_pct: 51.0,
        num_teachers: 3200,
        student_teacher_ratio: 17.2,
        source: "Mobile County Public Schools (MCPSS) salary schedule",
    },
    DistrictFacts {
        name: "Saraland City Schools",
        starting_salary: 46_000,
        median_salary: 49_167,
        top_salary: 68_000,
        years_to_top: 23,
        budget_share_pct: 48.5,
        num_teachers: 185,
        student_teacher_ratio: 15.8,
        source: "Salary.com aggregated data",
    },
    DistrictFacts {
        name: "Orange Beach City Schools",
        starting_salary: 45_500,
        median_salary: 48_514,
        top_salary: 66_000,
        years_to_top: 22,
        budget_share_pct: 47.0,
        num_teachers: 95,
        student_teacher_ratio: 14.2,
        source: "Salary.com aggregated data",
    },
    DistrictFacts {
        name: "Gulf Shores City Schools",
        starting_salary: 45_800,
        median_salary: 48_541,
        top_salary: 67_000,
        years_to_top: 22,
        budget_share_pct: 47.5,
        num_teachers: 125,
        student_teacher_ratio: 14.8,
        source: "Gulf Shores City Schools 2024-2025 salary schedule",
    },
    DistrictFacts {
        name: "Birmingham City Schools",
        starting_salary: 48_000,
        median_salary: 54_922,
        top_salary: 75_000,
        years_to_top: 25,
        budget_share_pct: 53.0,
        num_teachers: 2380,
        student_teacher_ratio: 18.5,
        source: "Birmingham City Schools 2024-2025 salary schedule, Indeed/Glassdoor data",
    },
    DistrictFacts {
        name: "Montgomery Public Schools",
        starting_salary: 45_000,
        median_salary: 47_543,
        top_salary: 65_000,
        years_to_top: 24,
        budget_share_pct: 49.0,
        num_teachers: 2100,
        student_teacher_ratio: 17.8,
        source: "Montgomery Public Schools 2024-2025 salary schedule, Salary.com data",
    },
    DistrictFacts {
        name: "Hoover City Schools",
        starting_salary: 49_500,
        median_salary: 56_583,
        top_salary: 78_000,
        years_to_top: 24,
        budget_share_pct: 54.0,
        num_teachers: 1450,
        student_teacher_ratio: 16.2,
        source: "Glassdoor aggregated data, Teacher.org",
    },
    DistrictFacts {
        name: "Huntsville City Schools",
        starting_salary: 47_500,
        median_salary: 54_989,
        top_salary: 84_716,
        years_to_top: 26,
        budget_share_pct: 52.5,
        num_teachers: 2850,
        student_teacher_ratio: 16.8,
        source: "Huntsville City Schools FY2025 salary schedule, Indeed/Glassdoor data",
    },
];

/// Build the curated Alabama records with derived raise percentages.
pub fn alabama_districts() -> Vec<SalaryRecord> {
    DISTRICTS
        .iter()
        .map(|facts| SalaryRecord {
            state: DISTRICT_DETAIL_STATE.to_string(),
            region: Region::South,
            district: facts.name.to_string(),
            starting_salary: facts.starting_salary,
            median_salary: facts.median_salary,
            top_salary: facts.top_salary,
            years_to_top: facts.years_to_top,
            budget_share_pct: facts.budget_share_pct,
            num_teachers: facts.num_teachers,
            student_teacher_ratio: facts.student_teacher_ratio,
            avg_raise_pct: implied_annual_raise_pct(
                facts.starting_salary,
                facts.top_salary,
                facts.years_to_top,
            ),
            data_source: Some(facts.source.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_districts_all_alabama() {
        let records = alabama_districts();
        assert_eq!(records.len(), 9);
        assert!(records.iter().all(|r| r.state == "Alabama"));
        assert!(records.iter().all(|r| r.region == Region::South));
    }

    #[test]
    fn test_every_row_carries_a_source() {
        for record in alabama_districts() {
            let source = record.data_source.as_deref().unwrap_or("");
            assert!(!source.is_empty(), "{} has no source", record.district);
        }
    }

    #[test]
    fn test_curated_values_are_ordered() {
        for record in alabama_districts() {
            assert!(record.starting_salary <= record.median_salary);
            assert!(record.median_salary <= record.top_salary);
            assert!(record.years_to_top >= 20);
            assert!(record.avg_raise_pct > 0.0);
        }
    }

    #[test]
    fn test_district_names_are_unique() {
        let records = alabama_districts();
        let names: std::collections::HashSet<_> =
            records.iter().map(|r| r.district.as_str()).collect();
        assert_eq!(names.len(), records.len());
    }
}
