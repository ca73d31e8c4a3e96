//! Synthetic salary data generation.
//!
//! Every state has hand-coded salary bounds (2024 estimates); district
//! values are drawn uniformly within them. Each state seeds its own RNG
//! from a stable hash of its name, so a state's districts do not churn
//! between runs.

use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::data::{Region, SalaryRecord};

/// Hand-coded salary bounds for one state.
#[derive(Debug, Clone, Copy)]
pub struct StateProfile {
    pub name: &'static str,
    pub region: Region,
    /// Starting salary bounds
    pub base_min: u32,
    pub base_max: u32,
    /// Top-of-scale salary bounds
    pub top_min: u32,
    pub top_max: u32,
}

const fn profile(
    name: &'static str,
    region: Region,
    base_min: u32,
    base_max: u32,
    top_min: u32,
    top_max: u32,
) -> StateProfile {
    StateProfile {
        name,
        region,
        base_min,
        base_max,
        top_min,
        top_max,
    }
}

/// Salary bounds per state. `top_min` is always at or above `base_max`,
/// so top pay never undercuts starting pay.
pub const STATE_PROFILES: [StateProfile; 30] = [
    profile("New York", Region::Northeast, 58_000, 95_000, 95_000, 130_000),
    profile("California", Region::West, 50_000, 85_000, 90_000, 125_000),
    profile("Texas", Region::South, 44_000, 60_000, 62_000, 85_000),
    profile("Florida", Region::South, 40_000, 55_000, 58_000, 75_000),
    profile("Illinois", Region::Midwest, 45_000, 65_000, 70_000, 95_000),
    profile("Pennsylvania", Region::Northeast, 46_000, 62_000, 68_000, 92_000),
    profile("Ohio", Region::Midwest, 40_000, 58_000, 62_000, 82_000),
    profile("Georgia", Region::South, 42_000, 57_000, 60_000, 78_000),
    profile("North Carolina", Region::South, 38_000, 52_000, 55_000, 72_000),
    profile("Michigan", Region::Midwest, 42_000, 58_000, 63_000, 84_000),
    profile("Massachusetts", Region::Northeast, 50_000, 75_000, 85_000, 115_000),
    profile("New Jersey", Region::Northeast, 52_000, 78_000, 88_000, 120_000),
    profile("Virginia", Region::South, 42_000, 58_000, 62_000, 80_000),
    profile("Washington", Region::West, 48_000, 68_000, 75_000, 98_000),
    profile("Arizona", Region::West, 40_000, 54_000, 58_000, 72_000),
    profile("Tennessee", Region::South, 40_000, 54_000, 58_000, 74_000),
    profile("Indiana", Region::Midwest, 40_000, 55_000, 60_000, 76_000),
    profile("Missouri", Region::Midwest, 38_000, 52_000, 56_000, 71_000),
    profile("Maryland", Region::South, 50_000, 68_000, 75_000, 100_000),
    profile("Wisconsin", Region::Midwest, 42_000, 57_000, 62_000, 80_000),
    profile("Minnesota", Region::Midwest, 44_000, 60_000, 68_000, 88_000),
    profile("Colorado", Region::West, 42_000, 58_000, 65_000, 82_000),
    profile("Alabama", Region::South, 40_000, 52_000, 56_000, 68_000),
    profile("South Carolina", Region::South, 38_000, 50_000, 54_000, 68_000),
    profile("Louisiana", Region::South, 42_000, 54_000, 58_000, 70_000),
    profile("Kentucky", Region::South, 40_000, 52_000, 56_000, 70_000),
    profile("Oregon", Region::West, 44_000, 60_000, 68_000, 88_000),
    profile("Oklahoma", Region::South, 36_000, 48_000, 52_000, 62_000),
    profile("Connecticut", Region::Northeast, 48_000, 72_000, 82_000, 110_000),
    profile("Iowa", Region::Midwest, 38_000, 52_000, 58_000, 74_000),
];

/// Districts generated per state
pub const DISTRICTS_PER_STATE: u32 = 5;

/// Typical salary schedules run 15-25 years to the top step
const YEARS_TO_TOP_MIN: u32 = 15;
const YEARS_TO_TOP_MAX: u32 = 26;

/// Stable per-state seed: a byte fold of the state name, shifted by the
/// user-supplied offset.
fn state_seed(name: &str, seed_offset: u64) -> u64 {
    name.bytes().fold(seed_offset, |acc, b| {
        acc.wrapping_mul(131).wrapping_add(u64::from(b))
    })
}

/// Compounded annual raise implied by reaching top pay from starting pay in
/// `years` years, as a percentage rounded to two decimals.
pub(crate) fn implied_annual_raise_pct(starting: u32, top: u32, years: u32) -> f64 {
    let ratio = f64::from(top) / f64::from(starting);
    round2((ratio.powf(1.0 / f64::from(years)) - 1.0) * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate the synthetic districts for one state.
pub fn generate_state(profile: &StateProfile, seed_offset: u64) -> Vec<SalaryRecord> {
    let mut rng = SmallRng::seed_from_u64(state_seed(profile.name, seed_offset));

    (1..=DISTRICTS_PER_STATE)
        .map(|n| {
            let starting_salary = rng.gen_range(profile.base_min..profile.base_max);
            let top_salary = rng.gen_range(profile.top_min..profile.top_max);
            let years_to_top = rng.gen_range(YEARS_TO_TOP_MIN..YEARS_TO_TOP_MAX);

            // Median sits 60-70% of the way from starting to top pay
            let spread = f64::from(top_salary - starting_salary);
            let median_salary = starting_salary + (spread * rng.gen_range(0.6..0.7)) as u32;

            SalaryRecord {
                state: profile.name.to_string(),
                region: profile.region,
                district: format!("{} District {n}", profile.name),
                starting_salary,
                median_salary,
                top_salary,
                years_to_top,
                budget_share_pct: round1(rng.gen_range(40.0..60.0)),
                num_teachers: rng.gen_range(50..1000),
                student_teacher_ratio: round1(rng.gen_range(12.0..22.0)),
                avg_raise_pct: implied_annual_raise_pct(starting_salary, top_salary, years_to_top),
                data_source: None,
            }
        })
        .collect()
}

/// Generate the full synthetic dataset for every state in the table.
pub fn generate_all(seed_offset: u64) -> Vec<SalaryRecord> {
    STATE_PROFILES
        .iter()
        .flat_map(|profile| generate_state(profile, seed_offset))
        .collect()
}
