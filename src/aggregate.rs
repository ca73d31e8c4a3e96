//! Filtering and aggregation behind the dashboard views.
//!
//! Every query is a full scan over the loaded records. The dataset is tens
//! of rows, so there is no indexing and no caching; each request recomputes
//! from scratch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{Region, SalaryRecord};

/// A region/state filter picked in the dashboard dropdowns.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    /// None means all regions
    pub region: Option<Region>,
    /// Empty means all states
    pub states: Vec<String>,
}

impl FilterSelection {
    /// Selection matching every record
    #[allow(dead_code)] // Used in tests
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, record: &SalaryRecord) -> bool {
        if let Some(region) = self.region {
            if record.region != region {
                return false;
            }
        }
        if !self.states.is_empty() && !self.states.iter().any(|s| s == &record.state) {
            return false;
        }
        true
    }
}

/// Records matching the selection, in input order.
pub fn filter_records<'a>(
    records: &'a [SalaryRecord],
    selection: &FilterSelection,
) -> Vec<&'a SalaryRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Sorted distinct state names, optionally limited to one region.
pub fn states_in_region(records: &[SalaryRecord], region: Option<Region>) -> Vec<String> {
    let mut states: Vec<String> = records
        .iter()
        .filter(|r| region.is_none_or(|reg| r.region == reg))
        .map(|r| r.state.clone())
        .collect();
    states.sort();
    states.dedup();
    states
}

/// Per-state averages driving the charts.
#[derive(Debug, Clone, Serialize)]
pub struct StateSummary {
    pub state: String,
    pub region: Region,
    pub avg_starting_salary: f64,
    pub avg_median_salary: f64,
    pub avg_top_salary: f64,
    pub avg_years_to_top: f64,
    pub avg_budget_share_pct: f64,
    pub avg_raise_pct: f64,
    /// Growth potential derived from the averages (top minus starting)
    pub salary_range: f64,
}

#[derive(Default)]
struct SummaryAccumulator {
    count: u32,
    starting: f64,
    median: f64,
    top: f64,
    years: f64,
    budget: f64,
    raise_pct: f64,
}

/// Average the filtered records per state, ordered by state name.
pub fn state_summaries(records: &[&SalaryRecord]) -> Vec<StateSummary> {
    let mut by_state: BTreeMap<&str, (Region, SummaryAccumulator)> = BTreeMap::new();

    for record in records {
        let (_, acc) = by_state
            .entry(record.state.as_str())
            .or_insert((record.region, SummaryAccumulator::default()));
        acc.count += 1;
        acc.starting += f64::from(record.starting_salary);
        acc.median += f64::from(record.median_salary);
        acc.top += f64::from(record.top_salary);
        acc.years += f64::from(record.years_to_top);
        acc.budget += record.budget_share_pct;
        acc.raise_pct += record.avg_raise_pct;
    }

    by_state
        .into_iter()
        .map(|(state, (region, acc))| {
            let n = f64::from(acc.count);
            let avg_starting = acc.starting / n;
            let avg_top = acc.top / n;
            StateSummary {
                state: state.to_string(),
                region,
                avg_starting_salary: avg_starting,
                avg_median_salary: acc.median / n,
                avg_top_salary: avg_top,
                avg_years_to_top: acc.years / n,
                avg_budget_share_pct: acc.budget / n,
                avg_raise_pct: acc.raise_pct / n,
                salary_range: avg_top - avg_starting,
            }
        })
        .collect()
}

/// Headline averages shown in the metric cards.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub avg_starting_salary: f64,
    pub avg_top_salary: f64,
    pub avg_years_to_top: f64,
    pub avg_budget_share_pct: f64,
}

/// Overall averages across the filtered records; None when nothing matches.
pub fn dashboard_metrics(records: &[&SalaryRecord]) -> Option<DashboardMetrics> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;
    Some(DashboardMetrics {
        avg_starting_salary: records
            .iter()
            .map(|r| f64::from(r.starting_salary))
            .sum::<f64>()
            / n,
        avg_top_salary: records.iter().map(|r| f64::from(r.top_salary)).sum::<f64>() / n,
        avg_years_to_top: records
            .iter()
            .map(|r| f64::from(r.years_to_top))
            .sum::<f64>()
            / n,
        avg_budget_share_pct: records.iter().map(|r| r.budget_share_pct).sum::<f64>() / n,
    })
}

/// One career-progression line for the chart.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressionSeries {
    pub state: String,
    pub years: Vec<u32>,
    pub salaries: Vec<f64>,
}

/// Linear starting-to-top progression per state summary, for up to
/// `max_states` entries. Callers pass summaries in the order the chart
/// should show them.
pub fn progression_series(summaries: &[StateSummary], max_states: usize) -> Vec<ProgressionSeries> {
    summaries
        .iter()
        .take(max_states)
        .map(|summary| {
            let span = (summary.avg_years_to_top.round() as u32).max(1);
            let years: Vec<u32> = (0..=span).collect();
            let salaries = years
                .iter()
                .map(|&year| {
                    summary.avg_starting_salary
                        + summary.salary_range * f64::from(year) / f64::from(span)
                })
                .collect();
            ProgressionSeries {
                state: summary.state.clone(),
                years,
                salaries,
            }
        })
        .collect()
}
