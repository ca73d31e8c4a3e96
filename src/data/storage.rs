//! CSV storage layer for the salary data files.
//!
//! File layout inside the data directory:
//! - `teacher_salary_data.csv`: synthetic district rows for every state
//! - `alabama_teacher_salaries.csv`: curated Alabama rows, optional; when
//!   present its rows replace the synthetic Alabama rows

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::models::{Dataset, SalaryRecord};

/// Synthetic data for all states, written by `salary-dash generate`.
pub const GENERAL_DATA_FILE: &str = "teacher_salary_data.csv";

/// Curated district-level data with source attribution.
pub const DISTRICT_DETAIL_FILE: &str = "alabama_teacher_salaries.csv";

/// Per-district salary schedules at experience milestones.
pub const DISTRICT_SCHEDULE_FILE: &str = "alabama_teacher_salaries_detailed.csv";

/// The state the curated file covers.
pub const DISTRICT_DETAIL_STATE: &str = "Alabama";

/// Experience milestones in the schedule file
pub const SCHEDULE_MILESTONES: [u32; 7] = [0, 5, 10, 15, 20, 25, 30];

/// Storage interface for the CSV data directory
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a new Storage instance pointing to the data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Storage { data_dir }
    }

    pub fn general_data_path(&self) -> PathBuf {
        self.data_dir.join(GENERAL_DATA_FILE)
    }

    pub fn district_detail_path(&self) -> PathBuf {
        self.data_dir.join(DISTRICT_DETAIL_FILE)
    }

    pub fn district_schedule_path(&self) -> PathBuf {
        self.data_dir.join(DISTRICT_SCHEDULE_FILE)
    }

    /// Write the synthetic all-states table
    pub fn write_general(&self, records: &[SalaryRecord]) -> Result<()> {
        write_records(&self.general_data_path(), records)
    }

    /// Write the curated district table
    pub fn write_district_detail(&self, records: &[SalaryRecord]) -> Result<()> {
        write_records(&self.district_detail_path(), records)
    }

    /// Write salary-at-milestone schedules for the curated districts.
    ///
    /// Informational companion to the detail file; the dashboard never reads
    /// it back.
    pub fn write_district_schedules(&self, records: &[SalaryRecord]) -> Result<()> {
        let path = self.district_schedule_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {parent:?}"))?;
        }

        let mut writer =
            csv::Writer::from_path(&path).with_context(|| format!("Failed to create {path:?}"))?;

        let mut header = vec![
            "state".to_string(),
            "district".to_string(),
            "starting_salary".to_string(),
            "top_salary".to_string(),
            "years_to_top".to_string(),
        ];
        header.extend(SCHEDULE_MILESTONES.iter().map(|year| format!("year_{year}")));
        writer.write_record(&header)?;

        for record in records {
            let mut row = vec![
                record.state.clone(),
                record.district.clone(),
                record.starting_salary.to_string(),
                record.top_salary.to_string(),
                record.years_to_top.to_string(),
            ];
            row.extend(
                SCHEDULE_MILESTONES
                    .iter()
                    .map(|&year| (record.salary_at_year(year) as u32).to_string()),
            );
            writer.write_record(&row)?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {path:?}"))?;
        Ok(())
    }

    /// Load the dashboard dataset.
    ///
    /// The general file is required; the district-detail file is optional.
    /// When the detail file is present, the synthetic rows for its state are
    /// dropped and the curated rows appended in their place.
    pub fn load_dataset(&self) -> Result<Dataset> {
        let general = self.general_data_path();
        if !general.exists() {
            anyhow::bail!(
                "salary data not found at {general:?}; run `salary-dash generate` first"
            );
        }
        let mut records = read_records(&general)?;

        let detail = self.district_detail_path();
        let has_district_detail = detail.exists();
        if has_district_detail {
            let curated = read_records(&detail)?;
            records.retain(|r| r.state != DISTRICT_DETAIL_STATE);
            records.extend(curated);
        }

        Ok(Dataset {
            records,
            has_district_detail,
        })
    }
}

/// Read every row of a salary CSV into memory
fn read_records(path: &Path) -> Result<Vec<SalaryRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open {path:?}"))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: SalaryRecord = row.with_context(|| format!("Malformed row in {path:?}"))?;
        records.push(record);
    }
    Ok(records)
}

/// Write salary records to a CSV file, creating the directory if needed
fn write_records(path: &Path, records: &[SalaryRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {parent:?}"))?;
    }

    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("Failed to create {path:?}"))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {path:?}"))?;
    Ok(())
}
