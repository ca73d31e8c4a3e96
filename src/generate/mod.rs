//! Data generation for the dashboard's CSV inputs.
//!
//! `salary-dash generate` writes two files: the randomized all-states table
//! and the hand-curated Alabama district table.

mod alabama;
mod sample;

use std::collections::BTreeSet;

use anyhow::Result;

pub use alabama::alabama_districts;
pub use sample::{generate_all, generate_state, StateProfile, DISTRICTS_PER_STATE, STATE_PROFILES};

use crate::data::Storage;

/// Generate both CSV files and report what was written.
pub fn run(storage: &Storage, seed: Option<u64>) -> Result<()> {
    let records = generate_all(seed.unwrap_or(0));
    let states: BTreeSet<&str> = records.iter().map(|r| r.state.as_str()).collect();
    storage.write_general(&records)?;
    println!(
        "Generated {} district records across {} states",
        records.len(),
        states.len()
    );
    println!("Data saved to: {}", storage.general_data_path().display());

    let curated = alabama_districts();
    storage.write_district_detail(&curated)?;
    println!(
        "Wrote curated salary data for {} Alabama districts",
        curated.len()
    );
    println!(
        "Data saved to: {}",
        storage.district_detail_path().display()
    );

    storage.write_district_schedules(&curated)?;
    println!(
        "Salary schedules saved to: {}",
        storage.district_schedule_path().display()
    );
    Ok(())
}
