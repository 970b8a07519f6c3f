// src/normalize/mod.rs
//! The preprocessing stage: four independent routines, each a pure function
//! from one raw CSV to one cleaned CSV. They share no state and can run in
//! any order; [`run_all`] is the batch driver the one-shot binary calls.

pub mod headers;

mod forex;
mod funding;
mod international;
mod tourism_fee;

pub use forex::normalize_forex;
pub use funding::normalize_funding;
pub use international::normalize_international;
pub use tourism_fee::normalize_tourism_fee;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

// Raw file names as published.
pub const RAW_TOURISM_FEE: &str = "fee-from-tourism2019-21.csv";
pub const RAW_FOREX: &str = "Foreign-exchange-earning2014-20.csv";
pub const RAW_INTERNATIONAL: &str = "internation-tourism2001-21.csv";
pub const RAW_FUNDING: &str = "state-wise-finance-artcluture-2019-24.csv";

// Cleaned file names the dashboard reads. Downstream depends on these names
// and on the exact column names each normalizer emits.
pub const PROCESSED_TOURISM_FEE: &str = "tourism_fee_final.csv";
pub const PROCESSED_FOREX: &str = "foreign_exchange_earnings.csv";
pub const PROCESSED_INTERNATIONAL: &str = "international_tourism_stats.csv";
pub const PROCESSED_FUNDING: &str = "state_cultural_funding.csv";

/// Run all four normalizers. Any failure aborts the batch; there is no
/// partial-success or retry policy.
pub fn run_all(raw_dir: &Path, processed_dir: &Path) -> Result<()> {
    let rows = normalize_tourism_fee(
        &raw_dir.join(RAW_TOURISM_FEE),
        &processed_dir.join(PROCESSED_TOURISM_FEE),
    )?;
    info!(rows, file = PROCESSED_TOURISM_FEE, "saved");

    let rows = normalize_forex(&raw_dir.join(RAW_FOREX), &processed_dir.join(PROCESSED_FOREX))?;
    info!(rows, file = PROCESSED_FOREX, "saved");

    let rows = normalize_international(
        &raw_dir.join(RAW_INTERNATIONAL),
        &processed_dir.join(PROCESSED_INTERNATIONAL),
    )?;
    info!(rows, file = PROCESSED_INTERNATIONAL, "saved");

    let rows = normalize_funding(
        &raw_dir.join(RAW_FUNDING),
        &processed_dir.join(PROCESSED_FUNDING),
    )?;
    info!(rows, file = PROCESSED_FUNDING, "saved");

    Ok(())
}

/// Position of a required column among cleaned headers, or an error naming
/// the column and listing what the file actually had.
pub(crate) fn require_column(cleaned: &[String], name: &str, raw_path: &Path) -> Result<usize> {
    cleaned.iter().position(|h| h == name).with_context(|| {
        format!(
            "column {} not found in {} after cleaning (cleaned headers: {:?})",
            name,
            raw_path.display(),
            cleaned
        )
    })
}
