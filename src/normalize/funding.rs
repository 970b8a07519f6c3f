// src/normalize/funding.rs
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::{headers, require_column};
use crate::table::{self, Table};
use crate::util::round2;

/// The funding amount column as its header reads after cleaning. The raw
/// header wording has drifted between export vintages, so its presence is
/// checked explicitly instead of trusting the file.
const FUND_COLUMN: &str = "AMOUNT_SANCTIONED(RS._L)";

const STATE_COLUMN: &str = "STATE";
const PROJECT_COLUMN: &str = "NAME_OF_PROJECT";
const AGENCY_COLUMN: &str = "AGENCY";
const YEAR_COLUMN: &str = "YEAR";

/// 1 lakh = 1e5 rupees, 1 crore = 1e7 rupees.
const LAKH_TO_CRORE: f64 = 1e5 / 1e7;

/// Clean the state cultural-funding table: drop rows with a null funding
/// amount, rename to canonical column names, trim the three text fields,
/// and derive a crore-unit amount from the lakh-unit one. Output columns:
/// `STATE_NAME,PROJECT_NAME,AGENCY,FUND_ALLOCATED_LAKH,YEAR,FUND_ALLOCATED_CR`.
#[tracing::instrument(level = "info", skip(raw_path, out_path), fields(raw = %raw_path.display()))]
pub fn normalize_funding(raw_path: &Path, out_path: &Path) -> Result<usize> {
    let tbl = Table::from_csv_path(raw_path)?;
    let cleaned: Vec<String> = tbl.headers.iter().map(|h| headers::clean_underscored(h)).collect();
    debug!(?cleaned, "cleaned funding table headers");

    let Some(fund_idx) = cleaned.iter().position(|h| h == FUND_COLUMN) else {
        bail!(
            "funding column {:?} not found in {} even after cleaning (cleaned headers: {:?})",
            FUND_COLUMN,
            raw_path.display(),
            cleaned
        );
    };
    let state_idx = require_column(&cleaned, STATE_COLUMN, raw_path)?;
    let project_idx = require_column(&cleaned, PROJECT_COLUMN, raw_path)?;
    let agency_idx = require_column(&cleaned, AGENCY_COLUMN, raw_path)?;
    let year_idx = require_column(&cleaned, YEAR_COLUMN, raw_path)?;

    let mut dropped = 0usize;
    let mut out_rows: Vec<Vec<String>> = Vec::with_capacity(tbl.rows.len());
    for row in &tbl.rows {
        let fund_cell = table::field(row, fund_idx).trim();
        if fund_cell.is_empty() {
            dropped += 1;
            continue;
        }
        let lakh: f64 = fund_cell.parse().with_context(|| {
            format!(
                "unparseable funding amount {:?} for state {:?}",
                fund_cell,
                table::field(row, state_idx)
            )
        })?;
        out_rows.push(vec![
            table::field(row, state_idx).trim().to_string(),
            table::field(row, project_idx).trim().to_string(),
            table::field(row, agency_idx).trim().to_string(),
            fund_cell.to_string(),
            table::field(row, year_idx).trim().to_string(),
            round2(lakh * LAKH_TO_CRORE).to_string(),
        ]);
    }

    table::write_csv(
        out_path,
        &[
            "STATE_NAME",
            "PROJECT_NAME",
            "AGENCY",
            "FUND_ALLOCATED_LAKH",
            "YEAR",
            "FUND_ALLOCATED_CR",
        ],
        &out_rows,
    )?;
    info!(
        rows = out_rows.len(),
        dropped,
        out = %out_path.display(),
        "funding table normalized"
    );
    Ok(out_rows.len())
}
