// src/normalize/tourism_fee.rs
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::headers;
use crate::table::{self, Table};
use crate::util::round2;

/// Expected year labels in the wide fee table, keyed by cleaned header text.
/// The `?` is the rupee glyph as it survives the publisher's own encoding.
/// Matching is by substring containment so stray characters around a label
/// do not break the lookup; every entry here must match some column.
const EXPECTED_FEE_LABELS: &[(&str, i32)] = &[
    ("FEE FROM TOURISM (IN ? CRORE) - 2019", 2019),
    ("FEE FROM TOURISM (IN ? CRORE) - 2020", 2020),
    ("FEE FROM TOURISM (IN ? CRORE) - 2021", 2021),
    ("FEE FROM TOURISM (IN ? CRORE) - 2023", 2023),
    ("FEE FROM TOURISM (IN ? CRORE) - 2024", 2024),
];

/// Series published on the wrong unit scale, keyed by year: the 2021 column
/// arrived in lakh, so dividing by 100 restores crore. A future correction
/// is one more entry here, not another inline conditional.
const UNIT_SCALE_CORRECTIONS: &[(i32, f64)] = &[(2021, 100.0)];

const MONTH_COLUMN: &str = "MONTH";

/// Reshape the wide per-year fee table into long form: one output row per
/// (month, year) pair with a non-null fee, columns `month,year,total_fee_cr`.
/// Returns the number of rows written.
#[tracing::instrument(level = "info", skip(raw_path, out_path), fields(raw = %raw_path.display()))]
pub fn normalize_tourism_fee(raw_path: &Path, out_path: &Path) -> Result<usize> {
    let tbl = Table::from_csv_path(raw_path)?;
    let cleaned: Vec<String> = tbl.headers.iter().map(|h| headers::clean_spaced(h)).collect();
    debug!(?cleaned, "cleaned fee table headers");

    let month_idx = cleaned
        .iter()
        .position(|h| h == MONTH_COLUMN)
        .with_context(|| {
            format!(
                "no {} column in {} (cleaned headers: {:?})",
                MONTH_COLUMN,
                raw_path.display(),
                cleaned
            )
        })?;

    // Match each expected label to a column, in file column order.
    let mut matched: Vec<(usize, i32)> = Vec::new();
    let mut unmatched: Vec<&str> = Vec::new();
    for &(label, year) in EXPECTED_FEE_LABELS {
        match cleaned.iter().position(|h| h.contains(label)) {
            Some(idx) => matched.push((idx, year)),
            None => unmatched.push(label),
        }
    }
    if !unmatched.is_empty() {
        bail!(
            "expected fee columns missing from {}: {:?} (cleaned headers: {:?})",
            raw_path.display(),
            unmatched,
            cleaned
        );
    }
    matched.sort_by_key(|&(idx, _)| idx);

    let mut out_rows: Vec<Vec<String>> = Vec::new();
    for &(col, year) in &matched {
        let divisor = UNIT_SCALE_CORRECTIONS
            .iter()
            .find(|&&(y, _)| y == year)
            .map(|&(_, d)| d);

        for row in &tbl.rows {
            let cell = table::field(row, col).trim();
            if cell.is_empty() {
                continue;
            }
            let month = table::field(row, month_idx).trim().to_string();
            let fee = match divisor {
                Some(d) => {
                    let v: f64 = cell.parse().with_context(|| {
                        format!("unparseable fee {:?} for {} {}", cell, month, year)
                    })?;
                    round2(v / d).to_string()
                }
                // Untouched series pass the published value through as-is.
                None => cell.to_string(),
            };
            out_rows.push(vec![month, year.to_string(), fee]);
        }
    }

    table::write_csv(out_path, &["month", "year", "total_fee_cr"], &out_rows)?;
    info!(rows = out_rows.len(), out = %out_path.display(), "fee table reshaped");
    Ok(out_rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,tourstats::normalize=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    const RAW: &str = "\
Month,FEE FROM TOURISM (IN ? CRORE) - 2019,Fee from tourism (in ? crore) - 2020,FEE  FROM TOURISM (IN ? CRORE) - 2021,FEE FROM TOURISM (IN ? CRORE) - 2023,FEE FROM TOURISM (IN ? CRORE) - 2024,Remarks
January,500,450,500,700,750,ok
February,510,,46000,710,760,
March,,430,47000,,770,partial
";

    fn run(raw: &str) -> Result<(usize, Table)> {
        init_test_logging();
        let dir = tempdir()?;
        let raw_path = dir.path().join("fee.csv");
        let out_path = dir.path().join("fee_final.csv");
        fs::write(&raw_path, raw)?;
        let rows = normalize_tourism_fee(&raw_path, &out_path)?;
        let out = Table::from_csv_path(&out_path)?;
        Ok((rows, out))
    }

    #[test]
    fn reshapes_wide_to_long_skipping_nulls() -> Result<()> {
        let (rows, out) = run(RAW)?;
        assert_eq!(out.headers, vec!["month", "year", "total_fee_cr"]);
        // 2 + 2 + 3 + 2 + 3 non-empty fee cells
        assert_eq!(rows, 12);
        assert_eq!(out.rows.len(), 12);
        // grouped by year column first, months in file order within it
        assert_eq!(out.rows[0], vec!["January", "2019", "500"]);
        assert_eq!(out.rows[1], vec!["February", "2019", "510"]);
        Ok(())
    }

    #[test]
    fn scales_the_lakh_year_down_to_crore() -> Result<()> {
        let (_, out) = run(RAW)?;
        let fees_2021: Vec<&str> = out
            .rows
            .iter()
            .filter(|r| r[1] == "2021")
            .map(|r| r[2].as_str())
            .collect();
        assert_eq!(fees_2021, vec!["5", "460", "470"]);
        // untouched years keep the published value
        let jan_2023 = out.rows.iter().find(|r| r[1] == "2023").expect("2023 rows");
        assert_eq!(jan_2023[2], "700");
        Ok(())
    }

    #[test]
    fn unmatched_labels_fail_listing_them() -> Result<()> {
        let raw = "Month,FEE FROM TOURISM (IN ? CRORE) - 2019\nJanuary,500\n";
        let dir = tempdir()?;
        let raw_path = dir.path().join("fee.csv");
        fs::write(&raw_path, raw)?;
        let err = normalize_tourism_fee(&raw_path, &dir.path().join("out.csv"))
            .expect_err("should fail on missing year columns");
        let msg = format!("{err:#}");
        assert!(msg.contains("missing"));
        for year in ["2020", "2021", "2023", "2024"] {
            assert!(msg.contains(year), "unmatched label for {year} not listed");
        }
        Ok(())
    }

    #[test]
    fn missing_month_column_fails() -> Result<()> {
        let raw = "Period,FEE FROM TOURISM (IN ? CRORE) - 2019\nJanuary,500\n";
        let dir = tempdir()?;
        let raw_path = dir.path().join("fee.csv");
        fs::write(&raw_path, raw)?;
        let err = normalize_tourism_fee(&raw_path, &dir.path().join("out.csv"))
            .expect_err("should fail without MONTH");
        assert!(format!("{err:#}").contains("MONTH"));
        Ok(())
    }

    #[test]
    fn headers_match_through_stray_characters() -> Result<()> {
        // NBSP and doubled spaces around the label, plus a prefix
        let raw = "\
MONTH,X FEE FROM\u{a0}TOURISM  (IN ? CRORE) - 2019,FEE FROM TOURISM (IN ? CRORE) - 2020,FEE FROM TOURISM (IN ? CRORE) - 2021,FEE FROM TOURISM (IN ? CRORE) - 2023,FEE FROM TOURISM (IN ? CRORE) - 2024
January,100,200,300,400,500
";
        let (rows, out) = run(raw)?;
        assert_eq!(rows, 5);
        assert_eq!(out.rows[0], vec!["January", "2019", "100"]);
        Ok(())
    }
}
