// src/normalize/forex.rs
use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::table::{self, Table};

/// Passthrough of the two-column foreign-exchange table with a positional
/// rename to `year,forex_earnings_cr`. Column order is assumed stable; a
/// file with a different column count fails in the writer's arity check.
#[tracing::instrument(level = "info", skip(raw_path, out_path), fields(raw = %raw_path.display()))]
pub fn normalize_forex(raw_path: &Path, out_path: &Path) -> Result<usize> {
    let tbl = Table::from_csv_path(raw_path)?;
    table::write_csv(out_path, &["year", "forex_earnings_cr"], &tbl.rows)?;
    info!(rows = tbl.rows.len(), out = %out_path.display(), "forex table renamed");
    Ok(tbl.rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renames_positionally_without_touching_rows() -> Result<()> {
        let dir = tempdir()?;
        let raw_path = dir.path().join("forex.csv");
        let out_path = dir.path().join("forex_out.csv");
        fs::write(&raw_path, "Year,FEE (in crore)\n2014,123457.0\n2015,135193.0\n")?;

        let rows = normalize_forex(&raw_path, &out_path)?;
        assert_eq!(rows, 2);

        let out = Table::from_csv_path(&out_path)?;
        assert_eq!(out.headers, vec!["year", "forex_earnings_cr"]);
        assert_eq!(out.rows[0], vec!["2014", "123457.0"]);
        assert_eq!(out.rows[1], vec!["2015", "135193.0"]);
        Ok(())
    }

    #[test]
    fn extra_columns_surface_as_hard_failure() -> Result<()> {
        let dir = tempdir()?;
        let raw_path = dir.path().join("forex.csv");
        fs::write(&raw_path, "Year,FEE,Notes\n2014,123457.0,revised\n")?;
        assert!(normalize_forex(&raw_path, &dir.path().join("out.csv")).is_err());
        Ok(())
    }
}
