// src/normalize/international.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use super::{headers, require_column};
use crate::table::{self, Table};
use crate::util::round2;

/// Thousand-scale source columns the billion-scale derivations divide from.
const WORLD_RECEIPTS_COLUMN: &str = "WORLD_TOURISM_RECEIPTS";
const INDIA_RECEIPTS_COLUMN: &str = "WORLD_TOURISM_RECEIPTS_-_FEE_IN_INDIA";

const MILLION_PER_BILLION: f64 = 1000.0;

/// Normalize the international tourism table: headers go to
/// uppercase-with-underscores with stray quote artifacts stripped, all raw
/// columns pass through, and two derived billion-scale columns are appended
/// (`WORLD_RECEIPTS_BN`, `INDIA_RECEIPTS_BN`, both source ÷ 1000 rounded to
/// 2 decimals). Fails if either source column is absent after cleaning.
#[tracing::instrument(level = "info", skip(raw_path, out_path), fields(raw = %raw_path.display()))]
pub fn normalize_international(raw_path: &Path, out_path: &Path) -> Result<usize> {
    let tbl = Table::from_csv_path(raw_path)?;
    let cleaned: Vec<String> = tbl
        .headers
        .iter()
        .map(|h| headers::strip_quote_artifacts(&headers::clean_underscored(h)))
        .collect();
    debug!(?cleaned, "cleaned international table headers");

    let world_idx = require_column(&cleaned, WORLD_RECEIPTS_COLUMN, raw_path)?;
    let india_idx = require_column(&cleaned, INDIA_RECEIPTS_COLUMN, raw_path)?;

    let mut out_headers: Vec<&str> = cleaned.iter().map(String::as_str).collect();
    out_headers.push("WORLD_RECEIPTS_BN");
    out_headers.push("INDIA_RECEIPTS_BN");

    let mut out_rows: Vec<Vec<String>> = Vec::with_capacity(tbl.rows.len());
    for row in &tbl.rows {
        let mut out: Vec<String> = row.clone();
        // flexible parsing can leave short rows; pad to header width
        out.resize(cleaned.len(), String::new());
        out.push(billions(table::field(row, world_idx))?);
        out.push(billions(table::field(row, india_idx))?);
        out_rows.push(out);
    }

    table::write_csv(out_path, &out_headers, &out_rows)?;
    info!(rows = out_rows.len(), out = %out_path.display(), "international table normalized");
    Ok(out_rows.len())
}

/// Million-scale cell to billion-scale text; empty cells stay empty.
fn billions(cell: &str) -> Result<String> {
    let t = cell.trim();
    if t.is_empty() {
        return Ok(String::new());
    }
    let v: f64 = t
        .parse()
        .with_context(|| format!("unparseable receipts value {:?}", cell))?;
    Ok(round2(v / MILLION_PER_BILLION).to_string())
}
