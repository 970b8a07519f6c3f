// src/query/mod.rs
//! Stateless aggregate views over the processed tables.
//!
//! Every function takes the processed directory and re-reads its source
//! file(s) on each call. The datasets are a few hundred rows and the calls
//! are human-paced, so there is no caching or incremental recomputation.

pub mod economic;
pub mod funding;
pub mod global_standing;
pub mod trends;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// One cleaned tourism-fee row (`tourism_fee_final.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct FeeRecord {
    pub month: String,
    pub year: i32,
    pub total_fee_cr: f64,
}

/// One cleaned foreign-exchange row (`foreign_exchange_earnings.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct ForexRecord {
    pub year: i32,
    pub forex_earnings_cr: f64,
}

/// One cleaned cultural-funding row (`state_cultural_funding.csv`).
#[derive(Debug, Clone, Deserialize)]
pub struct FundingRecord {
    #[serde(rename = "STATE_NAME")]
    pub state_name: String,
    #[serde(rename = "PROJECT_NAME")]
    pub project_name: String,
    #[serde(rename = "AGENCY")]
    pub agency: String,
    #[serde(rename = "FUND_ALLOCATED_LAKH")]
    pub fund_allocated_lakh: f64,
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "FUND_ALLOCATED_CR")]
    pub fund_allocated_cr: f64,
}

/// One cleaned international tourism row (`international_tourism_stats.csv`).
/// Growth-rate cells are blank for the first year of the series.
#[derive(Debug, Clone, Deserialize)]
pub struct InternationalRecord {
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "WORLD_TOURISM_RECEIPTS")]
    pub world_tourism_receipts: Option<f64>,
    #[serde(rename = "WORLD_TOURISM_RECEIPTS_-_FEE_IN_INDIA")]
    pub india_receipts_fee: Option<f64>,
    #[serde(rename = "WORLD_RECEIPTS_GROWTH_RATE")]
    pub world_receipts_growth_rate: Option<f64>,
    #[serde(rename = "INDIA_SHARE_GROWTH_RATE")]
    pub india_share_growth_rate: Option<f64>,
    #[serde(rename = "INDIA_SHARE_PCT")]
    pub india_share_pct: Option<f64>,
    #[serde(rename = "INDIA_SHARE_USD_MILLION")]
    pub india_share_usd_million: Option<f64>,
    #[serde(rename = "INDIA_RANK")]
    pub india_rank: Option<i32>,
    #[serde(rename = "WORLD_RECEIPTS_BN")]
    pub world_receipts_bn: Option<f64>,
    #[serde(rename = "INDIA_RECEIPTS_BN")]
    pub india_receipts_bn: Option<f64>,
}

/// Deserialize every row of a processed CSV. Missing files and malformed
/// records propagate as hard failures; there is no partial read.
pub(crate) fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open processed file {}", path.display()))?;
    let mut out = Vec::new();
    for (idx, row) in rdr.deserialize().enumerate() {
        out.push(row.with_context(|| format!("bad record {} in {}", idx, path.display()))?);
    }
    Ok(out)
}
