// src/query/funding.rs
//! Cultural-funding overview: grouped totals, leaderboards, and threshold
//! classifications over the state funding table.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use super::{load_records, FundingRecord};
use crate::normalize::PROCESSED_FUNDING;

/// Published defaults for the threshold classifications. Placeholder
/// heuristics carried over from the dashboard, not derived from the data.
pub const DEFAULT_LOW_FUNDING_THRESHOLD_CR: f64 = 200.0;
pub const DEFAULT_HIGH_FUNDING_THRESHOLD_CR: f64 = 2000.0;

/// How many states the leaderboard and trend views keep.
pub const DEFAULT_TOP_STATES: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct StateFunding {
    pub state_name: String,
    pub fund_allocated_cr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearFunding {
    pub year: i32,
    pub fund_allocated_cr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgencyFunding {
    pub agency: String,
    pub fund_allocated_cr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateYearFunding {
    pub state_name: String,
    pub year: i32,
    pub fund_allocated_cr: f64,
}

/// Total funding per state, sorted descending. The sort is stable, so tied
/// states stay alphabetical.
pub fn funding_by_state(proc_dir: &Path) -> Result<Vec<StateFunding>> {
    let recs: Vec<FundingRecord> = load_records(&proc_dir.join(PROCESSED_FUNDING))?;
    let mut by_state: BTreeMap<String, f64> = BTreeMap::new();
    for r in recs {
        *by_state.entry(r.state_name).or_insert(0.0) += r.fund_allocated_cr;
    }
    let mut out: Vec<StateFunding> = by_state
        .into_iter()
        .map(|(state_name, fund_allocated_cr)| StateFunding {
            state_name,
            fund_allocated_cr,
        })
        .collect();
    out.sort_by(|a, b| b.fund_allocated_cr.total_cmp(&a.fund_allocated_cr));
    Ok(out)
}

/// Total funding per year, ascending by year.
pub fn funding_by_year(proc_dir: &Path) -> Result<Vec<YearFunding>> {
    let recs: Vec<FundingRecord> = load_records(&proc_dir.join(PROCESSED_FUNDING))?;
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for r in recs {
        *by_year.entry(r.year).or_insert(0.0) += r.fund_allocated_cr;
    }
    Ok(by_year
        .into_iter()
        .map(|(year, fund_allocated_cr)| YearFunding {
            year,
            fund_allocated_cr,
        })
        .collect())
}

/// Total funding per implementing agency, sorted descending.
pub fn funding_by_agency(proc_dir: &Path) -> Result<Vec<AgencyFunding>> {
    let recs: Vec<FundingRecord> = load_records(&proc_dir.join(PROCESSED_FUNDING))?;
    let mut by_agency: BTreeMap<String, f64> = BTreeMap::new();
    for r in recs {
        *by_agency.entry(r.agency).or_insert(0.0) += r.fund_allocated_cr;
    }
    let mut out: Vec<AgencyFunding> = by_agency
        .into_iter()
        .map(|(agency, fund_allocated_cr)| AgencyFunding {
            agency,
            fund_allocated_cr,
        })
        .collect();
    out.sort_by(|a, b| b.fund_allocated_cr.total_cmp(&a.fund_allocated_cr));
    Ok(out)
}

/// The `n` best-funded states.
pub fn top_funded_states(proc_dir: &Path, n: usize) -> Result<Vec<StateFunding>> {
    let mut out = funding_by_state(proc_dir)?;
    out.truncate(n);
    Ok(out)
}

/// Per-(state, year) funding totals restricted to the top funded states,
/// sorted by state then year.
pub fn state_funding_trends(proc_dir: &Path) -> Result<Vec<StateYearFunding>> {
    let top: Vec<String> = top_funded_states(proc_dir, DEFAULT_TOP_STATES)?
        .into_iter()
        .map(|s| s.state_name)
        .collect();
    let recs: Vec<FundingRecord> = load_records(&proc_dir.join(PROCESSED_FUNDING))?;

    let mut by_state_year: BTreeMap<(String, i32), f64> = BTreeMap::new();
    for r in recs {
        if !top.contains(&r.state_name) {
            continue;
        }
        *by_state_year.entry((r.state_name, r.year)).or_insert(0.0) += r.fund_allocated_cr;
    }
    Ok(by_state_year
        .into_iter()
        .map(|((state_name, year), fund_allocated_cr)| StateYearFunding {
            state_name,
            year,
            fund_allocated_cr,
        })
        .collect())
}

/// Per-state funding as a stand-in for a funding/tourism correlation.
/// Only funding is available by state; per-state tourism figures are out of
/// scope, so this stays a documented placeholder rather than a guess.
pub fn funding_vs_tourism_states(proc_dir: &Path) -> Result<Vec<StateFunding>> {
    funding_by_state(proc_dir)
}

/// States whose total funding falls below `threshold_cr`.
pub fn low_funding_states(proc_dir: &Path, threshold_cr: f64) -> Result<Vec<StateFunding>> {
    Ok(funding_by_state(proc_dir)?
        .into_iter()
        .filter(|s| s.fund_allocated_cr < threshold_cr)
        .collect())
}

/// States whose total funding exceeds `threshold_cr`.
pub fn high_funding_states(proc_dir: &Path, threshold_cr: f64) -> Result<Vec<StateFunding>> {
    Ok(funding_by_state(proc_dir)?
        .into_iter()
        .filter(|s| s.fund_allocated_cr > threshold_cr)
        .collect())
}
