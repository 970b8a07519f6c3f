// src/query/trends.rs
//! Tourism fee trend views: annual and monthly summaries, recovery speed
//! (year-over-year growth), and the growth extrema.

use anyhow::Result;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

use super::{load_records, FeeRecord};
use crate::normalize::PROCESSED_TOURISM_FEE;
use crate::util::round2;

#[derive(Debug, Clone, PartialEq)]
pub struct YearTotal {
    pub year: i32,
    pub total_fee_cr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthStat {
    pub month: String,
    pub total_fee_cr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearGrowth {
    pub year: i32,
    pub total_fee_cr: f64,
    /// None for the first year in the series, where growth is undefined.
    pub yoy_growth_pct: Option<f64>,
}

/// Fee collected per year, ascending by year.
pub fn annual_summary(proc_dir: &Path) -> Result<Vec<YearTotal>> {
    let recs: Vec<FeeRecord> = load_records(&proc_dir.join(PROCESSED_TOURISM_FEE))?;
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for r in &recs {
        *by_year.entry(r.year).or_insert(0.0) += r.total_fee_cr;
    }
    Ok(by_year
        .into_iter()
        .map(|(year, total_fee_cr)| YearTotal { year, total_fee_cr })
        .collect())
}

/// Mean fee per month name, ascending alphabetically by month.
pub fn monthly_avg(proc_dir: &Path) -> Result<Vec<MonthStat>> {
    let recs: Vec<FeeRecord> = load_records(&proc_dir.join(PROCESSED_TOURISM_FEE))?;
    let mut by_month: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for r in recs {
        let entry = by_month.entry(r.month).or_insert((0.0, 0));
        entry.0 += r.total_fee_cr;
        entry.1 += 1;
    }
    Ok(by_month
        .into_iter()
        .map(|(month, (sum, n))| MonthStat {
            month,
            total_fee_cr: sum / n as f64,
        })
        .collect())
}

/// Total fee per month name, sorted descending by total. The sort is stable,
/// so tied months keep their alphabetical order.
pub fn peak_months(proc_dir: &Path) -> Result<Vec<MonthStat>> {
    let recs: Vec<FeeRecord> = load_records(&proc_dir.join(PROCESSED_TOURISM_FEE))?;
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for r in recs {
        *by_month.entry(r.month).or_insert(0.0) += r.total_fee_cr;
    }
    let mut out: Vec<MonthStat> = by_month
        .into_iter()
        .map(|(month, total_fee_cr)| MonthStat { month, total_fee_cr })
        .collect();
    out.sort_by(|a, b| b.total_fee_cr.total_cmp(&a.total_fee_cr));
    Ok(out)
}

/// Annual totals with year-over-year growth. Growth for year N is
/// `(fee[N] - fee[N-1]) / fee[N-1] * 100`, rounded to 2 decimals; the first
/// year has no prior year and carries `None`.
pub fn recovery_speed_by_year(proc_dir: &Path) -> Result<Vec<YearGrowth>> {
    let annual = annual_summary(proc_dir)?;
    let mut out = Vec::with_capacity(annual.len());
    let mut prev: Option<f64> = None;
    for YearTotal { year, total_fee_cr } in annual {
        let yoy_growth_pct = prev.map(|p| round2((total_fee_cr - p) / p * 100.0));
        out.push(YearGrowth {
            year,
            total_fee_cr,
            yoy_growth_pct,
        });
        prev = Some(total_fee_cr);
    }
    Ok(out)
}

/// The year with the highest YoY growth, if any years exist.
pub fn highest_growth_year(proc_dir: &Path) -> Result<Option<YearGrowth>> {
    let mut rows = recovery_speed_by_year(proc_dir)?;
    sort_by_growth(&mut rows, true);
    Ok(rows.into_iter().next())
}

/// The year with the lowest YoY growth, if any years exist.
pub fn lowest_growth_year(proc_dir: &Path) -> Result<Option<YearGrowth>> {
    let mut rows = recovery_speed_by_year(proc_dir)?;
    sort_by_growth(&mut rows, false);
    Ok(rows.into_iter().next())
}

/// Full stable sort over the growth view. Undefined growth sorts after any
/// defined value in either direction, so the first year can only surface as
/// an extremum when no year has defined growth.
fn sort_by_growth(rows: &mut [YearGrowth], descending: bool) {
    rows.sort_by(|a, b| match (a.yoy_growth_pct, b.yoy_growth_pct) {
        (Some(x), Some(y)) => {
            if descending {
                y.total_cmp(&x)
            } else {
                x.total_cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_fixtures::write_processed;
    use tempfile::tempdir;

    #[test]
    fn annual_summary_sums_by_year_ascending() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let annual = annual_summary(dir.path())?;
        let years: Vec<i32> = annual.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2023]);
        assert_eq!(annual[0].total_fee_cr, 1010.0);
        assert_eq!(annual[2].total_fee_cr, 465.0);
        Ok(())
    }

    #[test]
    fn monthly_avg_means_per_month() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let monthly = monthly_avg(dir.path())?;
        // alphabetical month keys
        assert_eq!(monthly[0].month, "February");
        assert_eq!(monthly[0].total_fee_cr, 445.0);
        assert_eq!(monthly[1].month, "January");
        assert_eq!(monthly[1].total_fee_cr, 351.25);
        Ok(())
    }

    #[test]
    fn peak_months_sorts_by_total_descending() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let peaks = peak_months(dir.path())?;
        assert_eq!(peaks[0].month, "February");
        assert_eq!(peaks[0].total_fee_cr, 1780.0);
        assert_eq!(peaks[1].month, "January");
        Ok(())
    }

    #[test]
    fn first_year_growth_is_undefined() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let growth = recovery_speed_by_year(dir.path())?;
        assert_eq!(growth[0].year, 2019);
        assert_eq!(growth[0].yoy_growth_pct, None);
        Ok(())
    }

    #[test]
    fn growth_is_scaled_then_rounded() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let growth = recovery_speed_by_year(dir.path())?;
        // (300 - 1010) / 1010 * 100 = -70.297.. -> -70.3
        assert_eq!(growth[1].yoy_growth_pct, Some(-70.3));
        // (465 - 300) / 300 * 100 = 55.0
        assert_eq!(growth[2].yoy_growth_pct, Some(55.0));
        // (1410 - 465) / 465 * 100 = 203.225.. -> 203.23
        assert_eq!(growth[3].yoy_growth_pct, Some(203.23));
        Ok(())
    }

    #[test]
    fn extrema_pick_best_and_worst_years() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let highest = highest_growth_year(dir.path())?.expect("data present");
        assert_eq!(highest.year, 2023);
        let lowest = lowest_growth_year(dir.path())?.expect("data present");
        assert_eq!(lowest.year, 2020);
        Ok(())
    }
}
