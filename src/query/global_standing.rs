// src/query/global_standing.rs
//! India's position in world tourism: growth comparison and global share.

use anyhow::Result;
use std::path::Path;

use super::{load_records, InternationalRecord};
use crate::normalize::PROCESSED_INTERNATIONAL;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthComparison {
    pub year: i32,
    pub world_receipts_growth_rate: Option<f64>,
    pub india_share_growth_rate: Option<f64>,
    pub india_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareTrend {
    pub year: i32,
    pub india_share_pct: Option<f64>,
    pub india_share_usd_million: Option<f64>,
    pub india_rank: Option<i32>,
}

/// World vs India receipts growth rates per year, with India's rank.
pub fn india_vs_world_growth(proc_dir: &Path) -> Result<Vec<GrowthComparison>> {
    let recs: Vec<InternationalRecord> =
        load_records(&proc_dir.join(PROCESSED_INTERNATIONAL))?;
    Ok(recs
        .into_iter()
        .map(|r| GrowthComparison {
            year: r.year,
            world_receipts_growth_rate: r.world_receipts_growth_rate,
            india_share_growth_rate: r.india_share_growth_rate,
            india_rank: r.india_rank,
        })
        .collect())
}

/// India's share of world tourism receipts per year.
pub fn india_global_share_trend(proc_dir: &Path) -> Result<Vec<ShareTrend>> {
    let recs: Vec<InternationalRecord> =
        load_records(&proc_dir.join(PROCESSED_INTERNATIONAL))?;
    Ok(recs
        .into_iter()
        .map(|r| ShareTrend {
            year: r.year,
            india_share_pct: r.india_share_pct,
            india_share_usd_million: r.india_share_usd_million,
            india_rank: r.india_rank,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_fixtures::write_processed;
    use tempfile::tempdir;

    #[test]
    fn growth_projection_keeps_file_order_and_blanks() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let growth = india_vs_world_growth(dir.path())?;
        assert_eq!(growth.len(), 3);
        // first year of the series has blank growth cells
        assert_eq!(growth[0].year, 2001);
        assert_eq!(growth[0].world_receipts_growth_rate, None);
        assert_eq!(growth[1].world_receipts_growth_rate, Some(3.58));
        assert_eq!(growth[1].india_share_growth_rate, Some(-8.6));
        assert_eq!(growth[2].india_rank, Some(18));
        Ok(())
    }

    #[test]
    fn share_trend_projects_share_columns() -> Result<()> {
        let dir = tempdir()?;
        write_processed(dir.path());
        let share = india_global_share_trend(dir.path())?;
        assert_eq!(share[0].india_share_pct, Some(0.69));
        assert_eq!(share[0].india_share_usd_million, Some(3198.0));
        assert_eq!(share[0].india_rank, Some(16));
        Ok(())
    }
}
