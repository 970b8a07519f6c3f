use anyhow::{Context, Result};
use glob::glob;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use tourstats::query::{economic, funding, global_standing, trends};

/// Operator inspection tool: prints every aggregate view the dashboard
/// renders, straight from the processed directory.
fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr) // keep stdout for the report itself
        .init();

    let processed_dir = Path::new("data/processed");
    if !processed_dir.is_dir() {
        tracing::error!(
            path = %processed_dir.display(),
            "processed directory not found; run the tourstats batch first"
        );
        anyhow::bail!("processed directory 'data/processed' not found");
    }

    let files: Vec<_> = glob(&format!("{}/*.csv", processed_dir.display()))
        .context("invalid glob pattern for processed files")?
        .filter_map(|e| e.ok())
        .collect();
    tracing::info!("reporting over {} processed files", files.len());

    println!("=== Annual tourism fee (Cr) ===");
    for row in trends::annual_summary(processed_dir)? {
        println!("{:>6}  {:>12.2}", row.year, row.total_fee_cr);
    }

    println!("\n=== Recovery speed (YoY growth) ===");
    for row in trends::recovery_speed_by_year(processed_dir)? {
        match row.yoy_growth_pct {
            Some(pct) => println!("{:>6}  {:>12.2}  {:>8.2}%", row.year, row.total_fee_cr, pct),
            None => println!("{:>6}  {:>12.2}  {:>9}", row.year, row.total_fee_cr, "-"),
        }
    }
    if let Some(best) = trends::highest_growth_year(processed_dir)? {
        println!("highest growth year: {}", best.year);
    }
    if let Some(worst) = trends::lowest_growth_year(processed_dir)? {
        println!("lowest growth year:  {}", worst.year);
    }

    println!("\n=== Peak tourism months (total Cr) ===");
    for row in trends::peak_months(processed_dir)? {
        println!("{:<12}  {:>12.2}", row.month, row.total_fee_cr);
    }

    println!("\n=== Forex earnings (Cr) ===");
    for row in economic::forex_earnings_summary(processed_dir)? {
        println!("{:>6}  {:>12.2}", row.year, row.forex_earnings_cr);
    }

    println!("\n=== Funding vs tourism by year (Cr) ===");
    for row in economic::funding_vs_tourism_by_year(processed_dir)? {
        println!(
            "{:>6}  fee {:>12.2}  funding {:>12.2}",
            row.year, row.total_tourism_fee_cr, row.total_funding_cr
        );
    }

    println!("\n=== India vs world growth ===");
    for row in global_standing::india_vs_world_growth(processed_dir)? {
        println!(
            "{:>6}  world {:>8}  india {:>8}  rank {:>4}",
            row.year,
            fmt_opt(row.world_receipts_growth_rate),
            fmt_opt(row.india_share_growth_rate),
            row.india_rank.map_or_else(|| "-".to_string(), |r| r.to_string()),
        );
    }

    println!("\n=== Top funded states (Cr) ===");
    for row in funding::top_funded_states(processed_dir, funding::DEFAULT_TOP_STATES)? {
        println!("{:<28}  {:>12.2}", row.state_name, row.fund_allocated_cr);
    }

    println!("\n=== Funding by agency (Cr) ===");
    for row in funding::funding_by_agency(processed_dir)? {
        println!("{:<28}  {:>12.2}", row.agency, row.fund_allocated_cr);
    }

    println!(
        "\n=== Low-funding states (< {} Cr) ===",
        funding::DEFAULT_LOW_FUNDING_THRESHOLD_CR
    );
    for row in funding::low_funding_states(processed_dir, funding::DEFAULT_LOW_FUNDING_THRESHOLD_CR)? {
        println!("{:<28}  {:>12.2}", row.state_name, row.fund_allocated_cr);
    }

    println!(
        "\n=== High-funding states (> {} Cr) ===",
        funding::DEFAULT_HIGH_FUNDING_THRESHOLD_CR
    );
    for row in funding::high_funding_states(processed_dir, funding::DEFAULT_HIGH_FUNDING_THRESHOLD_CR)? {
        println!("{:<28}  {:>12.2}", row.state_name, row.fund_allocated_cr);
    }

    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{x:.2}"))
}
