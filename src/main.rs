use anyhow::Result;
use std::{fs, path::Path, time::Instant};
use tourstats::normalize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) configure dirs ───────────────────────────────────────────
    let raw_dir = Path::new("data/raw");
    let processed_dir = Path::new("data/processed");
    fs::create_dir_all(processed_dir)?;

    // ─── 3) normalize all four datasets ──────────────────────────────
    let start = Instant::now();
    normalize::run_all(raw_dir, processed_dir)?;
    info!(elapsed = ?start.elapsed(), "all datasets processed");

    Ok(())
}
