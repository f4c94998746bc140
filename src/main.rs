//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_records` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use std::process;

use domain_records::app::{print_final_statistics, RecordWriter};
use domain_records::initialization::init_logger_with;
use domain_records::{Discoverer, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists) so RUST_LOG
    // can live there. Try the current directory first, then the executable's.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(opt).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("domain_records error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(opt: Opt) -> Result<()> {
    let discoverer =
        Discoverer::with_default_backends().context("Failed to initialize resolver backends")?;
    let options = opt.to_options();
    let mut writer = RecordWriter::open(opt.output.as_deref())?;

    if let Some(record_type) = opt.record_type {
        let records = discoverer
            .discover_by_type(&opt.domain, record_type, &options)
            .await
            .with_context(|| format!("{record_type} query for {} failed", opt.domain))?;
        return writer.write_records(&records, opt.format);
    }

    if opt.stream {
        let mut stream = discoverer.discover_all_stream(&opt.domain, &options)?;
        let mut count = 0usize;
        while let Some(record) = stream.next().await {
            writer.write_record(&record, opt.format)?;
            count += 1;
        }
        eprintln!(
            "✅ Streamed {} record{} for {}",
            count,
            if count == 1 { "" } else { "s" },
            opt.domain
        );
        return Ok(());
    }

    let report = discoverer
        .discover_all_with_report(&opt.domain, &options)
        .await?;
    writer.write_records(&report.records, opt.format)?;
    print_final_statistics(&report);
    Ok(())
}
