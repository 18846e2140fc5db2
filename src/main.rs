use anyhow::Context;
use clap::Parser;
use poe2_data_updater::config::{parse_datasets, Config};
use poe2_data_updater::logging;
use poe2_data_updater::pipeline::{Pipeline, StageReport};
use poe2_data_updater::source::ReqwestSource;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "poe2_data_updater")]
#[command(about = "Refresh local Path of Exile 2 item and mod data")]
#[command(version = "0.1.0")]
struct Cli {
    /// Optional TOML config file (base_url, output_dir, datasets)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the static data host's base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override the directory the JSON files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Specific datasets to refresh (comma-separated). Available: items, mods
    #[arg(long)]
    datasets: Option<String>,
}

fn build_config(cli: Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(output_dir) = cli.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(list) = cli.datasets {
        config = config.with_datasets(parse_datasets(list.split(','))?);
    }
    Ok(config)
}

fn print_summary(reports: &[StageReport]) {
    println!("\n📊 Update summary:");
    for report in reports {
        println!(
            "   {}: {} records from {} -> {}",
            report.dataset,
            report.record_count,
            report.source_url,
            report.output_file.display()
        );
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let config = match build_config(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            eprintln!("❌ Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting data update from {}", config.base_url);
    println!("🚀 Starting data update process using {} data...", config.base_url);

    let source = ReqwestSource::new();
    match Pipeline::run_all(&source, &config).await {
        Ok(reports) => {
            print_summary(&reports);
            info!("Data update completed for {} datasets", reports.len());
            println!("✅ Data update process completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(dataset = e.dataset().unwrap_or("unknown"), "Data update failed: {}", e);
            eprintln!("❌ Data update process failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
