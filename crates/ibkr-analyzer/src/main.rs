mod bootstrap;

use anyhow::Result;
use clap::Parser;
use report_core::formatting::format_amount;
use report_core::settings::{RunConfig, Settings};
use report_data::aggregator;
use report_data::reader;
use report_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();
    let base_dir = std::env::current_dir()?;

    bootstrap::ensure_directories(&base_dir)?;

    let config = settings.into_run_config(&base_dir)?;
    bootstrap::setup_logging(&config.log_level, &base_dir.join("logs"))?;

    tracing::info!("# ------------------------------ #");
    tracing::info!("IBKR Report Analyzer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Profile: {}, Environment: {}, Data folder: {}",
        config.profile,
        config.environment,
        config.data_dir.display()
    );

    let result = run(&config).await;
    if let Err(ref err) = result {
        tracing::error!("Run failed: {err:#}");
    }

    tracing::info!("Run finished");
    tracing::info!("# ------------------------------ #");

    result
}

/// Compute the summary, show it in the terminal view, then echo the
/// figures to the console once the view closes. Any pipeline error
/// propagates without a summary being rendered.
async fn run(config: &RunConfig) -> Result<()> {
    let folder_empty = reader::folder_is_empty(&config.data_dir)?;
    if folder_empty {
        tracing::warn!("Data folder {} is empty", config.data_dir.display());
    }

    let summary = aggregator::summarize_folder(&config.data_dir)?;

    let app = App::new(&config.theme);
    app.run_summary(summary, folder_empty).await?;

    println!("Sum of all deposits: {}", format_amount(summary.total_deposits));
    println!(
        "Sum of all withdrawals: {}",
        format_amount(summary.total_withdrawals)
    );
    println!("Last NAV: {}", format_amount(summary.last_nav));
    println!(
        "Unrealized Profit: {}",
        format_amount(summary.unrealized_profit())
    );

    Ok(())
}
