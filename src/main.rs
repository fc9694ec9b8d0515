use anyhow::Result;
use colored::Colorize;
use options_scanner::config::ScanConfig;
use options_scanner::yahoo_client::YahooClient;
use options_scanner::{logging, report, scanner};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Options Flow Scanner".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!();

    let start_time = std::time::Instant::now();
    let cfg = ScanConfig::default();
    let client = YahooClient::new()?;

    // Step 1: Resolve the expiration date every chain is fetched for
    println!("{}", "Step 1: Resolving nearest expiration date...".cyan());
    let expiration = client.nearest_expiration(&cfg.reference_symbol).await?;
    let expiration_label = report::expiration_label(expiration);
    println!("{} Expiration: {}", "✓".green(), expiration_label.yellow());
    println!();

    // Step 2: Union the watchlist with today's most active stocks
    println!("{}", "Step 2: Fetching most active stocks...".cyan());
    let most_active = client.fetch_most_active(cfg.most_active_count).await?;
    let companies = scanner::build_company_set(&cfg.watchlist, most_active);
    println!("{} Total active companies: {}", "✓".green(), companies.len());
    println!();

    // Step 3: Sequential scan, one company at a time
    println!("{}", "Step 3: Scanning option chains...".cyan());
    let results = scanner::scan_companies(&client, &companies, expiration, &cfg).await;
    println!();

    let path = report::write_report(&results, &expiration_label, Path::new("."))?;
    let elapsed = start_time.elapsed();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Summary".cyan().bold());
    println!("{}", "=".repeat(60).blue());
    println!("{} Total filtered results: {}", "✓".green(), results.len());
    println!("{} Saved results to {}", "✓".green(), path.display());
    println!("{} Elapsed time: {:.3}s", "⏱".yellow(), elapsed.as_secs_f64());

    Ok(())
}
