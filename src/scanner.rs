use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::models::OptionContracts;
use crate::processor;
use crate::rules::{self, CompanyResult};
use crate::yahoo_client::YahooClient;
use colored::Colorize;
use std::collections::HashSet;

/// Union of the fixed watchlist and the screener's most-active symbols,
/// deduplicated. Iteration order is unspecified; every company is processed
/// independently.
pub fn build_company_set(watchlist: &[String], most_active: Vec<String>) -> Vec<String> {
    let mut set: HashSet<String> = most_active.into_iter().collect();
    for symbol in watchlist {
        set.insert(symbol.clone());
    }
    set.into_iter().collect()
}

/// Filter a fetched chain and derive its signal. This is the pure half of
/// the per-company pipeline; a chain left empty by the filter is a
/// non-result, not an error.
pub fn evaluate_chain(
    company: &str,
    contracts: &OptionContracts,
    cfg: &ScanConfig,
) -> Result<Option<CompanyResult>, ScanError> {
    let chain = processor::filter_chain(contracts, cfg.multiplier)?;
    if chain.is_empty() {
        return Ok(None);
    }

    Ok(rules::derive_signal(company, &chain, cfg.top_contracts))
}

/// Fetch and evaluate one company against the fixed expiration.
pub async fn process_company(
    client: &YahooClient,
    company: &str,
    expiration: i64,
    cfg: &ScanConfig,
) -> Result<Option<CompanyResult>, ScanError> {
    let contracts = client.fetch_contracts(company, expiration).await?;
    evaluate_chain(company, &contracts, cfg)
}

/// Scan every company in turn, collecting the ones that produced a signal.
/// Per-company failures are logged and skipped; the scan always runs to the
/// end and returns whatever accumulated.
pub async fn scan_companies(
    client: &YahooClient,
    companies: &[String],
    expiration: i64,
    cfg: &ScanConfig,
) -> Vec<CompanyResult> {
    let mut results = Vec::new();

    for company in companies {
        match process_company(client, company, expiration, cfg).await {
            Ok(Some(result)) => {
                println!("{} Got data for {}", "✓".green(), company.yellow());
                results.push(result);
            }
            Ok(None) => {
                tracing::debug!(%company, "no signal derived");
            }
            Err(ScanError::DataUnavailable(reason)) => {
                println!("{} {} skipped: {}", "✗".red(), company.yellow(), reason);
                tracing::warn!(%company, %reason, "company skipped");
            }
            Err(e) => {
                println!("{} {} skipped: {}", "✗".red(), company.yellow(), e);
                tracing::warn!(%company, error = %e, "company skipped");
            }
        }
    }

    results
}
