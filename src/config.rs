use std::time::Duration;

// -----------------------------------------------
// YAHOO FINANCE API ENDPOINTS
// -----------------------------------------------
pub const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const YAHOO_WARMUP_URL: &str = "https://finance.yahoo.com";

pub fn option_chain_url(symbol: &str, date: Option<i64>) -> String {
    let mut url = format!(
        "{}/v7/finance/options/{}",
        YAHOO_BASE_URL,
        urlencoding::encode(symbol) // URL-encode the symbol
    );
    if let Some(ts) = date {
        url.push_str(&format!("?date={}", ts));
    }
    url
}

pub fn most_active_url(count: u32) -> String {
    format!(
        "{}/v1/finance/screener/predefined/saved?formatted=false&lang=en-US&region=US&scrIds=most_actives&count={}",
        YAHOO_BASE_URL, count
    )
}

pub fn quote_summary_url(symbol: &str, module: &str) -> String {
    format!(
        "{}/v10/finance/quoteSummary/{}?modules={}",
        YAHOO_BASE_URL,
        urlencoding::encode(symbol),
        module
    )
}

// -----------------------------------------------
// WATCHLIST (always scanned, on top of the screener's most actives)
// -----------------------------------------------
pub const WATCHLIST: &[&str] = &[
    "MSFT", "BA", "BKNG", "NVDA", "UNH", "WMT", "HD", "MCD", "AMZN", "GOOGL",
    "JPM", "SHOP", "SPOT", "ULTA", "BIDU", "BYND", "ROKU", "ZM", "TSLA",
];

// -----------------------------------------------
// SIGNAL CONSTANTS
// -----------------------------------------------
// A contract counts as unusually traded when volume > openInterest * VOLUME_MULTIPLIER.
pub const VOLUME_MULTIPLIER: u64 = 2;

// Only the top contracts by volume feed the price-change tally and the report.
pub const TOP_CONTRACTS: usize = 5;

// Ticker used to resolve the nearest expiration date for the whole run.
pub const REFERENCE_SYMBOL: &str = "MSFT";

pub const MOST_ACTIVE_COUNT: u32 = 100;

// -----------------------------------------------
// HTTP CLIENT CONFIG
// -----------------------------------------------
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                               AppleWebKit/537.36 (KHTML, like Gecko) \
                               Chrome/131.0.0.0 Safari/537.36";

pub const ACCEPT_LANGUAGES: &[&str] = &[
    "en-US,en;q=0.9",
    "en-GB,en;q=0.8",
    "en-CA,en;q=0.9",
];

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

// -----------------------------------------------
// SESSION WARMUP
// -----------------------------------------------
pub const WARMUP_DELAY_MS: u64 = 200;

// -----------------------------------------------
// HTTP HEADERS
// -----------------------------------------------
pub const HEADER_REFERER: &str = "https://finance.yahoo.com/";
pub const HEADER_ACCEPT_HTML: &str = "text/html";

/// Run configuration, built once at startup and passed into the scan.
/// Everything is compiled in; there are no flags, env vars or config files.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub watchlist: Vec<String>,
    pub multiplier: u64,
    pub top_contracts: usize,
    pub reference_symbol: String,
    pub most_active_count: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            watchlist: WATCHLIST.iter().map(|s| s.to_string()).collect(),
            multiplier: VOLUME_MULTIPLIER,
            top_contracts: TOP_CONTRACTS,
            reference_symbol: REFERENCE_SYMBOL.to_string(),
            most_active_count: MOST_ACTIVE_COUNT,
        }
    }
}
