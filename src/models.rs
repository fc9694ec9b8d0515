use serde::{Deserialize, Serialize};

// -----------------------------------------------
// OPTION CHAIN ENDPOINT (/v7/finance/options)
// -----------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainResponse {
    #[serde(rename = "optionChain")]
    pub option_chain: OptionChainPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainPayload {
    #[serde(default)]
    pub result: Vec<OptionChainQuote>,

    pub error: Option<ApiError>,
}

/// Error object Yahoo returns in place of a result.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl ApiError {
    pub fn message(&self) -> String {
        self.description
            .clone()
            .or_else(|| self.code.clone())
            .unwrap_or_else(|| "no description".to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainQuote {
    #[serde(rename = "underlyingSymbol")]
    pub underlying_symbol: Option<String>,

    #[serde(rename = "expirationDates", default)]
    pub expiration_dates: Vec<i64>,

    #[serde(default)]
    pub options: Vec<OptionContracts>,
}

/// Calls and puts listed for a single expiration date.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionContracts {
    #[serde(rename = "expirationDate")]
    pub expiration_date: Option<i64>,

    #[serde(default)]
    pub calls: Vec<RawContract>,

    #[serde(default)]
    pub puts: Vec<RawContract>,
}

/// One option row as served by the chain endpoint. Any numeric field can be
/// absent for an untraded strike; validation happens in the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContract {
    #[serde(rename = "contractSymbol")]
    pub contract_symbol: Option<String>,

    pub strike: Option<f64>,

    pub volume: Option<u64>,

    #[serde(rename = "openInterest")]
    pub open_interest: Option<u64>,

    pub change: Option<f64>,

    #[serde(rename = "percentChange")]
    pub percent_change: Option<f64>,
}

/// A validated contract row. Only these five fields survive filtering, and
/// they serialize back under the upstream key names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,

    pub volume: u64,

    #[serde(rename = "openInterest")]
    pub open_interest: u64,

    pub change: f64,

    #[serde(rename = "percentChange")]
    pub percent_change: f64,
}

// -----------------------------------------------
// MOST-ACTIVE SCREENER (/v1/finance/screener/predefined/saved)
// -----------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenerResponse {
    pub finance: ScreenerPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenerPayload {
    #[serde(default)]
    pub result: Vec<ScreenerResult>,

    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenerResult {
    #[serde(default)]
    pub quotes: Vec<ScreenerQuote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenerQuote {
    pub symbol: String,
}

// -----------------------------------------------
// QUOTE SUMMARY (/v10/finance/quoteSummary)
// -----------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryPayload {
    #[serde(default)]
    pub result: Vec<QuoteSummaryResult>,

    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryResult {
    #[serde(rename = "recommendationTrend")]
    pub recommendation_trend: Option<RecommendationTrend>,

    #[serde(rename = "upgradeDowngradeHistory")]
    pub upgrade_downgrade_history: Option<UpgradeDowngradeHistory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationTrend {
    #[serde(default)]
    pub trend: Vec<TrendEntry>,
}

/// Analyst recommendation counts for one period ("0m", "-1m", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendEntry {
    pub period: String,

    #[serde(rename = "strongBuy")]
    pub strong_buy: u32,

    pub buy: u32,

    pub hold: u32,

    pub sell: u32,

    #[serde(rename = "strongSell")]
    pub strong_sell: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpgradeDowngradeHistory {
    #[serde(default)]
    pub history: Vec<GradeChange>,
}

/// One analyst upgrade/downgrade event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeChange {
    #[serde(rename = "epochGradeDate")]
    pub epoch_grade_date: i64,

    pub firm: String,

    #[serde(rename = "toGrade")]
    pub to_grade: String,

    #[serde(rename = "fromGrade")]
    pub from_grade: String,

    pub action: String,
}
