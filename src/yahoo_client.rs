use crate::config;
use crate::error::ScanError;
use crate::models::{
    GradeChange, OptionChainQuote, OptionChainResponse, OptionContracts, QuoteSummaryResponse,
    QuoteSummaryResult, ScreenerResponse, TrendEntry,
};
use rand::{seq::SliceRandom, thread_rng};
use reqwest::{header, Client};
use std::time::Duration;
use tokio::sync::RwLock;

// -----------------------------------------------
// CLIENT WRAPPER WITH SESSION STATE
// -----------------------------------------------
pub struct YahooClient {
    client: Client,
    warmed_up: RwLock<bool>,
}

/// Unwrap the chain envelope. An API-level error or an empty result set both
/// mean Yahoo has no usable chain for the symbol; the API's own description
/// is carried as the reason.
fn select_quote(response: OptionChainResponse, symbol: &str) -> Result<OptionChainQuote, ScanError> {
    let payload = response.option_chain;
    if let Some(err) = payload.error {
        return Err(ScanError::DataUnavailable(err.message()));
    }

    payload.result.into_iter().next().ok_or_else(|| {
        ScanError::DataUnavailable(format!("empty option chain for {}", symbol))
    })
}

/// First options block of a quote, or the no-options-traded condition.
fn select_contracts(quote: OptionChainQuote, symbol: &str) -> Result<OptionContracts, ScanError> {
    quote.options.into_iter().next().ok_or_else(|| {
        ScanError::DataUnavailable(format!("no options traded for {}", symbol))
    })
}

/// Earliest listed expiration as a unix timestamp. Yahoo serves the list
/// sorted; min() does not rely on that.
fn select_nearest_expiration(quote: &OptionChainQuote, symbol: &str) -> Result<i64, ScanError> {
    quote.expiration_dates.iter().copied().min().ok_or_else(|| {
        ScanError::DataUnavailable(format!("no expirations listed for {}", symbol))
    })
}

impl YahooClient {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self {
            client: build_client()?,
            warmed_up: RwLock::new(false),
        })
    }

    /// Warm up the Yahoo session (only once per client) so the cookie jar is
    /// populated before the first API call.
    async fn warmup_if_needed(&self) -> Result<(), ScanError> {
        if *self.warmed_up.read().await {
            return Ok(());
        }

        let mut warmed = self.warmed_up.write().await;
        if !*warmed {
            let _ = self
                .client
                .get(config::YAHOO_WARMUP_URL)
                .header("Accept", config::HEADER_ACCEPT_HTML)
                .send()
                .await?;

            tokio::time::sleep(Duration::from_millis(config::WARMUP_DELAY_MS)).await;
            *warmed = true;
        }

        Ok(())
    }

    /// Single-attempt GET returning the raw body. Non-success statuses are
    /// reported with a short body preview.
    async fn fetch_json(&self, url: &str) -> Result<String, ScanError> {
        self.warmup_if_needed().await?;

        tracing::debug!(%url, "GET");

        let res = self
            .client
            .get(url)
            .header("Referer", config::HEADER_REFERER)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            return Err(ScanError::Status(status.as_u16(), preview));
        }

        Ok(res.text().await?)
    }

    // -----------------------------------------------
    // OPTION CHAIN
    // -----------------------------------------------

    /// Fetch the option chain for a symbol. Without a date Yahoo answers with
    /// the nearest expiration's contracts plus the full expiration list.
    pub async fn fetch_option_chain(
        &self,
        symbol: &str,
        date: Option<i64>,
    ) -> Result<OptionChainQuote, ScanError> {
        let url = config::option_chain_url(symbol, date);
        let text = self.fetch_json(&url).await?;
        let parsed: OptionChainResponse = serde_json::from_str(&text)?;
        select_quote(parsed, symbol)
    }

    /// Contracts listed for one expiration of a symbol.
    pub async fn fetch_contracts(
        &self,
        symbol: &str,
        expiration: i64,
    ) -> Result<OptionContracts, ScanError> {
        let quote = self.fetch_option_chain(symbol, Some(expiration)).await?;
        select_contracts(quote, symbol)
    }

    /// Earliest expiration date listed for the symbol, as a unix timestamp.
    pub async fn nearest_expiration(&self, symbol: &str) -> Result<i64, ScanError> {
        let quote = self.fetch_option_chain(symbol, None).await?;
        select_nearest_expiration(&quote, symbol)
    }

    // -----------------------------------------------
    // SCREENER
    // -----------------------------------------------

    /// Symbols from the predefined most-actives screener, in Yahoo's ranking
    /// order.
    pub async fn fetch_most_active(&self, count: u32) -> Result<Vec<String>, ScanError> {
        let url = config::most_active_url(count);
        let text = self.fetch_json(&url).await?;
        let parsed: ScreenerResponse = serde_json::from_str(&text)?;

        let payload = parsed.finance;
        if let Some(err) = payload.error {
            return Err(ScanError::DataUnavailable(format!(
                "most actives screener: {}",
                err.message()
            )));
        }

        let screen = payload
            .result
            .into_iter()
            .next()
            .ok_or_else(|| ScanError::DataUnavailable("empty screener result".to_string()))?;

        Ok(screen.quotes.into_iter().map(|q| q.symbol).collect())
    }

    // -----------------------------------------------
    // QUOTE SUMMARY (analyst data, not consumed by the scan)
    // -----------------------------------------------

    async fn fetch_quote_summary(
        &self,
        symbol: &str,
        module: &str,
    ) -> Result<QuoteSummaryResult, ScanError> {
        let url = config::quote_summary_url(symbol, module);
        let text = self.fetch_json(&url).await?;
        let parsed: QuoteSummaryResponse = serde_json::from_str(&text)?;

        let payload = parsed.quote_summary;
        if let Some(err) = payload.error {
            return Err(ScanError::DataUnavailable(format!(
                "{}: {}",
                symbol,
                err.message()
            )));
        }

        payload.result.into_iter().next().ok_or_else(|| {
            ScanError::DataUnavailable(format!("no quote summary for {}", symbol))
        })
    }

    /// Analyst recommendation trend rows for a symbol.
    pub async fn fetch_recommendation_trend(
        &self,
        symbol: &str,
    ) -> Result<Vec<TrendEntry>, ScanError> {
        let result = self
            .fetch_quote_summary(symbol, "recommendationTrend")
            .await?;
        Ok(result
            .recommendation_trend
            .map(|t| t.trend)
            .unwrap_or_default())
    }

    /// Analyst upgrade/downgrade events for a symbol.
    pub async fn fetch_upgrade_downgrade_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<GradeChange>, ScanError> {
        let result = self
            .fetch_quote_summary(symbol, "upgradeDowngradeHistory")
            .await?;
        Ok(result
            .upgrade_downgrade_history
            .map(|h| h.history)
            .unwrap_or_default())
    }
}

// -----------------------------------------------
// HTTP CLIENT BUILDER
// -----------------------------------------------
fn build_client() -> Result<Client, ScanError> {
    let mut headers = header::HeaderMap::new();

    let lang = config::ACCEPT_LANGUAGES
        .choose(&mut thread_rng())
        .copied()
        .unwrap_or("en-US,en;q=0.9");
    headers.insert(header::ACCEPT_LANGUAGE, header::HeaderValue::from_static(lang));
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));

    let client = Client::builder()
        .default_headers(headers)
        .cookie_store(true)
        .user_agent(config::USER_AGENT)
        .timeout(config::HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}
