use crate::error::ScanError;
use crate::models::{OptionContract, OptionContracts, RawContract};

/// Both sides of one company's chain after filtering, each sorted by volume
/// descending (highest traded first).
#[derive(Debug, Clone, Default)]
pub struct FilteredChain {
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

impl FilteredChain {
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.puts.is_empty()
    }
}

/// Validate one raw row into a typed contract. A missing required field is a
/// malformed-data error and fails the whole company.
pub fn validate_contract(row: &RawContract) -> Result<OptionContract, ScanError> {
    Ok(OptionContract {
        strike: require(row.strike, "strike", row)?,
        volume: require(row.volume, "volume", row)?,
        open_interest: require(row.open_interest, "openInterest", row)?,
        change: require(row.change, "change", row)?,
        percent_change: require(row.percent_change, "percentChange", row)?,
    })
}

fn require<T>(value: Option<T>, field: &str, row: &RawContract) -> Result<T, ScanError> {
    value.ok_or_else(|| {
        let contract = row.contract_symbol.as_deref().unwrap_or("<unnamed contract>");
        ScanError::MalformedData(format!("{} is missing '{}'", contract, field))
    })
}

/// Keep only contracts whose session volume exceeds open interest times the
/// multiplier. Every row gets validated, including the ones dropped. The
/// threshold saturates at u64::MAX, which no volume can exceed.
pub fn filter_contracts(
    rows: &[RawContract],
    multiplier: u64,
) -> Result<Vec<OptionContract>, ScanError> {
    let mut kept = Vec::new();
    for row in rows {
        let contract = validate_contract(row)?;
        if contract.volume > contract.open_interest.saturating_mul(multiplier) {
            kept.push(contract);
        }
    }
    Ok(kept)
}

/// Sort by volume, highest first. Stable, so equal-volume rows keep their
/// chain order.
pub fn sort_by_volume(contracts: &mut [OptionContract]) {
    contracts.sort_by(|a, b| b.volume.cmp(&a.volume));
}

/// Filter both sides of a chain and sort each by volume descending.
pub fn filter_chain(
    contracts: &OptionContracts,
    multiplier: u64,
) -> Result<FilteredChain, ScanError> {
    let mut calls = filter_contracts(&contracts.calls, multiplier)?;
    let mut puts = filter_contracts(&contracts.puts, multiplier)?;
    sort_by_volume(&mut calls);
    sort_by_volume(&mut puts);
    Ok(FilteredChain { calls, puts })
}
