use crate::models::OptionContract;
use crate::processor::FilteredChain;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Coarse directional bias read from relative call vs put volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VolumeDirection {
    Buy,
    Sell,
    Equal,
}

/// How many of the top contracts on each side gained on the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChangeDirection {
    pub number_of_positive_calls: usize,
    pub number_of_positive_puts: usize,
}

/// Top contracts by volume, kept for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedOptions {
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

/// Per-company scan outcome written to the report file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResult {
    pub company: String,
    pub volume_direction: VolumeDirection,
    pub price_change_direction: PriceChangeDirection,
    pub options: RankedOptions,
}

/// Compare total call volume against total put volume, over ALL filtered
/// contracts (not just the top slice). Totals are widened so they cannot
/// overflow.
pub fn volume_direction(chain: &FilteredChain) -> VolumeDirection {
    let sum_calls: u128 = chain.calls.iter().map(|c| u128::from(c.volume)).sum();
    let sum_puts: u128 = chain.puts.iter().map(|p| u128::from(p.volume)).sum();

    match sum_calls.cmp(&sum_puts) {
        Ordering::Greater => VolumeDirection::Buy,
        Ordering::Less => VolumeDirection::Sell,
        Ordering::Equal => VolumeDirection::Equal,
    }
}

/// Count contracts with a positive session change among the top `top` calls
/// and puts. Expects both lists sorted by volume descending. None when
/// neither side has a single gainer, which drops the company.
pub fn price_change_direction(chain: &FilteredChain, top: usize) -> Option<PriceChangeDirection> {
    let number_of_positive_calls = chain
        .calls
        .iter()
        .take(top)
        .filter(|c| c.percent_change > 0.0)
        .count();
    let number_of_positive_puts = chain
        .puts
        .iter()
        .take(top)
        .filter(|p| p.percent_change > 0.0)
        .count();

    if number_of_positive_calls == 0 && number_of_positive_puts == 0 {
        return None;
    }

    Some(PriceChangeDirection {
        number_of_positive_calls,
        number_of_positive_puts,
    })
}

/// The volume bias only stands when price action agrees with it: selling
/// pressure needs rising puts, buying pressure needs rising calls.
pub fn verify_signal(direction: VolumeDirection, price: &PriceChangeDirection) -> bool {
    match direction {
        VolumeDirection::Sell => price.number_of_positive_puts > 0,
        VolumeDirection::Buy => price.number_of_positive_calls > 0,
        VolumeDirection::Equal => false,
    }
}

/// Derive the trading signal for one company from its filtered chain. None
/// means the chain produced nothing worth reporting.
pub fn derive_signal(company: &str, chain: &FilteredChain, top: usize) -> Option<CompanyResult> {
    let direction = volume_direction(chain);
    let price = price_change_direction(chain, top)?;
    if !verify_signal(direction, &price) {
        return None;
    }

    Some(CompanyResult {
        company: company.to_string(),
        volume_direction: direction,
        price_change_direction: price,
        options: RankedOptions {
            calls: chain.calls.iter().take(top).cloned().collect(),
            puts: chain.puts.iter().take(top).cloned().collect(),
        },
    })
}
