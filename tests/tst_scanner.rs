use options_scanner::config::ScanConfig;
use options_scanner::error::ScanError;
use options_scanner::models::{OptionContracts, RawContract};
use options_scanner::rules::VolumeDirection;
use options_scanner::scanner::{build_company_set, evaluate_chain};

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(volume: u64, open_interest: u64, percent_change: f64) -> RawContract {
        RawContract {
            contract_symbol: Some("TST250829C00100000".to_string()),
            strike: Some(100.0),
            volume: Some(volume),
            open_interest: Some(open_interest),
            change: Some(1.0),
            percent_change: Some(percent_change),
        }
    }

    fn contracts(calls: Vec<RawContract>, puts: Vec<RawContract>) -> OptionContracts {
        OptionContracts {
            expiration_date: Some(1_756_425_600),
            calls,
            puts,
        }
    }

    #[test]
    fn test_heavy_call_volume_yields_buy() {
        let cfg = ScanConfig::default();
        let chain = contracts(vec![raw(100, 10, 1.0)], vec![]);

        let result = evaluate_chain("AAPL", &chain, &cfg).unwrap().unwrap();
        assert_eq!(result.company, "AAPL");
        assert_eq!(result.volume_direction, VolumeDirection::Buy);
        assert_eq!(result.price_change_direction.number_of_positive_calls, 1);
        assert_eq!(result.price_change_direction.number_of_positive_puts, 0);
        assert_eq!(result.options.calls.len(), 1);
        assert!(result.options.puts.is_empty());
    }

    #[test]
    fn test_fully_filtered_chain_is_not_an_error() {
        let cfg = ScanConfig::default();
        // every row at or below twice its open interest
        let chain = contracts(
            vec![raw(20, 10, 1.0), raw(5, 10, 2.0)],
            vec![raw(14, 7, 3.0)],
        );

        assert!(evaluate_chain("WMT", &chain, &cfg).unwrap().is_none());
    }

    #[test]
    fn test_empty_chain_is_not_an_error() {
        let cfg = ScanConfig::default();
        let chain = contracts(vec![], vec![]);

        assert!(evaluate_chain("HD", &chain, &cfg).unwrap().is_none());
    }

    #[test]
    fn test_missing_field_fails_the_company() {
        let cfg = ScanConfig::default();
        let mut bad = raw(100, 10, 1.0);
        bad.volume = None;
        let chain = contracts(vec![raw(50, 5, 2.0)], vec![bad]);

        let err = evaluate_chain("ZM", &chain, &cfg).unwrap_err();
        assert!(matches!(err, ScanError::MalformedData(_)));
    }

    #[test]
    fn test_contradicted_signal_is_dropped() {
        let cfg = ScanConfig::default();
        // puts win on volume, but only the call side gained
        let chain = contracts(vec![raw(100, 10, 4.0)], vec![raw(300, 10, -1.5)]);

        assert!(evaluate_chain("BYND", &chain, &cfg).unwrap().is_none());
    }

    #[test]
    fn test_company_set_deduplicates() {
        let watchlist = vec!["MSFT".to_string(), "TSLA".to_string()];
        let most_active = vec!["TSLA".to_string(), "AMD".to_string(), "AMD".to_string()];

        let mut companies = build_company_set(&watchlist, most_active);
        companies.sort();
        assert_eq!(companies, vec!["AMD", "MSFT", "TSLA"]);
    }
}
