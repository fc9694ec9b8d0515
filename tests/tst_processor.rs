use options_scanner::models::{OptionContract, RawContract};
use options_scanner::processor::{filter_contracts, sort_by_volume};

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(volume: u64, open_interest: u64, percent_change: f64) -> RawContract {
        RawContract {
            contract_symbol: Some(format!("TST-{}-{}", volume, open_interest)),
            strike: Some(150.0),
            volume: Some(volume),
            open_interest: Some(open_interest),
            change: Some(0.25),
            percent_change: Some(percent_change),
        }
    }

    fn back_to_raw(kept: &[OptionContract]) -> Vec<RawContract> {
        kept.iter()
            .map(|c| RawContract {
                contract_symbol: None,
                strike: Some(c.strike),
                volume: Some(c.volume),
                open_interest: Some(c.open_interest),
                change: Some(c.change),
                percent_change: Some(c.percent_change),
            })
            .collect()
    }

    #[test]
    fn test_filter_excludes_at_or_below_threshold() {
        let rows = vec![
            raw(20, 10, 1.0),  // equal to 2x open interest, excluded
            raw(19, 10, 1.0),  // below, excluded
            raw(21, 10, 1.0),  // above, kept
            raw(0, 0, 1.0),    // zero volume never beats zero interest
        ];

        let kept = filter_contracts(&rows, 2).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].volume, 21);
    }

    #[test]
    fn test_refiltering_is_idempotent() {
        let rows = vec![
            raw(100, 10, 1.0),
            raw(15, 10, 0.4),
            raw(900, 5, -2.0),
            raw(8, 3, 0.0),
        ];

        let kept = filter_contracts(&rows, 2).unwrap();
        assert_eq!(kept.len(), 3);

        let kept_again = filter_contracts(&back_to_raw(&kept), 2).unwrap();
        assert_eq!(kept, kept_again);
    }

    #[test]
    fn test_sorted_output_is_non_increasing() {
        let rows = vec![
            raw(40, 1, 0.0),
            raw(700, 1, 0.0),
            raw(700, 2, 0.0),
            raw(3, 0, 0.0),
            raw(120, 7, 0.0),
        ];

        let mut kept = filter_contracts(&rows, 2).unwrap();
        sort_by_volume(&mut kept);

        for pair in kept.windows(2) {
            assert!(pair[0].volume >= pair[1].volume);
        }
        // stable: the 700/1 row was listed before 700/2 and stays first
        assert_eq!(kept[0].open_interest, 1);
        assert_eq!(kept[1].open_interest, 2);
    }

    #[test]
    fn test_missing_open_interest_is_malformed() {
        let mut row = raw(50, 10, 1.0);
        row.open_interest = None;

        let err = filter_contracts(&[row], 2).unwrap_err();
        assert!(err.to_string().contains("openInterest"));
    }
}
