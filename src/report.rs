use crate::rules::CompanyResult;
use anyhow::{Context, Result};
use chrono::DateTime;
use std::path::{Path, PathBuf};

/// Format a unix expiration timestamp as the YYYY-MM-DD label used in the
/// report filename. Yahoo serves expirations as midnight UTC.
pub fn expiration_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

pub fn report_filename(expiration: &str) -> String {
    format!("options-{}.json", expiration)
}

/// Write the accumulated results as a pretty-printed JSON array to
/// `options-<expiration>.json` inside `dir`, overwriting any previous file.
/// Returns the written path.
pub fn write_report(results: &[CompanyResult], expiration: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_filename(expiration));
    let json = serde_json::to_string_pretty(results).context("Failed to serialize results")?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionContract;
    use crate::rules::{PriceChangeDirection, RankedOptions, VolumeDirection};

    fn sample_result() -> CompanyResult {
        CompanyResult {
            company: "MSFT".to_string(),
            volume_direction: VolumeDirection::Buy,
            price_change_direction: PriceChangeDirection {
                number_of_positive_calls: 1,
                number_of_positive_puts: 0,
            },
            options: RankedOptions {
                calls: vec![OptionContract {
                    strike: 300.0,
                    volume: 100,
                    open_interest: 10,
                    change: 0.5,
                    percent_change: 1.0,
                }],
                puts: vec![],
            },
        }
    }

    #[test]
    fn test_expiration_label() {
        assert_eq!(expiration_label(1756425600), "2025-08-29");
        assert_eq!(report_filename("2025-08-29"), "options-2025-08-29.json");
    }

    #[test]
    fn test_write_report_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&[sample_result()], "2025-08-29", dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "options-2025-08-29.json");

        let written = std::fs::read_to_string(&path).unwrap();
        // pretty-printed with 2-space indent
        assert!(written.starts_with("[\n  {"));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["company"], "MSFT");
        assert_eq!(parsed[0]["volume_direction"], "BUY");
        assert_eq!(parsed[0]["price_change_direction"]["number_of_positive_calls"], 1);
        assert_eq!(parsed[0]["options"]["calls"][0]["openInterest"], 10);
        assert_eq!(parsed[0]["options"]["calls"][0]["percentChange"], 1.0);
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        write_report(&[sample_result()], "2025-08-29", dir.path()).unwrap();
        let path = write_report(&[], "2025-08-29", dir.path()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[]");
    }
}
