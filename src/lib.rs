pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod processor;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod yahoo_client;

// Re-exports for convenience
pub use config::*;
pub use error::ScanError;
pub use models::{OptionChainQuote, OptionContract, OptionContracts, RawContract};
pub use processor::FilteredChain;
pub use rules::{CompanyResult, PriceChangeDirection, RankedOptions, VolumeDirection};
pub use yahoo_client::YahooClient;
