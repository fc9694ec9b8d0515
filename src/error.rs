use std::fmt;

/// Per-company failures, classified so the scan loop can pick the right
/// skip notice. Run-level callers bubble these into anyhow.
#[derive(Debug)]
pub enum ScanError {
    Request(String),
    Status(u16, String),
    Parse(String),
    DataUnavailable(String),
    MalformedData(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanError::Request(msg) => write!(f, "Request error: {}", msg),
            ScanError::Status(code, preview) => write!(f, "HTTP {}: {}", code, preview),
            ScanError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ScanError::DataUnavailable(msg) => write!(f, "Data unavailable: {}", msg),
            ScanError::MalformedData(msg) => write!(f, "Malformed data: {}", msg),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Parse(err.to_string())
    }
}
