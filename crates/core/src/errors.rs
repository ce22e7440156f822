use thiserror::Error;

/// Unified error type for the entire gold-rupee-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data file ───────────────────────────────────────────────────
    #[error("Data file not found")]
    DataFileNotFound,

    #[error("Malformed JSON in data file: {0}")]
    MalformedJson(String),

    #[error("Unrecognized data file shape: expected an array, {{\"data\": [...]}} or {{\"goldData\": [...], \"rupeeData\": [...]}}")]
    UnrecognizedShape,

    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Rendering / Configuration ───────────────────────────────────
    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedJson(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest error messages embed the full URL; keep the query string out of logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
