use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("Malformed date: {0}")]
    MalformedDate(String),

    #[error("Invalid config value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}

impl DisplayError {
    pub fn code(&self) -> &'static str {
        match self {
            DisplayError::MalformedDate(_) => "MALFORMED_DATE",
            DisplayError::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }

    /// Records the error at the point where it is turned into fallback text.
    pub fn log(&self) {
        match self {
            DisplayError::MalformedDate(raw) => {
                debug!(code = self.code(), raw = %raw, "Falling back to unformatted date");
            }
            DisplayError::InvalidConfig { key, value } => {
                warn!(code = self.code(), key = %key, value = %value, "Ignoring config value");
            }
        }
    }
}
