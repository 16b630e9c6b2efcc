//! Unified error type for the notam-bot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("airport dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("malformed airport record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("NAV CANADA API returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}
