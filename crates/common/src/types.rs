//! Domain types shared across the bot.

use serde::{Deserialize, Serialize};

/// A single NOTAM as returned by the NAV CANADA alpha API.
///
/// Only the fields the pipeline relies on are typed. The service sends a
/// loosely-shaped payload that grows fields over time, so everything else
/// rides along untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notam {
    /// Stable unique identifier for the notice, used for deduplication.
    pub pk: String,

    /// Start of the validity window (ISO-8601, lexicographically sortable).
    /// Absent on some notices; those sort below every dated one.
    #[serde(rename = "startValidity", default)]
    pub start_validity: Option<String>,

    /// Free-text body of the notice.
    #[serde(default)]
    pub text: String,

    /// Remote-supplied fields passed through opaquely.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
