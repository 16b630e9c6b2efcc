//! NAV CANADA weather-advisory API client.
//!
//! Issues one composite GET request covering every resolved airport and
//! parses the structural response into `Notam` records.

pub mod query;

pub use query::{build_query, NotamQuery, QueryPoint};

use std::error::Error as StdError;
use std::time::Duration;

use common::config::ApiConfig;
use common::{Error, Notam, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level response envelope from the alpha API.
#[derive(Debug, Deserialize)]
struct AlphaResponse {
    data: Vec<Notam>,
}

fn format_reqwest_error(err: &reqwest::Error) -> String {
    // Keep chained causes so network failures (DNS/TLS/socket) are visible.
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !cause_msg.is_empty() && !message.contains(&cause_msg) {
            message.push_str(": ");
            message.push_str(&cause_msg);
        }
        source = cause.source();
    }

    message
}

fn summarize_response_body(raw: &str) -> String {
    const MAX_CHARS: usize = 800;
    let compact = raw.replace('\n', " ").replace('\r', " ");
    if compact.len() > MAX_CHARS {
        format!("{}…", &compact[..MAX_CHARS])
    } else {
        compact
    }
}

/// HTTP client for the alpha API with connection pooling and a bounded
/// timeout.
#[derive(Debug, Clone)]
pub struct NavCanadaClient {
    client: reqwest::Client,
    base_url: String,
}

impl NavCanadaClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("notam-bot/0.1")
            .pool_max_idle_per_host(4)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build NAV CANADA HTTP client");

        Self {
            client,
            base_url: config.base_url.trim().to_string(),
        }
    }

    /// Fetch every notice covered by the query in a single request.
    ///
    /// A query with no points short-circuits to an empty result without
    /// touching the network, so callers stay linear when nothing resolved.
    pub async fn fetch_notams(&self, query: &NotamQuery) -> Result<Vec<Notam>> {
        if query.points.is_empty() {
            debug!("No resolved query points; skipping API call");
            return Ok(Vec::new());
        }

        let url = query.to_url(&self.base_url);
        debug!("Fetching NOTAMs: {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format_reqwest_error(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Remote {
                status: status.as_u16(),
                body: summarize_response_body(&body),
            });
        }

        let parsed: AlphaResponse = resp
            .json()
            .await
            .map_err(|e| Error::Parse(format!("NOTAM response body: {}", e)))?;

        debug!(
            "Got {} notices for {} query points",
            parsed.data.len(),
            query.points.len()
        );

        Ok(parsed.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> &'static str {
        r#"{
            "meta": {"count": 2},
            "data": [
                {
                    "pk": "NOTAM-1",
                    "startValidity": "2026-08-01T12:00:00Z",
                    "endValidity": "2026-09-01T12:00:00Z",
                    "text": "RWY 07/25 CLSD",
                    "location": "CYOW"
                },
                {
                    "pk": "NOTAM-2",
                    "text": "CRANE ERECTED 1 NM W AD"
                }
            ]
        }"#
    }

    #[test]
    fn deserializes_response_envelope() {
        let parsed: AlphaResponse =
            serde_json::from_str(sample_response()).expect("response should deserialize");

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].pk, "NOTAM-1");
        assert_eq!(
            parsed.data[0].start_validity.as_deref(),
            Some("2026-08-01T12:00:00Z")
        );
        assert_eq!(parsed.data[0].text, "RWY 07/25 CLSD");
    }

    #[test]
    fn missing_start_validity_is_none() {
        let parsed: AlphaResponse =
            serde_json::from_str(sample_response()).expect("response should deserialize");

        assert_eq!(parsed.data[1].start_validity, None);
    }

    #[test]
    fn unknown_fields_pass_through_opaquely() {
        let parsed: AlphaResponse =
            serde_json::from_str(sample_response()).expect("response should deserialize");

        assert_eq!(
            parsed.data[0].extra.get("location").and_then(|v| v.as_str()),
            Some("CYOW")
        );
        assert!(parsed.data[0].extra.contains_key("endValidity"));
    }

    #[test]
    fn body_without_notice_collection_fails_to_parse() {
        let err = serde_json::from_str::<AlphaResponse>(r#"{"status": "ok"}"#).unwrap_err();
        assert!(err.to_string().contains("data"));
    }

    #[tokio::test]
    async fn empty_query_short_circuits_without_network() {
        // Unroutable base URL — the call must never leave the process.
        let client = NavCanadaClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9/alpha/".into(),
            timeout_secs: 1,
        });
        let query = NotamQuery {
            points: Vec::new(),
            radius_nm: 25,
        };

        let notams = client
            .fetch_notams(&query)
            .await
            .expect("empty query should short-circuit");
        assert!(notams.is_empty());
    }
}
