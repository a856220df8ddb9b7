//! Best-effort remote sync
//!
//! Activities are pushed to a shared endpoint only after they are
//! committed locally, and the remote is never authoritative: a failed
//! submission is logged and dropped (local state stands), and a failed
//! leaderboard fetch yields an empty list rather than an error.

mod dispatcher;

pub use dispatcher::SyncDispatcher;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Seconds before an idle remote call is abandoned
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// One activity row as the shared endpoint expects it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUpload {
    pub name: String,
    pub date: String,
    pub title: String,
    pub category: String,
    pub points: u32,
    pub timestamp: i64,
}

/// One row of the remote leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteScore {
    pub name: String,
    pub points: u32,
}

/// Thin client over the remote activity endpoint
#[derive(Debug, Clone)]
pub struct RemoteClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl RemoteClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    /// Submit one committed activity. A single attempt with no backoff;
    /// the outcome is only logged.
    pub fn submit_activity(&self, activity: &ActivityUpload) {
        match self.agent.post(&self.url("/activities")).send_json(activity) {
            Ok(_) => {}
            Err(e) => warn!("activity sync failed, entry kept locally: {e}"),
        }
    }

    /// Fetch the shared leaderboard. Any failure yields an empty list.
    pub fn fetch_leaderboard(&self, window_days: u32) -> Vec<RemoteScore> {
        let url = self.url(&format!("/leaderboard?days={window_days}"));
        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(e) => {
                warn!("leaderboard fetch failed: {e}");
                return Vec::new();
            }
        };
        match response.into_json::<Vec<RemoteScore>>() {
            Ok(rows) => rows,
            Err(e) => {
                warn!("leaderboard response was not valid JSON: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let client = RemoteClient::new("https://example.test/api/");
        assert_eq!(client.url("/activities"), "https://example.test/api/activities");
    }

    #[test]
    fn test_fetch_from_unreachable_endpoint_is_empty() {
        // Reserved TEST-NET address; the request fails fast and the
        // failure surfaces only as an empty result.
        let client = RemoteClient::new("http://192.0.2.1:9");
        assert!(client.fetch_leaderboard(7).is_empty());
    }

    #[test]
    fn test_activity_upload_wire_shape() {
        let upload = ActivityUpload {
            name: "alice".to_string(),
            date: "2025-03-03".to_string(),
            title: "Task".to_string(),
            category: "Work".to_string(),
            points: 10,
            timestamp: 1_741_000_000_000,
        };
        let json = serde_json::to_value(&upload).unwrap();
        assert_eq!(json["name"], "alice");
        assert_eq!(json["points"], 10);
        assert_eq!(json["timestamp"], 1_741_000_000_000i64);
    }
}
