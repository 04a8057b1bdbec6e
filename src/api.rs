//! Wire types and client for the temperature-logging API
//!
//! The types mirror the remote service's JSON structures and are shared
//! between the fetch layer and the page components.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::io::HttpClient;

/// Identity and status snapshot of one drone, as returned by /configs/{id}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneConfig {
    pub drone_id: String,
    pub drone_name: String,
    pub light: String,
    pub country: String,
}

/// One temperature observation, as returned by /logs/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub created: String,
    pub country: String,
    pub drone_id: String,
    pub drone_name: String,
    pub celsius: f64,
}

/// One page of log history
///
/// The service may omit either field; both default to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogPage {
    #[serde(rename = "totalItems", default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<LogEntry>,
}

/// Request body for POST /logs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogSubmission {
    pub drone_id: String,
    pub drone_name: String,
    pub country: String,
    pub celsius: f64,
}

/// Client for the temperature-logging API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// GET /configs/{drone_id}
    pub async fn fetch_config(&self, drone_id: &str) -> crate::Result<DroneConfig> {
        let url = format!("{}/configs/{}", self.base_url, drone_id);
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(crate::DashboardError::Api {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// POST /logs
    pub async fn submit_log(&self, submission: &LogSubmission) -> crate::Result<()> {
        let url = format!("{}/logs", self.base_url);
        let body = serde_json::to_value(submission)?;
        let response = self.http.post_json(&url, &body).await?;

        if !response.is_success() {
            return Err(crate::DashboardError::Api {
                status: response.status,
                body: response.body,
            });
        }

        Ok(())
    }

    /// GET /logs/{drone_id}?page={page}&perPage={per_page}
    pub async fn fetch_logs(
        &self,
        drone_id: &str,
        page: u32,
        per_page: u32,
    ) -> crate::Result<LogPage> {
        let url = format!(
            "{}/logs/{}?page={}&perPage={}",
            self.base_url, drone_id, page, per_page
        );
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(crate::DashboardError::Api {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}
