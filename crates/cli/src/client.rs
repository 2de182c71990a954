//! API client for the Migration Analyzer API

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// HTTP client for the analysis API
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    #[allow(dead_code)]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, error_message(body));
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, error_message(body));
        }

        response.json().await.context("Failed to parse response")
    }

    /// Submit an inventory payload for analysis
    pub async fn analyze(&self, inventory: &serde_json::Value) -> Result<AnalysisReport> {
        self.post("api/v1/analyze", inventory).await
    }
}

/// Pull the error field out of an API error body when it parses
fn error_message(body: String) -> String {
    serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body)
}

/// Read an inventory JSON file from disk
pub fn load_inventory(path: &str) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read inventory file {path}"))?;
    serde_json::from_str(&content).context("Inventory file is not valid JSON")
}

// API response types

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub total_servers: usize,
    pub average_complexity_score: f64,
    pub portfolio: PortfolioCostSummary,
    pub roadmap: Option<RoadmapResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioCostSummary {
    pub total_migration_cost: f64,
    pub monthly_cloud_cost: f64,
    pub current_costs: f64,
    pub monthly_savings: f64,
    pub roi_months: u32,
    pub annual_savings: f64,
    pub three_year_savings: f64,
    pub cost_reduction_percent: f64,
    pub servers: HashMap<String, CostBreakdown>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub projected_monthly_cost: f64,
    pub current_monthly_cost: f64,
    pub migration_cost: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResult {
    pub available: bool,
    #[serde(default)]
    pub project_summary: Option<ProjectSummary>,
    #[serde(default)]
    pub phases: Vec<TimelinePhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub duration: String,
    pub total_effort: f64,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: String,
    pub critical_path: bool,
    pub complexity: String,
    pub strategy: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    pub is_final: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_analyze_posts_and_parses_report() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "totalServers": 1,
                    "averageComplexityScore": 55.0,
                    "portfolio": {
                        "totalMigrationCost": 1200000.0,
                        "monthlyCloudCost": 8600.0,
                        "currentCosts": 12040.0,
                        "monthlySavings": 3440.0,
                        "roiMonths": 349,
                        "annualSavings": 41280.0,
                        "threeYearSavings": -1076160.0,
                        "costReductionPercent": 28.57142857142857,
                        "servers": {
                            "srv-1": {
                                "projectedMonthlyCost": 8600.0,
                                "currentMonthlyCost": 12040.0,
                                "migrationCost": 1200000.0,
                                "savings": 3440.0
                            }
                        }
                    },
                    "roadmap": null
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let report = client.analyze(&json!({"servers": []})).await.unwrap();

        mock.assert_async().await;
        assert_eq!(report.total_servers, 1);
        assert_eq!(report.portfolio.roi_months, 349);
        assert!(report.roadmap.is_none());
        assert_eq!(
            report.portfolio.servers["srv-1"].projected_monthly_cost,
            8600.0
        );
    }

    #[tokio::test]
    async fn test_api_error_surfaces_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/analyze")
            .with_status(422)
            .with_body(r#"{"error": "portfolio contains no servers"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let result = client.analyze(&json!({"servers": []})).await;

        let message = result.unwrap_err().to_string();
        assert!(message.contains("422"));
        assert!(message.contains("no servers"));
    }

    #[test]
    fn test_load_inventory_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_inventory(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_inventory_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"servers": []}"#).unwrap();

        let value = load_inventory(path.to_str().unwrap()).unwrap();
        assert!(value["servers"].is_array());
    }
}
