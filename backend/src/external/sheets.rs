//! Google Sheets client for the plant catalog
//!
//! Reads cell values from a public spreadsheet through the Sheets v4 API

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::Plant;

use crate::error::{AppError, AppResult};

/// Google Sheets values client
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Sheets `values.get` response
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl SheetsClient {
    /// Create a new SheetsClient
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build sheets client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetch plant rows from `range` of the given spreadsheet.
    ///
    /// Rows without a name are skipped.
    pub async fn fetch_plants(&self, sheet_id: &str, range: &str) -> AppResult<Vec<Plant>> {
        let url = format!("{}/v4/spreadsheets/{}/values/{}", self.base_url, sheet_id, range);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Sheets(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Sheets(format!("{} - {}", status, body)));
        }

        let data: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::Sheets(format!("failed to parse response: {}", e)))?;

        Ok(data
            .values
            .iter()
            .filter_map(|row| {
                let cells: Vec<String> = row.iter().map(cell_text).collect();
                Plant::from_row(&cells)
            })
            .collect())
    }
}

/// Cell text as displayed; numbers arrive unquoted when a sheet is read
/// with unformatted values
fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
