//! Plant catalog service

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::Plant;

use crate::config::SheetsConfig;
use crate::error::{AppError, AppResult};
use crate::external::SheetsClient;

/// Catalog bundled with the server, used when no spreadsheet is configured
const BUILTIN_CATALOG: &str = include_str!("../../data/plants.csv");

/// Catalog format version reported to clients
pub const CATALOG_VERSION: &str = "1.0";

/// Plant catalog payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCatalog {
    pub plants: Vec<Plant>,
    pub version: String,
    pub last_updated: DateTime<Utc>,
}

/// Where the catalog rows come from
#[derive(Clone)]
enum CatalogSource {
    Sheet {
        client: SheetsClient,
        sheet_id: String,
        range: String,
    },
    Builtin,
}

/// Plant catalog service
#[derive(Clone)]
pub struct PlantService {
    source: CatalogSource,
}

impl PlantService {
    /// Service backed by the bundled catalog
    pub fn builtin() -> Self {
        Self {
            source: CatalogSource::Builtin,
        }
    }

    /// Service reading from a spreadsheet
    pub fn from_sheet(client: SheetsClient, sheet_id: &str, range: &str) -> Self {
        Self {
            source: CatalogSource::Sheet {
                client,
                sheet_id: sheet_id.to_string(),
                range: range.to_string(),
            },
        }
    }

    /// Create a PlantService from configuration
    pub fn from_config(sheets: &SheetsConfig, timeout: std::time::Duration) -> AppResult<Self> {
        match &sheets.sheet_id {
            Some(sheet_id) => {
                let client = SheetsClient::new(&sheets.api_url, sheets.api_key.clone(), timeout)?;
                Ok(Self::from_sheet(client, sheet_id, &sheets.range))
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Load the full catalog
    pub async fn get_catalog(&self) -> AppResult<PlantCatalog> {
        let plants = match &self.source {
            CatalogSource::Sheet {
                client,
                sheet_id,
                range,
            } => {
                tracing::info!("Fetching plant catalog from sheet {}", sheet_id);
                client.fetch_plants(sheet_id, range).await?
            }
            CatalogSource::Builtin => parse_catalog(BUILTIN_CATALOG)?,
        };

        tracing::debug!("Loaded {} plants", plants.len());

        Ok(PlantCatalog {
            plants,
            version: CATALOG_VERSION.to_string(),
            last_updated: Utc::now(),
        })
    }
}

/// Parse catalog CSV (with a header row) into plants
pub fn parse_catalog(csv_text: &str) -> AppResult<Vec<Plant>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut plants = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::Internal(format!("Invalid plant catalog: {}", e)))?;
        let cells: Vec<&str> = record.iter().collect();
        if let Some(plant) = Plant::from_row(&cells) {
            plants.push(plant);
        }
    }

    Ok(plants)
}
