//! Historical weather client
//!
//! Integrates with the Open-Meteo archive API for daily temperature extremes

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::DailyTemperatureSeries;

use crate::error::{AppError, AppResult};

/// Open-Meteo archive client
#[derive(Clone)]
pub struct WeatherArchiveClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo archive response
#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: ArchiveDaily,
}

#[derive(Debug, Deserialize)]
struct ArchiveDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

impl WeatherArchiveClient {
    /// Create a new WeatherArchiveClient
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build archive client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch daily max/min temperatures (°F) between two dates, inclusive
    pub async fn fetch_daily_temperatures(
        &self,
        latitude: Decimal,
        longitude: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<DailyTemperatureSeries> {
        let url = format!("{}/v1/archive", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("start_date", start_date.format("%Y-%m-%d").to_string()),
                ("end_date", end_date.format("%Y-%m-%d").to_string()),
                ("daily", "temperature_2m_max,temperature_2m_min".to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherArchive(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherArchive(format!("{} - {}", status, body)));
        }

        let data: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherArchive(format!("failed to parse response: {}", e)))?;

        into_series(start_date, data.daily)
    }
}

/// Convert the archive's nullable columns into a dense series.
///
/// The archive lags real time by a few days, so trailing days with a missing
/// reading are dropped. A gap anywhere else is rejected.
fn into_series(start_date: NaiveDate, daily: ArchiveDaily) -> AppResult<DailyTemperatureSeries> {
    let days = daily.time.len();
    if daily.temperature_2m_max.len() != days || daily.temperature_2m_min.len() != days {
        return Err(AppError::InvalidInput(format!(
            "archive columns differ in length: {} days, {} max readings, {} min readings",
            days,
            daily.temperature_2m_max.len(),
            daily.temperature_2m_min.len()
        )));
    }

    let readings: Vec<Option<(f64, f64)>> = daily
        .temperature_2m_max
        .iter()
        .zip(&daily.temperature_2m_min)
        .map(|(max, min)| (*max).zip(*min))
        .collect();

    let complete = readings
        .iter()
        .rposition(Option::is_some)
        .map(|last| last + 1)
        .unwrap_or(0);

    let mut max_temps = Vec::with_capacity(complete);
    let mut min_temps = Vec::with_capacity(complete);
    for (day, reading) in readings[..complete].iter().enumerate() {
        let (max, min) = reading.ok_or_else(|| {
            AppError::InvalidInput(format!("missing temperature reading on {}", daily.time[day]))
        })?;
        max_temps.push(max);
        min_temps.push(min);
    }

    if complete < days {
        tracing::debug!("Trimmed {} trailing days without readings", days - complete);
    }

    Ok(DailyTemperatureSeries::new(start_date, max_temps, min_temps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn daily(max: Vec<Option<f64>>, min: Vec<Option<f64>>) -> ArchiveDaily {
        let start = date("2025-01-01");
        let time = (0..max.len())
            .map(|i| (start + chrono::Days::new(i as u64)).format("%Y-%m-%d").to_string())
            .collect();
        ArchiveDaily {
            time,
            temperature_2m_max: max,
            temperature_2m_min: min,
        }
    }

    #[test]
    fn test_trailing_gaps_are_trimmed() {
        let series = into_series(
            date("2025-01-01"),
            daily(
                vec![Some(50.0), Some(52.0), None, None],
                vec![Some(30.0), Some(31.0), Some(29.0), None],
            ),
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.max_temps, vec![50.0, 52.0]);
        assert_eq!(series.min_temps, vec![30.0, 31.0]);
    }

    #[test]
    fn test_interior_gap_is_rejected() {
        let err = into_series(
            date("2025-01-01"),
            daily(vec![Some(50.0), None, Some(51.0)], vec![Some(30.0), Some(30.0), Some(30.0)]),
        )
        .unwrap_err();

        match err {
            AppError::InvalidInput(msg) => assert!(msg.contains("2025-01-02")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_columns_are_rejected() {
        let err = into_series(
            date("2025-01-01"),
            daily(vec![Some(80.0); 365], vec![Some(60.0); 300]),
        )
        .unwrap_err();

        match err {
            AppError::InvalidInput(msg) => {
                assert!(msg.contains("365 days"));
                assert!(msg.contains("300 min"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_time_column_is_rejected() {
        let mut columns = daily(vec![Some(80.0); 10], vec![Some(60.0); 10]);
        columns.time.truncate(7);

        let err = into_series(date("2025-01-01"), columns).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_fetch_daily_temperatures() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/archive"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .and(query_param("start_date", "2024-10-18"))
            .and(query_param("end_date", "2025-10-18"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 42.36,
                "longitude": -71.1,
                "daily": {
                    "time": ["2024-10-18", "2024-10-19", "2024-10-20"],
                    "temperature_2m_max": [61.2, 58.9, null],
                    "temperature_2m_min": [45.0, 41.3, null]
                }
            })))
            .mount(&mock_server)
            .await;

        let client = WeatherArchiveClient::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let series = client
            .fetch_daily_temperatures(
                Decimal::from_str("42.3647").unwrap(),
                Decimal::from_str("-71.1042").unwrap(),
                date("2024-10-18"),
                date("2025-10-18"),
            )
            .await
            .unwrap();

        assert_eq!(series.start_date, date("2024-10-18"));
        assert_eq!(series.max_temps, vec![61.2, 58.9]);
        assert_eq!(series.min_temps, vec![45.0, 41.3]);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/archive"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid date range"))
            .mount(&mock_server)
            .await;

        let client = WeatherArchiveClient::new(&mock_server.uri(), Duration::from_secs(5)).unwrap();
        let err = client
            .fetch_daily_temperatures(Decimal::ZERO, Decimal::ZERO, date("2024-10-18"), date("2025-10-18"))
            .await
            .unwrap_err();

        match err {
            AppError::WeatherArchive(msg) => assert!(msg.contains("invalid date range")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
