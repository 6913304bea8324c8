// Environment Agency flood-monitoring API repository implementation
use crate::application::error::{FetchError, ParseError, PipelineError};
use crate::application::readings_repository::ReadingsRepository;
use crate::domain::reading::Reading;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct FloodMonitoringRepository {
    client: reqwest::Client,
    base_url: String,
    station_id: String,
    limit: u32,
}

#[derive(Debug, Deserialize)]
struct ReadingsResponse {
    items: Vec<Reading>,
}

impl FloodMonitoringRepository {
    pub fn new(base_url: String, station_id: String, limit: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            station_id,
            limit,
        }
    }

    fn build_readings_url(&self, since: DateTime<Utc>) -> Result<Url, FetchError> {
        let since = since.to_rfc3339_opts(SecondsFormat::Millis, true);
        let url = format!(
            "{}/id/stations/{}/readings?since={}&_limit={}",
            self.base_url,
            urlencoding::encode(&self.station_id),
            urlencoding::encode(&since),
            self.limit
        );

        Url::parse(&url).map_err(|e| FetchError::InvalidRequest(format!("{url}: {e}")))
    }
}

#[async_trait]
impl ReadingsRepository for FloodMonitoringRepository {
    async fn readings_since(&self, since: DateTime<Utc>) -> Result<Vec<Reading>, PipelineError> {
        let url = self.build_readings_url(since)?;
        tracing::debug!("Requesting readings from {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()).into());
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let data: ReadingsResponse = serde_json::from_slice(&body).map_err(ParseError::from)?;

        Ok(data.items)
    }
}
