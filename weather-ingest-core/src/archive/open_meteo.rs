use async_trait::async_trait;
use log::info;
use reqwest::{Client, Url};

use crate::{
    error::IngestError,
    model::{ArchiveRequest, DAILY_METRICS, WeatherPayload},
};

use super::ArchiveSource;

pub const ARCHIVE_ENDPOINT: &str = "https://archive-api.open-meteo.com/v1/archive";

#[derive(Debug, Clone)]
pub struct OpenMeteoArchive {
    base_url: String,
    http: Client,
}

impl OpenMeteoArchive {
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_ENDPOINT)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    /// Full request URL, query string included.
    pub fn archive_url(&self, request: &ArchiveRequest) -> Result<Url, IngestError> {
        Ok(self.build_request(request)?.url().clone())
    }

    fn build_request(&self, request: &ArchiveRequest) -> Result<reqwest::Request, IngestError> {
        Ok(self.http.get(&self.base_url).query(&query_params(request)).build()?)
    }
}

impl Default for OpenMeteoArchive {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchiveSource for OpenMeteoArchive {
    async fn fetch_daily(&self, request: &ArchiveRequest) -> Result<WeatherPayload, IngestError> {
        let req = self.build_request(request)?;

        info!("Fetching weather data from: {}", req.url());

        let res = self.http.execute(req).await?;
        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            return Err(IngestError::Status {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(WeatherPayload::from_slice(&body)?)
    }
}

fn query_params(request: &ArchiveRequest) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", format!("{:.4}", request.coordinates.latitude)),
        ("longitude", format!("{:.4}", request.coordinates.longitude)),
        ("start_date", request.window.start.format("%Y-%m-%d").to_string()),
        ("end_date", request.window.end.format("%Y-%m-%d").to_string()),
        ("daily", DAILY_METRICS.join(",")),
        ("timezone", request.timezone.clone()),
    ]
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
