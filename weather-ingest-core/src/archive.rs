use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::IngestError, model::{ArchiveRequest, WeatherPayload}};

pub mod open_meteo;

pub use open_meteo::OpenMeteoArchive;

/// Source of historical daily weather for a window and location.
#[async_trait]
pub trait ArchiveSource: Send + Sync + Debug {
    async fn fetch_daily(&self, request: &ArchiveRequest) -> Result<WeatherPayload, IngestError>;
}
