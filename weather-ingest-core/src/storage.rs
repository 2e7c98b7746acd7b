use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::fmt::Debug;

use crate::{config::IngestConfig, error::IngestError, model::WeatherPayload};

pub mod s3;

pub use s3::S3ObjectStore;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `landing/<city>/weather/<YYYY>/<MM>/weather_<YYYY>-<MM>.json`, keyed on the
/// first day of the query window. `city` is used verbatim.
pub fn storage_key(city: &str, start: NaiveDate) -> String {
    let (year, month) = (start.year(), start.month());
    format!("landing/{city}/weather/{year}/{month:02}/weather_{year}-{month:02}.json")
}

/// One object to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl StorageObject {
    pub fn for_payload(config: &IngestConfig, payload: &WeatherPayload) -> Self {
        Self {
            bucket: config.bucket.clone(),
            key: storage_key(&config.city, config.window.start),
            body: payload.to_json_bytes(),
            content_type: JSON_CONTENT_TYPE,
        }
    }

    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }
}

/// Bucket/key addressed blob store.
#[async_trait]
pub trait ObjectStore: Send + Sync + Debug {
    async fn put_object(&self, object: &StorageObject) -> Result<(), IngestError>;
}
