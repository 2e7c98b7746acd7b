use log::{error, info, warn};

use crate::{
    archive::ArchiveSource,
    config::IngestConfig,
    error::IngestError,
    model::{IngestReport, InvocationResult},
    storage::{ObjectStore, StorageObject},
};

/// One month of daily weather, fetched once and landed once.
#[derive(Debug)]
pub struct IngestJob {
    config: IngestConfig,
    source: Box<dyn ArchiveSource>,
    store: Box<dyn ObjectStore>,
}

impl IngestJob {
    pub fn new(config: IngestConfig, source: Box<dyn ArchiveSource>, store: Box<dyn ObjectStore>) -> Self {
        Self { config, source, store }
    }

    /// Fetch, then store. The store is not touched if the fetch fails.
    pub async fn run(&self) -> Result<IngestReport, IngestError> {
        if self.config.city_mismatches_coordinates() {
            warn!(
                "CITY is '{}' but the query still uses ({:.4}, {:.4}); stored data is for those coordinates",
                self.config.city, self.config.coordinates.latitude, self.config.coordinates.longitude,
            );
        }

        let payload = self.source.fetch_daily(&self.config.archive_request()).await?;

        let object = StorageObject::for_payload(&self.config, &payload);
        self.store.put_object(&object).await?;

        info!("Uploaded {} to {}", object.file_name(), object.uri());

        Ok(IngestReport { bucket: object.bucket, key: object.key, bytes: object.body.len() })
    }

    /// Like [`run`](Self::run), but folds any failure into the returned value.
    pub async fn invoke(&self) -> InvocationResult {
        match self.run().await {
            Ok(_) => InvocationResult::Success,
            Err(err) => {
                error!("Weather ingest failed ({:?} stage): {err}", err.stage());
                InvocationResult::Error { message: err.to_string() }
            }
        }
    }
}
