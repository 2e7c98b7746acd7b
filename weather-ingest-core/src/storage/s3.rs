use async_trait::async_trait;
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream};

use crate::error::IngestError;

use super::{ObjectStore, StorageObject};

/// S3 writer. Credentials and region come from the execution environment.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, object: &StorageObject) -> Result<(), IngestError> {
        self.client
            .put_object()
            .bucket(&object.bucket)
            .key(&object.key)
            .body(ByteStream::from(object.body.clone()))
            .content_type(object.content_type)
            .send()
            .await
            .map_err(|err| IngestError::Store {
                bucket: object.bucket.clone(),
                key: object.key.clone(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(())
    }
}
