use thiserror::Error;

/// Which half of the fetch-then-store sequence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStage {
    Fetch,
    Store,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("archive request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("archive API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("archive response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write s3://{bucket}/{key}: {message}")]
    Store {
        bucket: String,
        key: String,
        message: String,
    },
}

/// A `YYYY-MM` string (or year/month pair) that does not name a calendar month.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct InvalidMonth(pub String);

impl IngestError {
    pub fn stage(&self) -> IngestStage {
        match self {
            IngestError::Request(_) | IngestError::Status { .. } | IngestError::Decode(_) => {
                IngestStage::Fetch
            }
            IngestError::Store { .. } => IngestStage::Store,
        }
    }
}
