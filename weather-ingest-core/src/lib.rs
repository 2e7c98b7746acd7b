//! Core library for the monthly weather landing job.
//!
//! This crate defines:
//! - Per-invocation configuration resolved from the environment
//! - The archive API client and the object-store abstraction
//! - The fetch-then-store job and the result handed back to the function host
//!
//! It is used by the `weather-ingest` binary, both under the Lambda runtime
//! and for one-off local runs.

pub mod archive;
pub mod config;
pub mod error;
pub mod job;
pub mod model;
pub mod storage;

pub use archive::{ArchiveSource, OpenMeteoArchive};
pub use config::IngestConfig;
pub use error::{IngestError, IngestStage, InvalidMonth};
pub use job::IngestJob;
pub use model::{ArchiveRequest, Coordinates, IngestReport, InvocationResult, QueryWindow, WeatherPayload};
pub use storage::{ObjectStore, S3ObjectStore, StorageObject};
