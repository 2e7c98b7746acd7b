use anyhow::anyhow;
use clap::{Parser, Subcommand};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use weather_ingest_core::{IngestConfig, IngestJob, InvocationResult, OpenMeteoArchive, QueryWindow, S3ObjectStore};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-ingest", version, about = "Land one month of daily weather in S3")]
pub struct Cli {
    /// Defaults to `lambda`, which is how the function host starts us.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve invocations from the Lambda runtime API.
    Lambda,

    /// Run one invocation now and print its result.
    Run {
        /// Month to fetch as YYYY-MM; defaults to 2025-07.
        #[arg(long, value_parser = QueryWindow::parse_month)]
        month: Option<QueryWindow>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Lambda) {
            Command::Lambda => serve().await,
            Command::Run { month } => run_once(month).await,
        }
    }
}

async fn serve() -> anyhow::Result<()> {
    let store = S3ObjectStore::from_env().await;

    lambda_runtime::run(service_fn(move |_event: LambdaEvent<Value>| {
        let store = store.clone();
        async move {
            let job = IngestJob::new(IngestConfig::from_env(), Box::new(OpenMeteoArchive::new()), Box::new(store));
            Ok::<_, lambda_runtime::Error>(job.invoke().await)
        }
    }))
    .await
    .map_err(|e| anyhow!("Lambda runtime stopped: {e}"))
}

async fn run_once(month: Option<QueryWindow>) -> anyhow::Result<()> {
    let mut config = IngestConfig::from_env();
    if let Some(window) = month {
        config = config.with_window(window);
    }

    let job = IngestJob::new(config, Box::new(OpenMeteoArchive::new()), Box::new(S3ObjectStore::from_env().await));
    let result = job.invoke().await;

    println!("{}", serde_json::to_string(&result)?);

    match result {
        InvocationResult::Success => Ok(()),
        InvocationResult::Error { message } => Err(anyhow!(message)),
    }
}
