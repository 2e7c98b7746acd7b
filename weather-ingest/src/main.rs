//! Binary crate for the `weather-ingest` job.
//!
//! This crate focuses on:
//! - Serving the job under the AWS Lambda runtime
//! - Running a single invocation locally from a shell

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let cmd = cli::Cli::parse();
    cmd.run().await
}
