use anyhow::{Context, Result};
use clap::Parser;
use stocknews_bucket::{S3BucketStore, S3Config};
use stocknews_core::{handler, JobConfig};
use tracing_subscriber::EnvFilter;

/// One-shot stock news preprocessing job: merges cleaned news headlines with
/// price history and writes the result to the destination bucket.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bucket holding stocks_news.csv and stocks_hist.csv. Falls back to
    /// SOURCE_BUCKET_NAME.
    #[arg(long)]
    source_bucket: Option<String>,

    /// Bucket the merged table is written to. Falls back to
    /// DESTINATION_BUCKET_NAME.
    #[arg(long)]
    destination_bucket: Option<String>,

    /// IANA time zone for epoch conversion, e.g. America/New_York. Falls back
    /// to STOCKNEWS_TIMEZONE, then UTC.
    #[arg(long)]
    timezone: Option<String>,

    /// AWS region for the storage client.
    #[arg(long)]
    region: Option<String>,

    /// Custom S3 endpoint, e.g. a local MinIO instance.
    #[arg(long)]
    endpoint: Option<String>,

    /// Use path-style addressing (required by most S3-compatible servers).
    #[arg(long)]
    force_path_style: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let source_bucket = cli
        .source_bucket
        .or_else(|| std::env::var("SOURCE_BUCKET_NAME").ok())
        .context("SOURCE_BUCKET_NAME (or --source-bucket) must be set")?;
    let destination_bucket = cli
        .destination_bucket
        .or_else(|| std::env::var("DESTINATION_BUCKET_NAME").ok())
        .context("DESTINATION_BUCKET_NAME (or --destination-bucket) must be set")?;
    let timezone = cli
        .timezone
        .or_else(|| std::env::var("STOCKNEWS_TIMEZONE").ok());

    let config = JobConfig::new(source_bucket, destination_bucket, timezone.as_deref())?;

    let s3_config = S3Config {
        region: cli
            .region
            .or_else(|| std::env::var("AWS_REGION").ok())
            .unwrap_or_else(|| S3Config::default().region),
        endpoint: cli
            .endpoint
            .or_else(|| std::env::var("STOCKNEWS_S3_ENDPOINT").ok()),
        access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
        secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
        force_path_style: cli.force_path_style,
    };
    let store = S3BucketStore::new(s3_config)
        .await
        .context("failed to construct the S3 client")?;

    let response = handler::run_job(&store, &config).await;
    println!("{}", serde_json::to_string(&response)?);

    if response.status_code != 200 {
        std::process::exit(1);
    }
    Ok(())
}
