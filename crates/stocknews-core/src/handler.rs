use serde::Serialize;
use stocknews_bucket::BucketStore;
use tracing::{error, info, warn};

use crate::config::JobConfig;
use crate::error::PipelineError;
use crate::pipeline;

pub const SUCCESS_BODY: &str = "Data processing completed and saved to destination bucket!";
pub const MISSING_INPUT_BODY: &str = "CSV files not found in the source bucket.";

/// The structured result handed back to the invoking environment.
#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Runs the pipeline and folds its outcome into the response contract:
/// 200 on success, 400 when either input object is absent, 500 for any other
/// failure with the error's description embedded in the body.
pub async fn run_job(store: &dyn BucketStore, config: &JobConfig) -> JobResponse {
    match pipeline::run(store, config).await {
        Ok(summary) => {
            info!(?summary, "pipeline run complete");
            JobResponse {
                status_code: 200,
                body: SUCCESS_BODY.to_string(),
            }
        }
        Err(PipelineError::MissingInput { key }) => {
            warn!(key, "input object missing; nothing was processed");
            JobResponse {
                status_code: 400,
                body: MISSING_INPUT_BODY.to_string(),
            }
        }
        Err(err) => {
            error!(%err, "pipeline run failed");
            JobResponse {
                status_code: 500,
                body: format!("Error: {err}"),
            }
        }
    }
}
