use chrono_tz::Tz;

use crate::error::{PipelineError, Result};

/// Everything one run needs, resolved by the caller and passed in explicitly.
///
/// The epoch-to-calendar conversion uses `timezone` rather than whatever zone
/// the host happens to run in, so the same inputs produce the same output in
/// every deployment region.
#[derive(Debug, Clone)]
pub struct JobConfig {
    pub source_bucket: String,
    pub destination_bucket: String,
    pub timezone: Tz,
}

impl JobConfig {
    pub fn new(
        source_bucket: impl Into<String>,
        destination_bucket: impl Into<String>,
        timezone: Option<&str>,
    ) -> Result<Self> {
        let timezone = match timezone {
            Some(raw) => raw
                .parse::<Tz>()
                .map_err(|_| PipelineError::Config(format!("unknown timezone '{raw}'")))?,
            None => Tz::UTC,
        };

        Ok(Self {
            source_bucket: source_bucket.into(),
            destination_bucket: destination_bucket.into(),
            timezone,
        })
    }
}
