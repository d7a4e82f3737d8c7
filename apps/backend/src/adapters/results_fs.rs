use std::path::PathBuf;

use async_trait::async_trait;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::debug;

use super::result_sink::{PersistedResult, ResultSink};
use crate::domain::RoundResult;
use crate::error::AppError;

/// Writes each finished round as a pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileResultSink {
    dir: PathBuf,
}

impl JsonFileResultSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `game_result_<YYYYMMDD_HHMMSS>_<nanos>.json`, keyed by completion time.
    pub fn file_name_for(end: OffsetDateTime) -> Result<String, AppError> {
        let stamp = end
            .format(format_description!("[year][month][day]_[hour][minute][second]"))
            .map_err(|e| AppError::internal(format!("timestamp format error: {e}")))?;
        Ok(format!("game_result_{stamp}_{}.json", end.nanosecond()))
    }
}

#[async_trait]
impl ResultSink for JsonFileResultSink {
    async fn persist(&self, result: &RoundResult) -> Result<PersistedResult, AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(Self::file_name_for(result.end)?);
        let body = serde_json::to_vec_pretty(result)?;
        tokio::fs::write(&path, body).await?;

        debug!(path = %path.display(), "round result written");
        Ok(PersistedResult { path })
    }
}
