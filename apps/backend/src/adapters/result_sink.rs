use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::RoundResult;
use crate::error::AppError;

/// Where a finished round ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedResult {
    pub path: PathBuf,
}

/// Destination for finished rounds.
///
/// Implementations are called off the engine lock and their failures are
/// only logged, so a slow or broken sink never blocks gameplay.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn persist(&self, result: &RoundResult) -> Result<PersistedResult, AppError>;
}
