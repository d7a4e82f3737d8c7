use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::services::RoundEngine;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The live round.
    pub engine: Arc<RoundEngine>,
    /// Gameplay settings the engine was built with.
    pub game: GameConfig,
}

impl AppState {
    pub fn new(engine: Arc<RoundEngine>, game: GameConfig) -> Self {
        Self { engine, game }
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }
}
