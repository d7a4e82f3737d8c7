use std::sync::Arc;

use crate::adapters::{JsonFileResultSink, ResultSink};
use crate::config::game::GameConfig;
use crate::services::RoundEngine;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    game: GameConfig,
    sink: Option<Arc<dyn ResultSink>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            game: GameConfig::default(),
            sink: None,
        }
    }

    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn with_result_sink(mut self, sink: Arc<dyn ResultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Without an explicit sink, results go to `game.results_dir` as JSON.
    pub fn build(self) -> AppState {
        let sink: Arc<dyn ResultSink> = match self.sink {
            Some(sink) => sink,
            None => Arc::new(JsonFileResultSink::new(&self.game.results_dir)),
        };
        let engine = Arc::new(RoundEngine::new(&self.game, sink));
        AppState::new(engine, self.game)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
