//! Adapters for persisting finished rounds.

pub mod result_sink;
pub mod results_fs;

pub use result_sink::{PersistedResult, ResultSink};
pub use results_fs::JsonFileResultSink;
