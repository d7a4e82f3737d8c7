//! Services that own the live round and drive it over time.

pub mod idle_sweeper;
pub mod round_engine;

pub use idle_sweeper::spawn_idle_sweeper;
pub use round_engine::{GuessReply, RoundEngine};
