//! Grid storage and the cellular automaton that moves sand and water

mod ca_update;
mod error;
mod grid;
pub mod rng_trait;
mod snapshot;
pub mod stats;

pub use ca_update::{CellularAutomataUpdater, MAX_VELOCITY, WATER_JITTER_MAX, WATER_JITTER_MIN};
pub use error::GridError;
pub use grid::{Grid, GridView, MAX_DIMENSION};
pub use rng_trait::GridRng;
pub use snapshot::GridSnapshot;
pub use stats::{NoopStats, SimStats, StepStats};
