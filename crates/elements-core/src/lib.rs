pub mod simulation;
pub mod tools;
pub mod world;

pub use simulation::Simulation;

// Re-export from elements-simulation so hosts only need one dependency
pub use elements_simulation::{Cell, Color, MaterialKind, PALETTE_SIZE, Palette};
