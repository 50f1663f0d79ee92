//! # Elements - headless falling-sand runner
//!
//! Drives the grid simulation from scripted emitters instead of a mouse,
//! then writes the final frame out as an image.

pub mod config;
pub mod headless;

pub use config::ElementsConfig;
pub use headless::{HeadlessRunner, InputScript, RunReport};

/// Common imports for internal use
pub mod prelude {
    pub use elements_core::tools::{Tool, ToolKind};
    pub use elements_core::world::{Grid, GridRng, GridView, StepStats};
    pub use elements_core::{Cell, Color, MaterialKind, Simulation};
    pub use glam::IVec2;
}
