//! Material and cell data for the Elements grid simulation
//!
//! This crate provides the foundational data types for the cellular automaton:
//! - Material kinds and their color palettes (MaterialKind, Palette)
//! - Cell types (Cell, Color)

mod cell;
mod materials;

pub use cell::{Cell, Color};
pub use materials::{MaterialKind, PALETTE_SIZE, Palette};
