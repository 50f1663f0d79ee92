//! Cell types
//!
//! Foundational types for the grid simulation.

use crate::MaterialKind;
use serde::{Deserialize, Serialize};

/// 8-bit RGB display color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA bytes for pixel buffers
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// A single cell in the grid
///
/// The color travels with the cell when it moves, so two sand cells next to
/// each other keep their individual tints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub material: MaterialKind,
    pub color: Color,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        material: MaterialKind::Empty,
        color: Color::BLACK,
    };

    pub fn new(material: MaterialKind, color: Color) -> Self {
        Self { material, color }
    }

    pub fn is_empty(&self) -> bool {
        self.material == MaterialKind::Empty
    }
}
