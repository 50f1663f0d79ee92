//! Material kinds and color palettes

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of color variants per material
pub const PALETTE_SIZE: usize = 4;

/// Color variants a spawned cell picks from
pub type Palette = [Color; PALETTE_SIZE];

const SAND_PALETTE: Palette = [
    Color::new(237, 200, 85),
    Color::new(242, 209, 107),
    Color::new(230, 198, 101),
    Color::new(232, 194, 74),
];

const WATER_PALETTE: Palette = [
    Color::new(0, 153, 255),
    Color::new(14, 143, 230),
    Color::new(28, 150, 232),
    Color::new(5, 144, 237),
];

/// The substance a cell holds, which decides how it moves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaterialKind {
    /// Nothing here; other materials move into it
    #[default]
    Empty = 0,
    /// Falls, piles up, slides off diagonally
    Sand = 1,
    /// Falls, spreads sideways, mixes with other water
    Water = 2,
}

impl MaterialKind {
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Empty => "empty",
            MaterialKind::Sand => "sand",
            MaterialKind::Water => "water",
        }
    }

    /// Colors a fresh cell of this material is drawn from, `None` for empty
    pub fn palette(self) -> Option<&'static Palette> {
        match self {
            MaterialKind::Empty => None,
            MaterialKind::Sand => Some(&SAND_PALETTE),
            MaterialKind::Water => Some(&WATER_PALETTE),
        }
    }

    /// Whether spawn requests accept this material
    pub fn is_spawnable(self) -> bool {
        self.palette().is_some()
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
