//! Pen tool for placing a single cell

use glam::IVec2;

use super::Tool;
use crate::world::{Grid, GridRng};
use elements_simulation::MaterialKind;

/// Pen tool that spawns exactly at the cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct PenTool;

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply<R: GridRng>(
        &self,
        grid: &mut Grid,
        cursor: IVec2,
        material: MaterialKind,
        rng: &mut R,
    ) -> usize {
        usize::from(grid.spawn(cursor.x, cursor.y, material, rng))
    }
}
