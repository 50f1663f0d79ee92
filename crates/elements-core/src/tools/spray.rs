//! Spray tool - a burst of jittered spawns above the cursor

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::world::{Grid, GridRng};
use elements_simulation::MaterialKind;

/// Horizontal jitter for one spawn in a spray burst
///
/// The offset is drawn from `[0, |spread|)` and applied to the right for a
/// positive spread, to the left for a negative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JitterTerm {
    pub spread: i32,
}

impl JitterTerm {
    pub const fn new(spread: i32) -> Self {
        Self { spread }
    }

    fn offset<R: GridRng>(&self, rng: &mut R) -> i32 {
        self.spread.signum() * draw_below(self.spread.abs(), rng)
    }
}

/// Draw from `[0, bound)`, treating an empty range as zero
fn draw_below<R: GridRng>(bound: i32, rng: &mut R) -> i32 {
    if bound <= 1 { 0 } else { rng.range(0, bound) }
}

/// Spray tool, spawning one cell per jitter term each application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprayTool {
    pub terms: Vec<JitterTerm>,
    /// Spawns land up to this many rows above the cursor
    pub vertical_spread: i32,
}

impl Default for SprayTool {
    fn default() -> Self {
        Self {
            terms: [2, 4, 6, -6, -3, -2].into_iter().map(JitterTerm::new).collect(),
            vertical_spread: 14,
        }
    }
}

impl Tool for SprayTool {
    fn name(&self) -> &str {
        "Spray"
    }

    fn apply<R: GridRng>(
        &self,
        grid: &mut Grid,
        cursor: IVec2,
        material: MaterialKind,
        rng: &mut R,
    ) -> usize {
        let mut placed = 0;
        for term in &self.terms {
            let x = cursor.x + term.offset(rng);
            let y = cursor.y - draw_below(self.vertical_spread, rng);
            if grid.spawn(x, y, material, rng) {
                placed += 1;
            }
        }
        placed
    }
}
