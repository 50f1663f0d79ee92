//! Cellular automata update logic - sand and water movement

use elements_simulation::{Cell, MaterialKind};

use super::{Grid, GridRng, GridView, SimStats};

/// Rows a cell tries to fall on its first attempt each step
pub const MAX_VELOCITY: i32 = 2;

/// Lower bound (inclusive) of the sideways jitter water draws per attempt
pub const WATER_JITTER_MIN: i32 = -4;

/// Upper bound (exclusive) of the sideways jitter water draws per attempt
pub const WATER_JITTER_MAX: i32 = 3;

/// Cellular automata updater - handles material movement physics
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Run one full pass over the grid
    ///
    /// Rows are visited bottom to top and each row right to left. Falling
    /// cells always land in a row that was already visited, so nothing falls
    /// twice in one step.
    pub fn step<R: GridRng>(grid: &mut Grid, rng: &mut R, stats: &mut dyn SimStats) {
        let width = grid.width();
        let height = grid.height();

        for y in (0..height).rev() {
            for x in (0..width).rev() {
                let material = grid.cells()[y * width + x].material;
                let (x, y) = (x as i32, y as i32);
                match material {
                    MaterialKind::Empty => {}
                    MaterialKind::Sand => Self::update_sand(grid, x, y, rng, stats),
                    MaterialKind::Water => Self::update_water(grid, x, y, rng, stats),
                }
            }
        }
    }

    /// Update sand (falls straight, else slides diagonally)
    pub fn update_sand<R: GridRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        for v in (1..=MAX_VELOCITY).rev() {
            let dx = rng.coin_flip();
            if !Self::can_fall(grid, x, y, v) {
                continue;
            }

            if Self::try_move(grid, x, y, x, y + v, stats) {
                break;
            }
            // Sliding right does not end the attempt; the slower velocity
            // still runs against the now empty source cell.
            if Self::try_move(grid, x, y, x + dx, y + v, stats) {
                continue;
            }
            if Self::try_move(grid, x, y, x - dx, y + v, stats) {
                break;
            }
        }
    }

    /// Update water (falls, spills diagonally, spreads, mixes)
    pub fn update_water<R: GridRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        for v in (1..=MAX_VELOCITY).rev() {
            let jitter = rng.range(WATER_JITTER_MIN, WATER_JITTER_MAX);
            if !Self::can_fall(grid, x, y, v) {
                continue;
            }

            if Self::try_move(grid, x, y, x, y + v, stats)
                || Self::try_move(grid, x, y, x + v, y + v, stats)
                || Self::try_move(grid, x, y, x - v, y + v, stats)
                || Self::try_move(grid, x, y, x + jitter, y, stats)
            {
                break;
            }

            if jitter != 0 && Self::try_swap(grid, x, y, x + jitter, y + jitter, stats) {
                break;
            }
        }
    }

    /// Whether a cell at (x, y) may attempt to move at velocity `v`
    fn can_fall(grid: &Grid, x: i32, y: i32, v: i32) -> bool {
        y + v < grid.height() as i32 && x + v < grid.width() as i32 && x - v > 0
    }

    /// Try to move a cell into an empty slot
    /// Returns true if the move succeeded
    fn try_move(
        grid: &mut Grid,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        stats: &mut dyn SimStats,
    ) -> bool {
        let (Some(src), Some(dst)) = (grid.index_of(from_x, from_y), grid.index_of(to_x, to_y))
        else {
            return false;
        };

        let cells = grid.cells_mut();
        if cells[src].is_empty() || !cells[dst].is_empty() {
            return false;
        }

        cells[dst] = cells[src];
        cells[src] = Cell::EMPTY;
        stats.record_cell_moved();
        true
    }

    /// Try to exchange a cell with a water cell
    /// Returns true if the swap happened
    fn try_swap(
        grid: &mut Grid,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        stats: &mut dyn SimStats,
    ) -> bool {
        let (Some(src), Some(dst)) = (grid.index_of(from_x, from_y), grid.index_of(to_x, to_y))
        else {
            return false;
        };

        let cells = grid.cells_mut();
        if src == dst || cells[dst].material != MaterialKind::Water {
            return false;
        }

        cells.swap(src, dst);
        stats.record_cell_swapped();
        true
    }
}
