//! Fixed-size cell grid

use elements_simulation::{Cell, MaterialKind};

use super::ca_update::CellularAutomataUpdater;
use super::{GridError, GridRng, GridSnapshot, SimStats};

/// Largest accepted width or height; rule coordinates are i32 plus small offsets
pub const MAX_DIMENSION: usize = (i32::MAX / 2) as usize;

/// Read access to a row-major cell buffer
///
/// Implemented by the live [`Grid`] and by [`GridSnapshot`], so renderers can
/// draw from either.
pub trait GridView {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// All cells, indexed `y * width + x`
    fn cells(&self) -> &[Cell];

    /// Cell at (x, y), or `None` outside the grid
    fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.cells().get(y * self.width() + x).copied()
    }

    /// Rows from top (y = 0) to bottom
    fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells().chunks_exact(self.width())
    }

    /// Number of cells holding `material`
    fn count(&self, material: MaterialKind) -> usize {
        self.cells().iter().filter(|c| c.material == material).count()
    }

    /// Number of non-empty cells
    fn occupied(&self) -> usize {
        self.cells().iter().filter(|c| !c.is_empty()).count()
    }
}

/// The simulation grid
///
/// Owns a flat `width * height` buffer of cells. y grows downward, so row 0
/// is the top of the screen and sand falls towards larger y.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid with every cell empty
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let too_large = GridError::TooLarge { width, height };
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(too_large);
        }
        let len = width.checked_mul(height).ok_or(too_large)?;

        log::debug!("Allocating {}x{} grid ({} cells)", width, height, len);

        Ok(Self {
            width,
            height,
            cells: vec![Cell::EMPTY; len],
        })
    }

    /// Buffer index for (x, y), or `None` outside the grid
    pub(crate) fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Overwrite a cell directly, bypassing the spawn margin and palette
    ///
    /// Returns `false` if (x, y) is outside the grid.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Place a freshly colored cell of `material` at (x, y)
    ///
    /// Only the interior `0 < x < width`, `0 < y < height` accepts spawns;
    /// anything else, and any request for `Empty`, is dropped silently.
    /// Returns whether a cell was written.
    pub fn spawn<R: GridRng>(
        &mut self,
        x: i32,
        y: i32,
        material: MaterialKind,
        rng: &mut R,
    ) -> bool {
        if x <= 0 || y <= 0 {
            return false;
        }
        let Some(idx) = self.index_of(x, y) else {
            return false;
        };
        let Some(palette) = material.palette() else {
            return false;
        };

        let color = palette[rng.palette_index() % palette.len()];
        self.cells[idx] = Cell::new(material, color);
        true
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        log::debug!("Clearing {}x{} grid", self.width, self.height);
        self.cells.fill(Cell::EMPTY);
    }

    /// Advance the automaton by one step
    pub fn step<R: GridRng>(&mut self, rng: &mut R, stats: &mut dyn SimStats) {
        CellularAutomataUpdater::step(self, rng, stats);
    }

    /// Owned copy of the current cells, detached from further updates
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.width, self.height, self.cells.clone())
    }
}

impl GridView for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
