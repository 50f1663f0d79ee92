//! Immutable grid copies for rendering off the simulation thread

use std::sync::Arc;

use elements_simulation::Cell;

use super::GridView;

/// A frozen copy of the grid taken between steps
///
/// Cheap to clone and `Send + Sync`, so one thread can keep stepping the
/// live grid while another draws the last finished frame.
#[derive(Clone, Debug)]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    cells: Arc<[Cell]>,
}

impl GridSnapshot {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells: cells.into(),
        }
    }
}

impl GridView for GridSnapshot {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Grid, NoopStats};
    use elements_simulation::MaterialKind;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_snapshot_is_detached_from_grid() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut grid = Grid::new(12, 12).unwrap();
        grid.spawn(6, 2, MaterialKind::Sand, &mut rng);

        let snapshot = grid.snapshot();
        grid.step(&mut rng, &mut NoopStats);

        assert_eq!(snapshot.get(6, 2).unwrap().material, MaterialKind::Sand);
        assert_eq!(grid.get(6, 2).unwrap().material, MaterialKind::Empty);
        assert_eq!(snapshot.width(), 12);
        assert_eq!(snapshot.height(), 12);
    }

    #[test]
    fn test_snapshot_crosses_threads() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let mut grid = Grid::new(8, 8).unwrap();
        grid.spawn(3, 3, MaterialKind::Water, &mut rng);
        let snapshot = grid.snapshot();

        let handle = std::thread::spawn(move || snapshot.count(MaterialKind::Water));
        assert_eq!(handle.join().unwrap(), 1);
    }
}
