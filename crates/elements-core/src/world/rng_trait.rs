//! RNG trait abstraction for the grid simulation
//!
//! Allows the grid to work with both:
//! - a seeded generator owned by the simulation driver
//! - scripted sequences in tests

use elements_simulation::PALETTE_SIZE;

/// Random number source for spawning and stepping the grid
pub trait GridRng {
    /// Generate 0 or 1 with equal probability
    fn coin_flip(&mut self) -> i32;

    /// Generate an integer in `[min, max)`; `min` must be less than `max`
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// Pick one of the palette entries for a freshly spawned cell
    fn palette_index(&mut self) -> usize {
        self.range(0, PALETTE_SIZE as i32) as usize
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> GridRng for T {
    fn coin_flip(&mut self) -> i32 {
        rand::Rng::gen_range(self, 0..2)
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        rand::Rng::gen_range(self, min..max)
    }
}
