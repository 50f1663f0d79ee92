//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// The updater reports every cell movement through this trait so hosts can
/// count activity without the grid keeping counters of its own.
pub trait SimStats {
    /// Record that a cell moved into an empty slot
    fn record_cell_moved(&mut self);

    /// Record that two water cells exchanged places
    fn record_cell_swapped(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_moved(&mut self) {}
    fn record_cell_swapped(&mut self) {}
}

/// Counters for a single step (or an accumulated run)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub moved: u64,
    pub swapped: u64,
}

impl StepStats {
    /// Whether anything changed position during the step
    pub fn is_idle(&self) -> bool {
        self.moved == 0 && self.swapped == 0
    }
}

impl SimStats for StepStats {
    fn record_cell_moved(&mut self) {
        self.moved += 1;
    }

    fn record_cell_swapped(&mut self) {
        self.swapped += 1;
    }
}

impl std::ops::AddAssign for StepStats {
    fn add_assign(&mut self, other: Self) {
        self.moved += other.moved;
        self.swapped += other.swapped;
    }
}
