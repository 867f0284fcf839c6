use super::CellId;
use ahash::AHashSet;

/// Set of alive cells with a cached population.
///
/// This is the only record of cell state; a cell absent from the set is dead.
#[derive(Clone, Debug, Default)]
pub struct LivingCells {
    cells: AHashSet<CellId>,
    count: usize,
}

impl LivingCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self, id: CellId) -> bool {
        self.cells.contains(&id)
    }

    /// Returns `true` if the cell was dead before.
    pub fn birth(&mut self, id: CellId) -> bool {
        let added = self.cells.insert(id);
        if added {
            self.count += 1;
        }
        added
    }

    /// Returns `true` if the cell was alive before.
    pub fn kill(&mut self, id: CellId) -> bool {
        let removed = self.cells.remove(&id);
        if removed {
            self.count -= 1;
        }
        removed
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, id: CellId) -> bool {
        if self.is_alive(id) {
            self.kill(id);
            false
        } else {
            self.birth(id);
            true
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.count = 0;
    }

    /// Alive cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}
