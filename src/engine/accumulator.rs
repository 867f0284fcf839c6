use super::{CellId, Grid, LivingCells};
use ahash::AHashMap;

/// Living-neighbor counts of every cell that may change in the next
/// generation.
///
/// A cell has an entry iff it is alive or touches an alive cell; the entry is
/// the number of its alive neighbors, the cell itself excluded.
pub struct NeighborAccumulator {
    counts: AHashMap<CellId, u8>,
}

impl NeighborAccumulator {
    pub fn build(grid: &Grid, living: &LivingCells) -> Self {
        let capacity = living
            .count()
            .saturating_mul(9)
            .min(grid.cell_count() as usize);
        let mut counts = AHashMap::with_capacity(capacity);
        for id in living.iter() {
            counts.entry(id).or_insert(0);
            for neighbor in grid.neighbors(id) {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, id: CellId) -> Option<u8> {
        self.counts.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, u8)> + '_ {
        self.counts.iter().map(|(&id, &n)| (id, n))
    }
}
