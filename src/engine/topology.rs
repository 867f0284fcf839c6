/// Identifier of a cell: `y * width + x`.
pub type CellId = u32;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size board whose edges are stitched together.
///
/// Holds no cell state, only the mapping between coordinates and identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// `width` and `height` must be positive.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width >= 1 && height >= 1, "grid must be at least 1x1");
        assert!(
            (width as u64) * (height as u64) <= CellId::MAX as u64,
            "grid has too many cells"
        );
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> u32 {
        self.width * self.height
    }

    /// Converts coordinates into a cell id.
    ///
    /// Each axis wraps by a single step: one past the last column is column 0
    /// and -1 is the last column. Larger deltas are not folded back onto the
    /// board, so callers may only offset a valid coordinate by one cell.
    pub fn cell_id(&self, x: i64, y: i64) -> CellId {
        let x = Self::wrap(x, self.width);
        let y = Self::wrap(y, self.height);
        y * self.width + x
    }

    fn wrap(v: i64, len: u32) -> u32 {
        if v > len as i64 - 1 {
            0
        } else if v < 0 {
            len - 1
        } else {
            v as u32
        }
    }

    pub fn x(&self, id: CellId) -> u32 {
        id % self.width
    }

    pub fn y(&self, id: CellId) -> u32 {
        (id - self.x(id)) / self.width
    }

    /// The eight toroidal neighbors of `id`.
    ///
    /// On boards narrower than three cells some neighbors coincide, and a cell
    /// may even be its own neighbor; they are yielded once per offset.
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        let (x, y) = (self.x(id) as i64, self.y(id) as i64);
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.cell_id(x + dx, y + dy))
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }
}
