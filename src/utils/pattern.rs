use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern has no cells")]
    Empty,
    #[error("row {row} has {len} cells, expected {width}")]
    RaggedRow { row: usize, len: usize, width: usize },
    #[error("invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("missing `x = .., y = ..` header line")]
    MissingHeader,
    #[error("unexpected symbol {symbol:?} at byte {offset}")]
    UnexpectedSymbol { symbol: char, offset: usize },
    #[error("a {width}x{height} pattern has too many cells")]
    TooLarge { width: usize, height: usize },
    #[error("pattern overflows its declared {width}x{height} bounds")]
    OutOfBounds { width: usize, height: usize },
}

/// Rectangular matrix of dead and alive cells, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Builds a pattern from rows of `0` and `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, PatternError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(PatternError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(PatternError::RaggedRow {
                    row,
                    len: values.len(),
                    width,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(PatternError::InvalidCell { row, col, value }),
                }
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Parses the Run Length Encoded format.
    pub fn from_rle(data: &str) -> Result<Self, PatternError> {
        let (width, height, cells) = super::parse_rle(data.as_bytes())?;
        if width == 0 || height == 0 {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    /// Coordinates of the alive cells, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pattern {}x{}", self.width, self.height)?;
        for row in self.cells.chunks(self.width) {
            let line = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
