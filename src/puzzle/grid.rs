use crate::puzzle::placement::Coord;

/// The letter grid: `size` x `size` cells, each holding zero or one uppercase
/// letter. Mutation goes through `set_cell`, which returns a fresh snapshot so
/// correctness evaluation always sees a consistent grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at `coord`, or `None` if the cell is unfilled or out of
    /// bounds.
    pub fn get(&self, coord: Coord) -> Option<char> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.cells[coord.row * self.size + coord.col]
    }

    /// Replace one cell, returning the new grid snapshot.
    ///
    /// `value` is a single typed character or the empty string (clear).
    /// Anything longer is rejected wholesale and the grid comes back
    /// unchanged; a multi-character paste is not truncated to its first
    /// letter. Letters are normalized to uppercase on write.
    pub fn set_cell(&self, row: usize, col: usize, value: &str) -> Grid {
        let mut next = self.clone();
        if row >= self.size || col >= self.size {
            return next;
        }
        let mut chars = value.chars();
        let cell = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(ch), None) => Some(ch.to_ascii_uppercase()),
            (Some(_), Some(_)) => return next,
        };
        next.cells[row * self.size + col] = cell;
        next
    }

    pub fn is_filled(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }
}
