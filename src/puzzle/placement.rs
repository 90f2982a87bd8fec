use std::collections::{HashMap, HashSet};

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

/// A grid position: row first, then column, both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One answer word: where it starts, which way it runs, and its clue.
///
/// The loader guarantees a non-empty ASCII-alphabetic `word` whose span fits
/// inside the grid; everything downstream relies on that.
#[derive(Clone, Debug, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub word: String,
    pub direction: Direction,
    pub clue: String,
}

impl Placement {
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Coordinates covered by this word, in word order.
    pub fn span(&self) -> impl Iterator<Item = Coord> + '_ {
        let Placement { row, col, direction, .. } = *self;
        (0..self.len()).map(move |i| match direction {
            Direction::Across => Coord::new(row, col + i),
            Direction::Down => Coord::new(row + i, col),
        })
    }

    pub fn covers(&self, coord: Coord) -> bool {
        self.span().any(|c| c == coord)
    }
}

/// The set of playable coordinates: the union of all placement spans.
pub fn active_cells(placements: &[Placement]) -> HashSet<Coord> {
    placements.iter().flat_map(|p| p.span()).collect()
}

/// Reverse lookup from coordinate to the placements covering it, as indices
/// into the placement list. Per-coordinate order follows list order, which
/// selection relies on; a well-formed puzzle yields one or two entries per
/// active cell.
pub fn reverse_index(placements: &[Placement]) -> HashMap<Coord, Vec<usize>> {
    let mut index: HashMap<Coord, Vec<usize>> = HashMap::new();
    for (i, placement) in placements.iter().enumerate() {
        for coord in placement.span() {
            index.entry(coord).or_default().push(i);
        }
    }
    index
}
