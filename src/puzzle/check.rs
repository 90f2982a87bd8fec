use crate::puzzle::grid::Grid;
use crate::puzzle::placement::{Coord, Placement};

/// Indices of placements whose every covered cell currently holds the
/// matching letter. An unfilled cell never matches. Recomputed from scratch
/// after each grid mutation; cheap at crossword sizes.
pub fn evaluate(grid: &Grid, placements: &[Placement]) -> Vec<usize> {
    placements
        .iter()
        .enumerate()
        .filter(|(_, p)| placement_correct(grid, p))
        .map(|(i, _)| i)
        .collect()
}

fn placement_correct(grid: &Grid, placement: &Placement) -> bool {
    placement
        .word
        .chars()
        .zip(placement.span())
        .all(|(expected, coord)| {
            grid.get(coord)
                .is_some_and(|ch| ch.eq_ignore_ascii_case(&expected))
        })
}

/// Whether `coord` lies on the span of at least one correct placement.
pub fn is_cell_correct(coord: Coord, correct: &[usize], placements: &[Placement]) -> bool {
    correct.iter().any(|&i| placements[i].covers(coord))
}
