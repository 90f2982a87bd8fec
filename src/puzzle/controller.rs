use std::collections::{HashMap, HashSet};

use crate::puzzle::check;
use crate::puzzle::grid::Grid;
use crate::puzzle::navigate;
use crate::puzzle::placement::{self, Coord, Direction, Placement};
use crate::puzzle::select::{self, SelectionState};

/// The grid state machine. Owns the letter grid, the cursor, and the current
/// selection; the placement list and its derived indexes are fixed at
/// construction. Every user event maps to one method that runs to
/// completion, and the UI reads back through the query methods.
pub struct GridController {
    placements: Vec<Placement>,
    active: HashSet<Coord>,
    index: HashMap<Coord, Vec<usize>>,
    grid: Grid,
    selection: SelectionState,
    correct: Vec<usize>,
    cursor: Coord,
}

impl GridController {
    /// Precondition: placements fit inside a `size` x `size` grid and carry
    /// non-empty words (the loader rejects anything else).
    pub fn new(size: usize, placements: Vec<Placement>) -> Self {
        let active = placement::active_cells(&placements);
        let index = placement::reverse_index(&placements);
        // Start on the first playable cell in reading order.
        let cursor = active.iter().copied().min().unwrap_or(Coord::new(0, 0));
        Self {
            placements,
            active,
            index,
            grid: Grid::new(size),
            selection: SelectionState::default(),
            correct: Vec::new(),
            cursor,
        }
    }

    /// A click (or direction toggle) on `coord`: resolve the selection, and
    /// move the cursor there if the cell is playable.
    pub fn click(&mut self, coord: Coord) {
        self.selection =
            select::select_cell(coord, self.selection.direction, &self.index, &self.placements);
        if self.active.contains(&coord) {
            self.cursor = coord;
        }
    }

    /// Re-run selection on the cursor cell. On an intersection this swaps
    /// between the across and down word, same as clicking the cell again.
    pub fn toggle_direction(&mut self) {
        self.click(self.cursor);
    }

    /// Type one letter into the cursor cell, then auto-advance along the
    /// selected direction if there is one. Non-letters are ignored.
    pub fn type_char(&mut self, ch: char) {
        if !ch.is_ascii_alphabetic() || !self.active.contains(&self.cursor) {
            return;
        }
        self.set_cell(ch.to_string().as_str());
        if let Some(direction) = self.selection.direction
            && let Some(next) = navigate::move_focus(self.cursor, direction, true, &self.active)
        {
            self.cursor = next;
        }
    }

    /// Backspace: a filled cell is cleared in place; an empty cell moves the
    /// cursor backward along the selected direction instead.
    pub fn backspace(&mut self) {
        if self.grid.is_filled(self.cursor) {
            self.set_cell("");
        } else if let Some(direction) = self.selection.direction
            && let Some(prev) = navigate::move_focus(self.cursor, direction, false, &self.active)
        {
            self.cursor = prev;
        }
    }

    /// Arrow-key movement: always along the arrow's own axis, regardless of
    /// which direction is selected. Off-grid or inactive targets are a no-op.
    pub fn arrow(&mut self, direction: Direction, forward: bool) {
        if let Some(next) = navigate::move_focus(self.cursor, direction, forward, &self.active) {
            self.cursor = next;
        }
    }

    fn set_cell(&mut self, value: &str) {
        self.grid = self.grid.set_cell(self.cursor.row, self.cursor.col, value);
        self.correct = check::evaluate(&self.grid, &self.placements);
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn cell(&self, coord: Coord) -> Option<char> {
        self.grid.get(coord)
    }

    pub fn is_active(&self, coord: Coord) -> bool {
        self.active.contains(&coord)
    }

    pub fn is_correct(&self, coord: Coord) -> bool {
        check::is_cell_correct(coord, &self.correct, &self.placements)
    }

    pub fn is_highlighted(&self, coord: Coord) -> bool {
        self.selection.highlighted.contains(&coord)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.selection.direction
    }

    pub fn active_clue(&self) -> Option<&str> {
        self.selection.active_clue.as_deref()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement_correct(&self, index: usize) -> bool {
        self.correct.contains(&index)
    }

    /// Which placement is the active clue, as an index into `placements`.
    pub fn active_placement(&self) -> Option<usize> {
        let direction = self.selection.direction?;
        self.selection
            .selected
            .iter()
            .copied()
            .find(|&i| self.placements[i].direction == direction)
    }

    pub fn is_solved(&self) -> bool {
        !self.placements.is_empty() && self.correct.len() == self.placements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(row: usize, col: usize, word: &str, direction: Direction, clue: &str) -> Placement {
        Placement {
            row,
            col,
            word: word.to_string(),
            direction,
            clue: clue.to_string(),
        }
    }

    fn cat_controller() -> GridController {
        GridController::new(
            10,
            vec![placement(0, 0, "CAT", Direction::Across, "Feline")],
        )
    }

    #[test]
    fn test_typing_cat_solves_the_word() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        assert_eq!(c.direction(), Some(Direction::Across));
        assert_eq!(c.active_clue(), Some("Feline"));

        c.type_char('C');
        c.type_char('A');
        c.type_char('T');

        assert!(c.placement_correct(0));
        assert!(c.is_correct(Coord::new(0, 0)));
        assert!(c.is_correct(Coord::new(0, 1)));
        assert!(c.is_correct(Coord::new(0, 2)));
        assert!(c.is_solved());
    }

    #[test]
    fn test_wrong_last_letter_leaves_word_incorrect() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.type_char('C');
        c.type_char('A');
        c.type_char('D');
        assert!(!c.placement_correct(0));
        assert!(!c.is_correct(Coord::new(0, 0)));
        assert!(!c.is_solved());
    }

    #[test]
    fn test_typing_auto_advances_along_selection() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.type_char('C');
        assert_eq!(c.cursor(), Coord::new(0, 1));
        c.type_char('A');
        c.type_char('T');
        // Past the word end the cursor stays put.
        assert_eq!(c.cursor(), Coord::new(0, 2));
    }

    #[test]
    fn test_typing_without_selection_does_not_advance() {
        let mut c = cat_controller();
        assert_eq!(c.direction(), None);
        c.type_char('C');
        assert_eq!(c.cursor(), Coord::new(0, 0));
        assert_eq!(c.cell(Coord::new(0, 0)), Some('C'));
    }

    #[test]
    fn test_lowercase_input_is_normalized() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.type_char('c');
        c.type_char('a');
        c.type_char('t');
        assert!(c.is_solved());
        assert_eq!(c.cell(Coord::new(0, 1)), Some('A'));
    }

    #[test]
    fn test_non_letter_input_is_ignored() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.type_char('3');
        c.type_char(' ');
        assert_eq!(c.cell(Coord::new(0, 0)), None);
        assert_eq!(c.cursor(), Coord::new(0, 0));
    }

    #[test]
    fn test_arrow_left_at_origin_is_noop() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.arrow(Direction::Across, false);
        assert_eq!(c.cursor(), Coord::new(0, 0));
    }

    #[test]
    fn test_arrow_moves_regardless_of_selected_direction() {
        let mut c = GridController::new(
            10,
            vec![
                placement(2, 0, "ACROSS5", Direction::Across, ""),
                placement(0, 2, "DOWN3", Direction::Down, ""),
            ],
        );
        c.click(Coord::new(2, 2)); // selects down (first-click default)
        assert_eq!(c.direction(), Some(Direction::Down));
        c.arrow(Direction::Across, true);
        assert_eq!(c.cursor(), Coord::new(2, 3));
    }

    #[test]
    fn test_backspace_on_filled_cell_clears_without_moving() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.type_char('C');
        c.type_char('A');
        // Cursor is on (0,2), which is empty; move it back onto the 'A'.
        c.arrow(Direction::Across, false);
        c.backspace();
        assert_eq!(c.cell(Coord::new(0, 1)), None);
        assert_eq!(c.cursor(), Coord::new(0, 1));
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_backward() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 0));
        c.type_char('C');
        assert_eq!(c.cursor(), Coord::new(0, 1));
        c.backspace(); // (0,1) is empty: move back
        assert_eq!(c.cursor(), Coord::new(0, 0));
        assert_eq!(c.cell(Coord::new(0, 0)), Some('C'));
        c.backspace(); // now clears the 'C' in place
        assert_eq!(c.cell(Coord::new(0, 0)), None);
        assert_eq!(c.cursor(), Coord::new(0, 0));
    }

    #[test]
    fn test_click_inactive_cell_clears_selection_and_keeps_cursor() {
        let mut c = cat_controller();
        c.click(Coord::new(0, 1));
        assert_eq!(c.direction(), Some(Direction::Across));
        c.click(Coord::new(5, 5));
        assert_eq!(c.direction(), None);
        assert_eq!(c.active_clue(), None);
        assert!(!c.is_highlighted(Coord::new(0, 0)));
        assert_eq!(c.cursor(), Coord::new(0, 1));
    }

    #[test]
    fn test_intersection_clicks_cycle_and_rehighlight() {
        let mut c = GridController::new(
            10,
            vec![
                placement(2, 0, "ACROSS5", Direction::Across, "A clue"),
                placement(0, 2, "DOWN3", Direction::Down, "D clue"),
            ],
        );
        c.click(Coord::new(2, 2));
        assert_eq!(c.direction(), Some(Direction::Down));
        assert_eq!(c.active_clue(), Some("D clue"));
        assert!(c.is_highlighted(Coord::new(0, 2)));
        assert!(!c.is_highlighted(Coord::new(2, 0)));

        c.click(Coord::new(2, 2));
        assert_eq!(c.direction(), Some(Direction::Across));
        assert_eq!(c.active_clue(), Some("A clue"));
        assert!(c.is_highlighted(Coord::new(2, 6)));
        assert!(!c.is_highlighted(Coord::new(0, 2)));
    }

    #[test]
    fn test_toggle_direction_matches_reclick() {
        let mut c = GridController::new(
            10,
            vec![
                placement(2, 0, "ACROSS5", Direction::Across, ""),
                placement(0, 2, "DOWN3", Direction::Down, ""),
            ],
        );
        c.click(Coord::new(2, 2));
        c.toggle_direction();
        assert_eq!(c.direction(), Some(Direction::Across));
        assert_eq!(c.active_placement(), Some(0));
    }

    #[test]
    fn test_cursor_starts_on_first_active_cell() {
        let c = GridController::new(10, vec![placement(3, 4, "HI", Direction::Across, "")]);
        assert_eq!(c.cursor(), Coord::new(3, 4));
    }
}
