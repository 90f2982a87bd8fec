use std::collections::HashSet;

use crate::puzzle::placement::{Coord, Direction};

/// Compute the next focus target from `from`: one column over for across,
/// one row over for down, sense chosen by `forward`. Returns `None` when the
/// candidate is off-grid or not a playable cell; the caller leaves focus
/// where it is. The active set only contains in-bounds coordinates, so
/// membership doubles as the bounds check on the high side.
pub fn move_focus(
    from: Coord,
    direction: Direction,
    forward: bool,
    active: &HashSet<Coord>,
) -> Option<Coord> {
    let candidate = match (direction, forward) {
        (Direction::Across, true) => Coord::new(from.row, from.col + 1),
        (Direction::Across, false) => Coord::new(from.row, from.col.checked_sub(1)?),
        (Direction::Down, true) => Coord::new(from.row + 1, from.col),
        (Direction::Down, false) => Coord::new(from.row.checked_sub(1)?, from.col),
    };
    active.contains(&candidate).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::placement::{Placement, active_cells};

    fn active_for(word: &str, direction: Direction) -> HashSet<Coord> {
        active_cells(&[Placement {
            row: 0,
            col: 0,
            word: word.to_string(),
            direction,
            clue: String::new(),
        }])
    }

    #[test]
    fn test_forward_across() {
        let active = active_for("CAT", Direction::Across);
        assert_eq!(
            move_focus(Coord::new(0, 0), Direction::Across, true, &active),
            Some(Coord::new(0, 1))
        );
    }

    #[test]
    fn test_backward_down() {
        let active = active_for("CAT", Direction::Down);
        assert_eq!(
            move_focus(Coord::new(2, 0), Direction::Down, false, &active),
            Some(Coord::new(1, 0))
        );
    }

    #[test]
    fn test_left_edge_is_noop() {
        let active = active_for("CAT", Direction::Across);
        assert_eq!(
            move_focus(Coord::new(0, 0), Direction::Across, false, &active),
            None
        );
    }

    #[test]
    fn test_top_edge_is_noop() {
        let active = active_for("CAT", Direction::Down);
        assert_eq!(
            move_focus(Coord::new(0, 0), Direction::Down, false, &active),
            None
        );
    }

    #[test]
    fn test_past_word_end_is_noop() {
        let active = active_for("CAT", Direction::Across);
        assert_eq!(
            move_focus(Coord::new(0, 2), Direction::Across, true, &active),
            None
        );
    }

    #[test]
    fn test_into_inactive_cell_is_noop() {
        let active = active_for("CAT", Direction::Across);
        assert_eq!(
            move_focus(Coord::new(0, 1), Direction::Down, true, &active),
            None
        );
    }
}
