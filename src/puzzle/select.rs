use std::collections::{HashMap, HashSet};

use crate::puzzle::placement::{Coord, Direction, Placement};

/// What a cell click resolved to. `highlighted` is always the full span of
/// the placement matching `direction` among `selected`, or empty when nothing
/// resolves; `active_clue` follows the same placement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub selected: Vec<usize>,
    pub direction: Option<Direction>,
    pub highlighted: HashSet<Coord>,
    pub active_clue: Option<String>,
}

/// Resolve a click on `coord`.
///
/// One covering placement fixes the direction to its own. Two (an
/// intersection) toggle away from `prev_direction`, so repeated clicks cycle
/// between the crossing words; a first click with no prior direction treats
/// the previous direction as across and therefore picks the down word. Zero
/// covering placements (an inactive cell) clear everything.
pub fn select_cell(
    coord: Coord,
    prev_direction: Option<Direction>,
    index: &HashMap<Coord, Vec<usize>>,
    placements: &[Placement],
) -> SelectionState {
    let selected = index.get(&coord).cloned().unwrap_or_default();

    let direction = match selected.as_slice() {
        [] => None,
        [only] => Some(placements[*only].direction),
        _ => Some(prev_direction.unwrap_or(Direction::Across).toggled()),
    };

    let active = direction.and_then(|d| {
        selected
            .iter()
            .copied()
            .find(|&i| placements[i].direction == d)
    });

    let (highlighted, active_clue) = match active {
        Some(i) => (
            placements[i].span().collect(),
            Some(placements[i].clue.clone()),
        ),
        None => (HashSet::new(), None),
    };

    SelectionState {
        selected,
        direction,
        highlighted,
        active_clue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::placement::reverse_index;

    fn crossing() -> Vec<Placement> {
        vec![
            Placement {
                row: 2,
                col: 0,
                word: "ACROSS5".to_string(),
                direction: Direction::Across,
                clue: "The across one".to_string(),
            },
            Placement {
                row: 0,
                col: 2,
                word: "DOWN3".to_string(),
                direction: Direction::Down,
                clue: "The down one".to_string(),
            },
        ]
    }

    #[test]
    fn test_single_word_cell_selects_its_direction() {
        let placements = crossing();
        let index = reverse_index(&placements);
        let state = select_cell(Coord::new(2, 5), None, &index, &placements);
        assert_eq!(state.direction, Some(Direction::Across));
        assert_eq!(state.selected, vec![0]);
        assert_eq!(state.active_clue.as_deref(), Some("The across one"));
        assert_eq!(state.highlighted.len(), 7);
        assert!(state.highlighted.contains(&Coord::new(2, 0)));
        assert!(state.highlighted.contains(&Coord::new(2, 6)));
    }

    #[test]
    fn test_first_click_on_intersection_picks_down() {
        // No prior direction: the toggle treats "across" as previous.
        let placements = crossing();
        let index = reverse_index(&placements);
        let state = select_cell(Coord::new(2, 2), None, &index, &placements);
        assert_eq!(state.direction, Some(Direction::Down));
        assert_eq!(state.active_clue.as_deref(), Some("The down one"));
        assert_eq!(state.highlighted.len(), 5);
        assert!(state.highlighted.contains(&Coord::new(0, 2)));
        assert!(state.highlighted.contains(&Coord::new(4, 2)));
    }

    #[test]
    fn test_repeated_clicks_on_intersection_cycle() {
        let placements = crossing();
        let index = reverse_index(&placements);
        let first = select_cell(Coord::new(2, 2), None, &index, &placements);
        let second = select_cell(Coord::new(2, 2), first.direction, &index, &placements);
        let third = select_cell(Coord::new(2, 2), second.direction, &index, &placements);
        assert_eq!(first.direction, Some(Direction::Down));
        assert_eq!(second.direction, Some(Direction::Across));
        assert_eq!(third.direction, Some(Direction::Down));
        assert_eq!(second.active_clue.as_deref(), Some("The across one"));
        assert!(second.highlighted.contains(&Coord::new(2, 6)));
        assert!(!second.highlighted.contains(&Coord::new(0, 2)));
    }

    #[test]
    fn test_inactive_cell_clears_selection() {
        let placements = crossing();
        let index = reverse_index(&placements);
        let state = select_cell(
            Coord::new(9, 9),
            Some(Direction::Across),
            &index,
            &placements,
        );
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_single_word_cell_ignores_previous_direction() {
        let placements = crossing();
        let index = reverse_index(&placements);
        let state = select_cell(
            Coord::new(1, 2),
            Some(Direction::Down),
            &index,
            &placements,
        );
        assert_eq!(state.direction, Some(Direction::Down));
        assert_eq!(state.selected, vec![1]);
    }
}
