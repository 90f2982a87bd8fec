pub mod clue_list;
pub mod grid_view;
pub mod menu;
