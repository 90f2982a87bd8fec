pub mod check;
pub mod controller;
pub mod grid;
pub mod loader;
pub mod navigate;
pub mod placement;
pub mod select;
