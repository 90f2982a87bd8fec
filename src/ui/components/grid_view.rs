use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::puzzle::controller::GridController;
use crate::puzzle::placement::Coord;
use crate::ui::theme::Theme;

// Each cell is drawn 3 columns wide with a 1-column gap, and 1 row tall with
// a 1-row gap, so letters stay readable and clicks have a fat target.
pub const CELL_W: u16 = 4;
pub const CELL_H: u16 = 2;

pub struct GridView<'a> {
    controller: &'a GridController,
    theme: &'a Theme,
}

impl<'a> GridView<'a> {
    pub fn new(controller: &'a GridController, theme: &'a Theme) -> Self {
        Self { controller, theme }
    }
}

/// Where the grid lands inside `area`: centered, one `CELL_W` x `CELL_H`
/// block per cell minus the trailing gaps. Render and mouse hit-testing must
/// agree on this rect, so both go through here.
pub fn grid_rect(area: Rect, size: usize) -> Rect {
    let size = size as u16;
    let w = (size * CELL_W).saturating_sub(1).min(area.width);
    let h = (size * CELL_H).saturating_sub(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Map a screen position to the cell under it, if any. The gap column/row
/// after a cell counts as that cell; clicks there land close enough.
pub fn hit_test(grid: Rect, size: usize, x: u16, y: u16) -> Option<Coord> {
    if x < grid.x || y < grid.y || x >= grid.right() || y >= grid.bottom() {
        return None;
    }
    let col = ((x - grid.x) / CELL_W) as usize;
    let row = ((y - grid.y) / CELL_H) as usize;
    (row < size && col < size).then(|| Coord::new(row, col))
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let size = self.controller.size();
        let grid = grid_rect(area, size);

        for row in 0..size {
            for col in 0..size {
                let coord = Coord::new(row, col);
                let x = grid.x + col as u16 * CELL_W;
                let y = grid.y + row as u16 * CELL_H;
                if x + 2 >= area.right() || y >= area.bottom() {
                    continue;
                }

                // Precedence: cursor > correct > highlighted > active > inactive.
                let style = if coord == self.controller.cursor() {
                    Style::default()
                        .fg(colors.cursor_fg())
                        .bg(colors.cursor_bg())
                        .add_modifier(Modifier::BOLD)
                } else if self.controller.is_correct(coord) {
                    Style::default()
                        .fg(colors.cell_correct_fg())
                        .bg(colors.cell_correct_bg())
                } else if self.controller.is_highlighted(coord) {
                    Style::default()
                        .fg(colors.cell_active_fg())
                        .bg(colors.cell_highlight_bg())
                } else if self.controller.is_active(coord) {
                    Style::default()
                        .fg(colors.cell_active_fg())
                        .bg(colors.cell_active_bg())
                } else {
                    Style::default().bg(colors.cell_inactive_bg())
                };

                let letter = if self.controller.is_active(coord) {
                    self.controller.cell(coord).unwrap_or(' ')
                } else {
                    ' '
                };
                buf.set_string(x, y, format!(" {letter} "), style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rect_is_centered_and_sized() {
        let area = Rect::new(0, 0, 80, 30);
        let rect = grid_rect(area, 10);
        assert_eq!(rect.width, 39); // 10 * 4 - 1
        assert_eq!(rect.height, 19); // 10 * 2 - 1
        assert_eq!(rect.x, (80 - 39) / 2);
    }

    #[test]
    fn test_hit_test_maps_cell_origin() {
        let grid = Rect::new(10, 5, 39, 19);
        assert_eq!(hit_test(grid, 10, 10, 5), Some(Coord::new(0, 0)));
        assert_eq!(hit_test(grid, 10, 14, 7), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_hit_test_gap_belongs_to_preceding_cell() {
        let grid = Rect::new(0, 0, 39, 19);
        assert_eq!(hit_test(grid, 10, 3, 0), Some(Coord::new(0, 0)));
        assert_eq!(hit_test(grid, 10, 4, 0), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_hit_test_outside_rect_is_none() {
        let grid = Rect::new(10, 5, 39, 19);
        assert_eq!(hit_test(grid, 10, 9, 5), None);
        assert_eq!(hit_test(grid, 10, 10, 4), None);
        assert_eq!(hit_test(grid, 10, 49, 5), None);
        assert_eq!(hit_test(grid, 10, 10, 24), None);
    }
}
