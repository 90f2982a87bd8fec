use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::puzzle::controller::GridController;
use crate::puzzle::placement::Direction;
use crate::ui::theme::Theme;

pub struct ClueList<'a> {
    controller: &'a GridController,
    theme: &'a Theme,
}

impl<'a> ClueList<'a> {
    pub fn new(controller: &'a GridController, theme: &'a Theme) -> Self {
        Self { controller, theme }
    }

    fn section(&self, direction: Direction) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let active = self.controller.active_placement();

        let mut lines = vec![Line::from(Span::styled(
            match direction {
                Direction::Across => "ACROSS",
                Direction::Down => "DOWN",
            },
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ))];

        for (i, placement) in self.controller.placements().iter().enumerate() {
            if placement.direction != direction {
                continue;
            }
            let is_active = active == Some(i);
            let done = self.controller.placement_correct(i);
            let marker = if done { "x" } else { " " };
            let text = format!(" [{marker}] {}", placement.clue);

            let style = if is_active {
                Style::default()
                    .fg(colors.clue_active())
                    .add_modifier(Modifier::BOLD)
            } else if done {
                Style::default().fg(colors.clue_done())
            } else {
                Style::default().fg(colors.clue_pending())
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        lines
    }
}

impl Widget for ClueList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Clues ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let mut lines = self.section(Direction::Across);
        lines.push(Line::from(""));
        lines.extend(self.section(Direction::Down));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
