mod app;
mod config;
mod event;
mod puzzle;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use puzzle::placement::Direction;
use ui::components::clue_list::ClueList;
use ui::components::grid_view::{self, GridView};
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "cluegrid", version, about = "Terminal crossword player")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Puzzle: a bundled name or a path to a .toml file")]
    puzzle: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme
        && let Some(theme) = ui::theme::Theme::load(&theme_name)
    {
        let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
        app.theme = theme;
        app.menu.theme = theme;
    }
    if let Some(puzzle) = cli.puzzle {
        app.config.puzzle = puzzle;
        app.rebuild_sources();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Only Press events count as input; Repeat would double letters.
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Puzzle => handle_puzzle_key(app, key),
        AppScreen::Solved => handle_solved_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => app.start_selected(),
        _ => {}
    }
}

fn handle_puzzle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.go_to_menu();
        return;
    }

    let Some(ref mut controller) = app.controller else {
        return;
    };
    match key.code {
        KeyCode::Backspace => controller.backspace(),
        KeyCode::Tab => controller.toggle_direction(),
        KeyCode::Left => controller.arrow(Direction::Across, false),
        KeyCode::Right => controller.arrow(Direction::Across, true),
        KeyCode::Up => controller.arrow(Direction::Down, false),
        KeyCode::Down => controller.arrow(Direction::Down, true),
        KeyCode::Char(ch) => controller.type_char(ch),
        _ => {}
    }
    app.check_solved();
}

fn handle_solved_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.go_to_menu(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.screen != AppScreen::Puzzle {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(ref mut controller) = app.controller
        && let Some(coord) = grid_view::hit_test(
            app.grid_area,
            controller.size(),
            mouse.column,
            mouse.row,
        )
    {
        controller.click(coord);
    }
}

fn render(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Puzzle => render_puzzle(frame, app),
        AppScreen::Solved => render_solved(frame, app),
    }
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let menu_area = ui::layout::centered_rect(50, 80, area);
    frame.render_widget(&app.menu, menu_area);

    let footer_text = match &app.status {
        Some(status) => format!(" {status}"),
        None => " [Enter] Play  [j/k] Select  [q] Quit ".to_string(),
    };
    let footer_style = if app.status.is_some() {
        Style::default().fg(colors.error())
    } else {
        Style::default().fg(colors.clue_pending())
    };
    let footer = Paragraph::new(Line::from(Span::styled(footer_text, footer_style)));
    let footer_area = ratatui::layout::Rect::new(
        area.x,
        area.bottom().saturating_sub(1),
        area.width,
        1,
    );
    frame.render_widget(footer, footer_area);
}

fn render_puzzle(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let Some(ref controller) = app.controller else {
        return;
    };

    let layout = AppLayout::new(area, app.config.show_clues);

    let direction_label = controller
        .direction()
        .map(Direction::as_str)
        .unwrap_or("-");
    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                " cluegrid ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} | {direction_label}", app.puzzle_title),
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg()),
            ),
        ]),
        Line::from(Span::styled(
            match controller.active_clue() {
                Some(clue) => format!(" Clue: {clue}"),
                None => " Click a cell to select a word".to_string(),
            },
            Style::default()
                .fg(colors.clue_active())
                .bg(colors.header_bg()),
        )),
    ];
    let header =
        Paragraph::new(header_lines).style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    // Remember where the grid lands so mouse clicks can be mapped back.
    app.grid_area = grid_view::grid_rect(layout.main, controller.size());
    let grid = GridView::new(controller, app.theme);
    frame.render_widget(grid, layout.main);

    if let Some(sidebar_area) = layout.sidebar {
        let clues = ClueList::new(controller, app.theme);
        frame.render_widget(clues, sidebar_area);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Click] Select  [Tab] Across/Down  [Arrows] Move  [Backspace] Clear  [Esc] Menu ",
        Style::default().fg(colors.clue_pending()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn render_solved(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(40, 40, area);

    let block = Block::bordered()
        .border_style(Style::default().fg(colors.success()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Solved!",
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app.puzzle_title.clone(),
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Play again  [Enter] Menu",
            Style::default().fg(colors.clue_pending()),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
