use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::config::Config;
use crate::puzzle::controller::GridController;
use crate::puzzle::loader::Puzzle;
use crate::ui::components::menu::{Menu, MenuItem};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Puzzle,
    Solved,
}

#[derive(Clone, Debug)]
pub enum PuzzleSource {
    Bundled(String),
    File(PathBuf),
}

impl PuzzleSource {
    fn load(&self) -> Result<Puzzle, crate::puzzle::loader::PuzzleError> {
        match self {
            PuzzleSource::Bundled(name) => Puzzle::load_bundled(name),
            PuzzleSource::File(path) => Puzzle::load_file(path),
        }
    }
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub menu: Menu<'static>,
    pub sources: Vec<PuzzleSource>,
    pub controller: Option<GridController>,
    pub puzzle_title: String,
    pub current: Option<PuzzleSource>,
    /// Where the grid was last drawn; mouse clicks are hit-tested against it.
    pub grid_area: Rect,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let mut app = Self {
            screen: AppScreen::Menu,
            config,
            theme,
            menu: Menu::new(theme, Vec::new()),
            sources: Vec::new(),
            controller: None,
            puzzle_title: String::new(),
            current: None,
            grid_area: Rect::default(),
            status: None,
            should_quit: false,
        };
        app.rebuild_sources();
        app
    }

    /// Rebuild the menu from the bundled puzzles plus any configured file
    /// path, preselecting the configured puzzle.
    pub fn rebuild_sources(&mut self) {
        let mut sources = Vec::new();
        let mut items = Vec::new();

        for name in Puzzle::bundled_names() {
            let (label, description) = match Puzzle::load_bundled(&name) {
                Ok(p) => (
                    p.title,
                    format!("{} words, {}x{}", p.answers.len(), p.size, p.size),
                ),
                Err(e) => (name.clone(), format!("unavailable: {e}")),
            };
            items.push(MenuItem { label, description });
            sources.push(PuzzleSource::Bundled(name));
        }

        if self.config.puzzle.ends_with(".toml") {
            let path = PathBuf::from(&self.config.puzzle);
            items.push(MenuItem {
                label: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| self.config.puzzle.clone()),
                description: self.config.puzzle.clone(),
            });
            sources.push(PuzzleSource::File(path));
        }

        let selected = sources
            .iter()
            .position(|s| match s {
                PuzzleSource::Bundled(name) => *name == self.config.puzzle,
                PuzzleSource::File(_) => self.config.puzzle.ends_with(".toml"),
            })
            .unwrap_or(0);

        self.menu = Menu::new(self.theme, items);
        self.menu.selected = selected;
        self.sources = sources;
    }

    pub fn start_selected(&mut self) {
        if let Some(source) = self.sources.get(self.menu.selected).cloned() {
            self.start_puzzle(source);
        }
    }

    pub fn start_puzzle(&mut self, source: PuzzleSource) {
        match source.load() {
            Ok(puzzle) => {
                self.controller = Some(GridController::new(puzzle.size, puzzle.answers));
                self.puzzle_title = puzzle.title;
                self.current = Some(source);
                self.status = None;
                self.screen = AppScreen::Puzzle;
            }
            Err(e) => {
                self.status = Some(format!("Could not load puzzle: {e}"));
                self.screen = AppScreen::Menu;
            }
        }
    }

    pub fn restart(&mut self) {
        if let Some(source) = self.current.clone() {
            self.start_puzzle(source);
        }
    }

    pub fn go_to_menu(&mut self) {
        self.screen = AppScreen::Menu;
        self.controller = None;
        self.puzzle_title.clear();
        self.status = None;
    }

    /// Flip to the solved screen once every placement checks out.
    pub fn check_solved(&mut self) {
        if self
            .controller
            .as_ref()
            .is_some_and(|c| c.is_solved())
        {
            self.screen = AppScreen::Solved;
        }
    }
}
