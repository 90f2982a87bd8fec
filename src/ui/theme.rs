use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub cell_active_bg: String,
    pub cell_active_fg: String,
    pub cell_inactive_bg: String,
    pub cell_correct_bg: String,
    pub cell_correct_fg: String,
    pub cell_highlight_bg: String,
    pub cursor_bg: String,
    pub cursor_fg: String,
    pub clue_active: String,
    pub clue_done: String,
    pub clue_pending: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub error: String,
    pub success: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("cluegrid")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path)
                && let Ok(theme) = toml::from_str::<Theme>(&content)
            {
                return Some(theme);
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename)
            && let Ok(content) = std::str::from_utf8(file.data.as_ref())
            && let Ok(theme) = toml::from_str::<Theme>(content)
        {
            return Some(theme);
        }

        None
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            cell_active_bg: "#313244".to_string(),
            cell_active_fg: "#cdd6f4".to_string(),
            cell_inactive_bg: "#11111b".to_string(),
            cell_correct_bg: "#2e3d2f".to_string(),
            cell_correct_fg: "#a6e3a1".to_string(),
            cell_highlight_bg: "#45475a".to_string(),
            cursor_bg: "#f5e0dc".to_string(),
            cursor_fg: "#1e1e2e".to_string(),
            clue_active: "#f9e2af".to_string(),
            clue_done: "#a6e3a1".to_string(),
            clue_pending: "#585b70".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            error: "#f38ba8".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn cell_active_bg(&self) -> Color { Self::parse_color(&self.cell_active_bg) }
    pub fn cell_active_fg(&self) -> Color { Self::parse_color(&self.cell_active_fg) }
    pub fn cell_inactive_bg(&self) -> Color { Self::parse_color(&self.cell_inactive_bg) }
    pub fn cell_correct_bg(&self) -> Color { Self::parse_color(&self.cell_correct_bg) }
    pub fn cell_correct_fg(&self) -> Color { Self::parse_color(&self.cell_correct_fg) }
    pub fn cell_highlight_bg(&self) -> Color { Self::parse_color(&self.cell_highlight_bg) }
    pub fn cursor_bg(&self) -> Color { Self::parse_color(&self.cursor_bg) }
    pub fn cursor_fg(&self) -> Color { Self::parse_color(&self.cursor_fg) }
    pub fn clue_active(&self) -> Color { Self::parse_color(&self.clue_active) }
    pub fn clue_done(&self) -> Color { Self::parse_color(&self.clue_done) }
    pub fn clue_pending(&self) -> Color { Self::parse_color(&self.clue_pending) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_valid_hex() {
        assert_eq!(
            ThemeColors::parse_color("#89b4fa"),
            Color::Rgb(0x89, 0xb4, 0xfa)
        );
    }

    #[test]
    fn test_parse_color_invalid_falls_back_to_white() {
        assert_eq!(ThemeColors::parse_color("nonsense"), Color::White);
        assert_eq!(ThemeColors::parse_color("#12"), Color::White);
    }

    #[test]
    fn test_bundled_themes_all_parse() {
        for name in Theme::available_themes() {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to load");
        }
    }
}
