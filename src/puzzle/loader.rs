use std::fs;
use std::path::Path;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::puzzle::placement::Placement;

#[derive(Embed)]
#[folder = "assets/puzzles/"]
struct PuzzleAssets;

const DEFAULT_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse puzzle file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no bundled puzzle named \"{0}\"")]
    UnknownBundled(String),
    #[error("puzzle \"{title}\" has no answers")]
    NoAnswers { title: String },
    #[error("answer {index} (\"{word}\") in \"{title}\": {reason}")]
    InvalidAnswer {
        title: String,
        index: usize,
        word: String,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    title: String,
    #[serde(default = "default_size")]
    size: usize,
    answers: Vec<Placement>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

/// A validated puzzle: every answer word is non-empty, ASCII-alphabetic, and
/// spans cells inside the `size` x `size` grid. Malformed answer lists are a
/// configuration defect and are rejected here, at load time; nothing
/// downstream re-checks them.
#[derive(Debug)]
pub struct Puzzle {
    pub title: String,
    pub size: usize,
    pub answers: Vec<Placement>,
}

impl Puzzle {
    pub fn from_toml_str(content: &str) -> Result<Self, PuzzleError> {
        let file: PuzzleFile = toml::from_str(content)?;
        validate(&file)?;
        Ok(Self {
            title: file.title,
            size: file.size,
            answers: file.answers,
        })
    }

    pub fn load_file(path: &Path) -> Result<Self, PuzzleError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn load_bundled(name: &str) -> Result<Self, PuzzleError> {
        let filename = format!("{name}.toml");
        let file = PuzzleAssets::get(&filename)
            .ok_or_else(|| PuzzleError::UnknownBundled(name.to_string()))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|_| PuzzleError::UnknownBundled(name.to_string()))?;
        Self::from_toml_str(content)
    }

    pub fn bundled_names() -> Vec<String> {
        let mut names: Vec<String> = PuzzleAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

fn validate(file: &PuzzleFile) -> Result<(), PuzzleError> {
    if file.answers.is_empty() {
        return Err(PuzzleError::NoAnswers {
            title: file.title.clone(),
        });
    }
    for (index, answer) in file.answers.iter().enumerate() {
        let fail = |reason: String| PuzzleError::InvalidAnswer {
            title: file.title.clone(),
            index,
            word: answer.word.clone(),
            reason,
        };
        if answer.word.is_empty() {
            return Err(fail("empty word".to_string()));
        }
        if !answer.word.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(fail("word contains non-letter characters".to_string()));
        }
        if answer
            .span()
            .any(|c| c.row >= file.size || c.col >= file.size)
        {
            return Err(fail(format!(
                "span leaves the {size}x{size} grid",
                size = file.size
            )));
        }
    }
    Ok(())
}
