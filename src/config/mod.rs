use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Chapter token must be a single non-space character: '{0}'")]
    InvalidToken(String),

    #[error("Token alphabet needs at least two symbols")]
    AlphabetTooSmall,

    #[error("Config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered set of single-character chapter tokens.
///
/// Only randomize mode interprets the alphabet; the scorer compares tokens
/// purely by equality, so literal chapter data is never checked against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAlphabet {
    tokens: Vec<char>,
}

impl TokenAlphabet {
    /// Parse token strings, rejecting anything that is not exactly one
    /// non-space character after trimming.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, ConfigError> {
        let mut tokens = Vec::with_capacity(raw.len());
        for item in raw {
            let trimmed = item.as_ref().trim();
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(token), None) => tokens.push(token),
                _ => return Err(ConfigError::InvalidToken(item.as_ref().to_string())),
            }
        }
        if tokens.len() < 2 {
            return Err(ConfigError::AlphabetTooSmall);
        }
        Ok(TokenAlphabet { tokens })
    }

    pub fn tokens(&self) -> &[char] {
        &self.tokens
    }

    pub fn contains(&self, token: char) -> bool {
        self.tokens.contains(&token)
    }

    /// Draw one token uniformly.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.tokens[rng.gen_range(0..self.tokens.len())]
    }
}

impl Default for TokenAlphabet {
    fn default() -> Self {
        TokenAlphabet {
            tokens: vec!['0', '1'],
        }
    }
}

/// On-disk and built-in settings, before CLI overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How many books a combination selects.
    pub books: usize,
    /// How many chapters per book are scored.
    pub chapters: usize,
    /// How many ranked combinations to list.
    pub list: usize,
    /// Synthesize chapter data instead of reading it.
    pub randomize: bool,
    /// Chapter token symbols, one string per token.
    pub tokens: Vec<String>,
    /// Library file; absent means stdin.
    pub file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            books: 4,
            chapters: 16,
            list: 1,
            randomize: false,
            tokens: vec!["0".to_string(), "1".to_string()],
            file: None,
        }
    }
}

/// CLI-supplied overrides; unset fields fall through to the file and
/// built-in default layers.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub books: Option<usize>,
    pub chapters: Option<usize>,
    pub list: Option<usize>,
    pub randomize: bool,
    pub tokens: Option<Vec<String>>,
    pub file: Option<PathBuf>,
}

impl Settings {
    /// Read settings from `path`, or write the defaults there and return
    /// them when the file does not exist yet.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let defaults = Settings::default();
            fs::write(path, serde_json::to_string_pretty(&defaults)?)?;
            Ok(defaults)
        }
    }

    /// Apply CLI overrides on top of this layer. Precedence is
    /// CLI > config file > built-in default, resolved once before the
    /// engine is invoked.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(books) = overrides.books {
            self.books = books;
        }
        if let Some(chapters) = overrides.chapters {
            self.chapters = chapters;
        }
        if let Some(list) = overrides.list {
            self.list = list;
        }
        if overrides.randomize {
            self.randomize = true;
        }
        if let Some(tokens) = &overrides.tokens {
            self.tokens = tokens.clone();
        }
        if let Some(file) = &overrides.file {
            self.file = Some(file.clone());
        }
    }
}
