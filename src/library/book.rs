use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::BookId;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book {id} ('{title}') has {have} chapters, needs at least {need}")]
    TooFewChapters {
        id: BookId,
        title: String,
        have: usize,
        need: usize,
    },
}

/// A candidate book: a display title plus one classification token per
/// chapter position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Exactly one single-character token per chapter position.
    pub chapters: String,
}

impl Book {
    /// Ingest a raw record into a Book.
    ///
    /// Enforces the scoring invariant up front: chapter data is validated
    /// against `chapter_count` and truncated to exactly that many tokens.
    pub fn ingest(
        id: BookId,
        title: impl Into<String>,
        raw_chapters: &str,
        chapter_count: usize,
    ) -> Result<Self, BookError> {
        let title = title.into();
        let tokens: Vec<char> = raw_chapters.chars().collect();
        if tokens.len() < chapter_count {
            return Err(BookError::TooFewChapters {
                id,
                title,
                have: tokens.len(),
                need: chapter_count,
            });
        }

        let chapters: String = tokens.into_iter().take(chapter_count).collect();

        Ok(Book { id, title, chapters })
    }

    /// Number of chapter tokens this book carries.
    pub fn chapter_len(&self) -> usize {
        self.chapters.chars().count()
    }

    /// Token at a 0-based chapter position.
    pub fn token_at(&self, position: usize) -> Option<char> {
        self.chapters.chars().nth(position)
    }
}
