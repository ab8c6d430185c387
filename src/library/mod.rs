pub mod book;
pub mod parser;
pub mod randomize;

pub use book::{Book, BookError};
pub use parser::{parse_library, LibraryRecord};
pub use randomize::random_chapters;

use rand::Rng;
use thiserror::Error;

use crate::config::TokenAlphabet;
use crate::types::BookId;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(
        "Data is incomplete for book {ordinal} ('{title}'): \
         requires title and chapter data (chapters are optional when randomizing)"
    )]
    IncompleteRecord { ordinal: u32, title: String },

    #[error(transparent)]
    Book(#[from] BookError),
}

/// Build the book library from parsed records.
///
/// Each record must carry literal chapter data of at least `chapter_count`
/// tokens; longer data is truncated to exactly that length.
pub fn build_library(
    records: &[LibraryRecord],
    chapter_count: usize,
) -> Result<Vec<Book>, LibraryError> {
    records
        .iter()
        .map(|rec| {
            let id = BookId::from_ordinal(rec.ordinal);
            let chapters = rec.chapters.as_deref().ok_or_else(|| {
                LibraryError::IncompleteRecord {
                    ordinal: rec.ordinal,
                    title: rec.title.clone(),
                }
            })?;
            Book::ingest(id, rec.title.clone(), chapters, chapter_count).map_err(LibraryError::from)
        })
        .collect()
}

/// Build the library with synthesized chapter data.
///
/// Literal chapter lines are ignored and may be absent entirely; every book
/// receives exactly `chapter_count` tokens drawn uniformly from the alphabet.
pub fn build_randomized_library<R: Rng + ?Sized>(
    records: &[LibraryRecord],
    chapter_count: usize,
    alphabet: &TokenAlphabet,
    rng: &mut R,
) -> Vec<Book> {
    records
        .iter()
        .map(|rec| Book {
            id: BookId::from_ordinal(rec.ordinal),
            title: rec.title.clone(),
            // Synthesized data has exact length, so no validation is needed.
            chapters: random_chapters(rng, alphabet, chapter_count),
        })
        .collect()
}
