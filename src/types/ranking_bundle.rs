use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::library::Book;
use crate::types::identifiers::BookId;

/// Fully-resolved parameters for one ranking run.
///
/// Configuration layering (CLI over file over built-in defaults) happens
/// before these are built; the engine only ever sees resolved values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingParams {
    /// How many books a combination selects.
    pub subset_size: usize,
    /// How many chapter positions are scored per book.
    pub chapter_count: usize,
    /// How many ranked combinations to return.
    pub list_size: usize,
}

impl RankingParams {
    pub fn validate(&self) -> Result<(), RankingError> {
        for (name, value) in [
            ("subset_size", self.subset_size),
            ("chapter_count", self.chapter_count),
            ("list_size", self.list_size),
        ] {
            if value == 0 {
                return Err(RankingError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// A ranked combination returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCombination {
    /// Total excess ambiguity; 0 means the trick is unambiguous everywhere.
    pub score: usize,
    /// Member books in enumeration order.
    pub books: Vec<BookRef>,
    pub why: CollisionWhy,
}

/// Output payload copy of a member book.
/// We own the fields here because they are part of the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRef {
    pub id: BookId,
    pub title: String,
    pub chapters: String,
}

/// Explanation for why a combination received its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionWhy {
    /// Collision-group sizes across all positions, largest first.
    pub reps: Vec<usize>,
    /// For each colliding token value, the 1-based chapter positions where
    /// that token was shared by two or more member books.
    pub chapters: BTreeMap<char, Vec<usize>>,
}

/// Metadata describing the outcome of the ranking process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingMetadata {
    pub subset_size: usize,
    pub chapter_count: usize,
    pub list_size: usize,

    pub books_considered: usize,
    pub combinations_considered: u64,
    pub combinations_listed: usize,

    /// Score of the top-ranked combination, if any were enumerated.
    pub best_score: Option<usize>,
}

/// The final result of a ranking operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingResult {
    pub combinations: Vec<RankedCombination>,
    pub ranking: RankingMetadata,
}

/// Internal: detailed collision components before serialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollisionReport {
    /// Collision-group sizes across all positions, largest first.
    pub reps: Vec<usize>,
    /// 1-based positions per colliding token value, ascending.
    pub chapters: BTreeMap<char, Vec<usize>>,
}

impl CollisionReport {
    /// Total excess ambiguity: each collision group of size `s` contributes
    /// `s - 1` units.
    pub fn score(&self) -> usize {
        self.reps.iter().sum::<usize>() - self.reps.len()
    }

    /// True when no chapter position has any repeated token.
    pub fn is_clean(&self) -> bool {
        self.reps.is_empty()
    }
}

/// Internal: a combination that has been scored but not yet shortlisted.
/// Holds references to the library to avoid cloning books prematurely.
#[derive(Debug, Clone)]
pub struct ScoredCombination<'a> {
    /// Member books in enumeration order.
    pub books: Vec<&'a Book>,

    pub score: usize,
    pub report: CollisionReport,

    /// Position in the enumeration stream; the last-resort tie-break.
    pub index: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Need at least {need} books to perform the magic, found {have}")]
    InsufficientBooks { have: usize, need: usize },

    #[error("Book {id} has {have} chapters, needs at least {need}")]
    ChapterLength { id: BookId, have: usize, need: usize },

    #[error("Invalid {name}: {value} (must be at least 1)")]
    InvalidParameter { name: &'static str, value: usize },
}
