pub mod enumerate;
pub mod scoring;
pub mod shortlist;

use std::cmp::Ordering;

use crate::library::Book;
use crate::types::ranking_bundle::{
    BookRef, CollisionWhy, RankedCombination, RankingError, RankingMetadata, RankingParams,
    RankingResult, ScoredCombination,
};
pub use enumerate::{binomial, Combinations};
pub use scoring::{CollisionScorer, Scorer};
pub use shortlist::{rank_order, shortlist, ShortlistResult};

pub struct CombinationRanker<S> {
    scorer: S,
}

impl Default for CombinationRanker<CollisionScorer> {
    fn default() -> Self {
        Self {
            scorer: CollisionScorer,
        }
    }
}

impl<S> CombinationRanker<S>
where
    S: Scorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Enumerate, score, and rank every `subset_size`-element combination of
    /// the library, returning the best `list_size` entries best-first.
    ///
    /// Pure batch transform: no state survives between calls, and identical
    /// inputs produce identical output.
    pub fn rank(
        &self,
        library: &[Book],
        params: &RankingParams,
    ) -> Result<RankingResult, RankingError> {
        params.validate()?;

        // 0. Fail fast: every precondition is checked before enumeration
        // begins, so a failed run produces no partial results.
        if library.len() < params.subset_size {
            return Err(RankingError::InsufficientBooks {
                have: library.len(),
                need: params.subset_size,
            });
        }
        for book in library {
            let have = book.chapter_len();
            if have < params.chapter_count {
                return Err(RankingError::ChapterLength {
                    id: book.id,
                    have,
                    need: params.chapter_count,
                });
            }
        }

        // 1. Scoring Phase: stream every k-subset through the scorer.
        let scored = Combinations::new(library.len(), params.subset_size)
            .enumerate()
            .map(|(index, picks)| {
                let books: Vec<&Book> = picks.iter().map(|&i| &library[i]).collect();
                let report = self.scorer.score(&books, params.chapter_count);
                let score = report.score();
                ScoredCombination {
                    books,
                    score,
                    report,
                    index: index as u64,
                }
            });

        // 2. Ordering + Truncation Phase: bounded shortlist under the total
        // ranking order (score, then group sizes, then enumeration order).
        let ShortlistResult {
            listed,
            combinations_considered,
        } = shortlist(scored, params.list_size);

        tracing::debug!(
            combinations_considered,
            listed = listed.len(),
            "scored all combinations"
        );

        debug_assert!(listed
            .windows(2)
            .all(|w| rank_order(&w[0], &w[1]) != Ordering::Greater));

        // 3. Assemble the self-contained result bundle.
        let best_score = listed.first().map(|combination| combination.score);
        let combinations: Vec<RankedCombination> = listed
            .into_iter()
            .map(|combination| RankedCombination {
                score: combination.score,
                books: combination
                    .books
                    .iter()
                    .map(|book| BookRef {
                        id: book.id,
                        title: book.title.clone(),
                        chapters: book.chapters.clone(),
                    })
                    .collect(),
                why: CollisionWhy {
                    reps: combination.report.reps,
                    chapters: combination.report.chapters,
                },
            })
            .collect();

        let ranking = RankingMetadata {
            subset_size: params.subset_size,
            chapter_count: params.chapter_count,
            list_size: params.list_size,
            books_considered: library.len(),
            combinations_considered,
            combinations_listed: combinations.len(),
            best_score,
        };

        Ok(RankingResult {
            combinations,
            ranking,
        })
    }
}
