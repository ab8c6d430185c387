pub mod identifiers;
pub mod ranking_bundle;

pub use identifiers::BookId;
pub use ranking_bundle::{
    BookRef, CollisionReport, CollisionWhy, RankedCombination, RankingError, RankingMetadata,
    RankingParams, RankingResult, ScoredCombination,
};
