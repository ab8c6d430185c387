use std::collections::BTreeMap;

use crate::library::Book;
use crate::types::ranking_bundle::CollisionReport;

/// Scores one combination of member books.
pub trait Scorer {
    fn score(&self, members: &[&Book], chapter_count: usize) -> CollisionReport;
}

/// Per-token collision counting.
///
/// For each chapter position, member books are bucketed by token value; any
/// token shared by two or more members forms a collision group there. The
/// spectator's answer at such a position cannot distinguish the members of
/// the group. Bucketing by token value (rather than comparing concatenated
/// position words) makes the score structurally invariant under member
/// order.
#[derive(Default)]
pub struct CollisionScorer;

impl Scorer for CollisionScorer {
    fn score(&self, members: &[&Book], chapter_count: usize) -> CollisionReport {
        let columns: Vec<Vec<char>> = members
            .iter()
            .map(|book| book.chapters.chars().collect())
            .collect();

        let mut reps = Vec::new();
        let mut chapters: BTreeMap<char, Vec<usize>> = BTreeMap::new();

        for position in 0..chapter_count {
            let mut counts: BTreeMap<char, usize> = BTreeMap::new();
            for tokens in &columns {
                if let Some(&token) = tokens.get(position) {
                    *counts.entry(token).or_insert(0) += 1;
                }
            }
            for (token, count) in counts {
                if count > 1 {
                    reps.push(count);
                    // Positions are reported 1-based, the way performers
                    // count chapters.
                    chapters.entry(token).or_default().push(position + 1);
                }
            }
        }

        reps.sort_unstable_by(|a, b| b.cmp(a));

        CollisionReport { reps, chapters }
    }
}
