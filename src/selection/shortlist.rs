use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::types::ranking_bundle::ScoredCombination;

/// Outcome of the shortlist phase.
pub struct ShortlistResult<'a> {
    /// The best combinations, best-first.
    pub listed: Vec<ScoredCombination<'a>>,
    pub combinations_considered: u64,
}

/// Total ranking order over scored combinations: score ascending, then
/// collision-group sizes compared lexicographically (fewer and smaller
/// groups rank better at equal score), then enumeration order.
pub fn rank_order(a: &ScoredCombination, b: &ScoredCombination) -> Ordering {
    a.score
        .cmp(&b.score)
        .then_with(|| a.report.reps.cmp(&b.report.reps))
        .then_with(|| a.index.cmp(&b.index))
}

/// Keep the best `limit` combinations out of a scored stream.
///
/// The heap holds at most `limit` entries with the current worst on top, so
/// memory stays proportional to the requested list even when C(n, k) is
/// astronomically large. Because `rank_order` is total, the output is
/// identical to fully sorting the stream and truncating.
pub fn shortlist<'a, I>(scored: I, limit: usize) -> ShortlistResult<'a>
where
    I: Iterator<Item = ScoredCombination<'a>>,
{
    let mut heap: BinaryHeap<HeapEntry<'a>> = BinaryHeap::new();
    let mut considered = 0u64;

    for combination in scored {
        considered += 1;
        heap.push(HeapEntry(combination));
        if heap.len() > limit {
            heap.pop();
        }
    }

    let mut listed: Vec<ScoredCombination<'a>> = heap.into_iter().map(|entry| entry.0).collect();
    listed.sort_by(rank_order);

    ShortlistResult {
        listed,
        combinations_considered: considered,
    }
}

/// Max-heap adapter: the greatest element under `rank_order` — the current
/// worst candidate — sits on top and is evicted first.
struct HeapEntry<'a>(ScoredCombination<'a>);

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_order(&self.0, &other.0)
    }
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}
