//! Module for leaderboard ranking logic

use self::models::{RankedEntry, ScoreEntry};
use crate::utils::types::Rank;
use std::cmp::Ordering;

pub mod models;

/// The canonical order over a score snapshot: entries sorted by score
/// descending with ties broken by id ascending, each annotated with
/// its 1-based rank. Immutable once built; derivations borrow slices
/// of it rather than copying.
pub struct Rankings {
    /// The entries in canonical order
    values: Box<[RankedEntry]>,
}

impl Rankings {
    /// Builds the canonical order for the provided snapshot. Ties on
    /// score resolve by id ascending, never by snapshot order, so any
    /// permutation of the same entries produces an identical order.
    pub fn new(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(compare_entries);

        // Apply the rank order to the sorted entries
        let values = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RankedEntry::new(index + 1, entry))
            .collect();

        Self { values }
    }

    /// The full canonical order
    pub fn entries(&self) -> &[RankedEntry] {
        &self.values
    }

    /// The total number of ranked entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Finds the rank of the first entry with the provided nickname
    /// scanning in canonical order. Nicknames are not guaranteed
    /// unique; taking the first match makes the lookup deterministic
    /// (of two users sharing a nickname the better ranked one wins).
    pub fn locate(&self, nickname: &str) -> Option<Rank> {
        self.values
            .iter()
            .find(|value| value.nickname == nickname)
            .map(|value| value.rank)
    }

    /// Gets the top `count` entries of the order, truncated when
    /// fewer entries exist.
    pub fn top(&self, count: usize) -> &[RankedEntry] {
        &self.values[..self.values.len().min(count)]
    }

    /// Gets a contiguous window of entries with up to `before`
    /// entries before the `center` index and up to `after` entries
    /// after it. The bounds clamp to the ends of the order, indexes
    /// never go out of bounds and never wrap.
    ///
    /// `center` The 0-based index of the reference entry
    /// `before` The number of entries to include before the center
    /// `after`  The number of entries to include after the center
    pub fn window(&self, center: usize, before: usize, after: usize) -> &[RankedEntry] {
        let length = self.values.len();

        // The index of the first item
        let start = center.saturating_sub(before).min(length);
        // The index past the last item
        let end = center.saturating_add(after).saturating_add(1).min(length);

        &self.values[start..end]
    }

    /// Gets the window around a located rank. A user missing from the
    /// order has no sensible neighborhood so the window is empty.
    pub fn window_around(&self, rank: Option<Rank>, before: usize, after: usize) -> &[RankedEntry] {
        match rank {
            Some(rank) => self.window(rank.saturating_sub(1), before, after),
            None => &[],
        }
    }
}

/// Comparator defining the canonical order: score descending then
/// id ascending. Total because ids are unique.
fn compare_entries(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod test {
    use super::{models::ScoreEntry, Rankings};
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    fn entry(id: u32, nickname: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            id,
            nickname: nickname.to_string(),
            score,
        }
    }

    /// Snapshot with five distinct scores, canonical order matches
    /// the creation order
    fn five_entries() -> Vec<ScoreEntry> {
        vec![
            entry(1, "A", 50),
            entry(2, "B", 40),
            entry(3, "C", 30),
            entry(4, "D", 20),
            entry(5, "E", 10),
        ]
    }

    /// Tests that entries order by score descending with score ties
    /// resolved by id ascending
    #[test]
    fn test_canonical_order() {
        let rankings = Rankings::new(vec![
            entry(1, "A", 10),
            entry(2, "B", 20),
            entry(3, "C", 20),
        ]);

        let order: Vec<(usize, u32)> = rankings
            .entries()
            .iter()
            .map(|value| (value.rank, value.id))
            .collect();
        assert_eq!(order, vec![(1, 2), (2, 3), (3, 1)]);
    }

    /// Tests that the order length matches the input length and the
    /// order is identical for any permutation of the same snapshot
    #[test]
    fn test_order_permutations() {
        let mut rng = StdRng::seed_from_u64(0x51C0);

        let entries: Vec<ScoreEntry> = (1..=100)
            .map(|id| entry(id, &format!("user-{}", id), (id % 7) * 3))
            .collect();
        let expected = Rankings::new(entries.clone());
        assert_eq!(expected.len(), entries.len());

        for _ in 0..10 {
            let mut shuffled = entries.clone();
            shuffled.shuffle(&mut rng);

            let rankings = Rankings::new(shuffled);
            assert_eq!(rankings.entries(), expected.entries());
        }
    }

    /// Tests that sorting an already canonical order changes nothing
    #[test]
    fn test_order_idempotent() {
        let first = Rankings::new(vec![
            entry(7, "A", 3),
            entry(2, "B", 9),
            entry(5, "C", 3),
            entry(1, "D", 9),
        ]);

        let resorted: Vec<ScoreEntry> = first
            .entries()
            .iter()
            .map(|value| entry(value.id, &value.nickname, value.score))
            .collect();
        let second = Rankings::new(resorted);

        assert_eq!(first.entries(), second.entries());
    }

    /// Tests locating ranks within the canonical order including the
    /// not found case
    #[test]
    fn test_locate() {
        let rankings = Rankings::new(vec![
            entry(1, "A", 10),
            entry(2, "B", 20),
            entry(3, "C", 20),
        ]);

        assert_eq!(rankings.locate("B"), Some(1));
        assert_eq!(rankings.locate("C"), Some(2));
        assert_eq!(rankings.locate("A"), Some(3));
        assert_eq!(rankings.locate("Z"), None);
    }

    /// Tests that a duplicated nickname resolves to the first match
    /// in canonical order
    #[test]
    fn test_locate_duplicate_nickname() {
        let rankings = Rankings::new(vec![
            entry(1, "Sam", 5),
            entry(2, "Other", 30),
            entry(3, "Sam", 25),
        ]);

        // The better ranked of the two "Sam" entries wins
        assert_eq!(rankings.locate("Sam"), Some(2));
    }

    /// Tests that locating within an empty order is not found
    #[test]
    fn test_locate_empty() {
        let rankings = Rankings::new(Vec::new());
        assert!(rankings.is_empty());
        assert_eq!(rankings.locate("A"), None);
    }

    /// Tests window clamping at the start and end of the order
    #[test]
    fn test_window_clamping() {
        let rankings = Rankings::new(five_entries());

        let start: Vec<usize> = rankings.window(0, 2, 2).iter().map(|v| v.rank).collect();
        assert_eq!(start, vec![1, 2, 3]);

        let end: Vec<usize> = rankings.window(4, 2, 2).iter().map(|v| v.rank).collect();
        assert_eq!(end, vec![3, 4, 5]);

        let middle: Vec<usize> = rankings.window(2, 2, 2).iter().map(|v| v.rank).collect();
        assert_eq!(middle, vec![1, 2, 3, 4, 5]);
    }

    /// Tests that out of range centers clamp to an empty window
    /// rather than failing
    #[test]
    fn test_window_out_of_range() {
        let rankings = Rankings::new(five_entries());
        assert!(rankings.window(9, 2, 2).is_empty());
        assert!(Rankings::new(Vec::new()).window(0, 2, 2).is_empty());
    }

    /// Tests that the window around a missing rank is empty
    #[test]
    fn test_window_around_not_found() {
        let rankings = Rankings::new(five_entries());
        assert!(rankings.window_around(None, 2, 2).is_empty());

        let around: Vec<usize> = rankings
            .window_around(rankings.locate("E"), 2, 2)
            .iter()
            .map(|v| v.rank)
            .collect();
        assert_eq!(around, vec![3, 4, 5]);
    }

    /// Tests top slicing truncates to the available entries
    #[test]
    fn test_top() {
        let rankings = Rankings::new(five_entries());
        assert_eq!(rankings.top(3).len(), 3);
        assert_eq!(rankings.top(10).len(), 5);
        assert!(Rankings::new(Vec::new()).top(10).is_empty());
    }
}
