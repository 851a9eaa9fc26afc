use crate::cards::{Card, Rank};

/// Number of cards held at each rank, indexed by rank value (2-14).
///
/// Built from a snapshot of cards in a single pass; never updated in place.
/// Counts saturate at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankFrequency {
    counts: [u8; 15],
}

impl RankFrequency {
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut counts = [0u8; 15];
        for card in cards {
            let slot = &mut counts[card.rank().value() as usize];
            *slot = slot.saturating_add(1);
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// True iff some rank has exactly `k` cards. Not "at least": four of a
    /// kind does not make `has_count(2)` true.
    pub fn has_count(&self, k: u8) -> bool {
        self.ranks_with_count(k) > 0
    }

    /// How many distinct ranks have exactly `k` cards.
    pub fn ranks_with_count(&self, k: u8) -> usize {
        Rank::ALL.iter().filter(|&&rank| self.count(rank) == k).count()
    }

    /// Ranks with exactly `k` cards, highest first.
    pub fn ranks_at(&self, k: u8) -> Vec<Rank> {
        Rank::ALL.iter().rev().copied().filter(|&rank| self.count(rank) == k).collect()
    }
}
