use super::rank_frequency::RankFrequency;
use super::suit_frequency::SuitFrequency;
use crate::cards::Card;

/// Rank and suit frequency tables for one snapshot of up to seven cards.
/// Built once per query and shared by all category detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandAnalysis {
    pub ranks: RankFrequency,
    pub suits: SuitFrequency,
}

impl HandAnalysis {
    pub fn new<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
        I::IntoIter: Clone,
    {
        let iter = cards.into_iter();
        let ranks = RankFrequency::from_cards(iter.clone());
        let suits = SuitFrequency::from_cards(iter);
        Self { ranks, suits }
    }

    pub fn is_pair(&self) -> bool {
        self.ranks.has_count(2)
    }

    /// Two distinct ranks each at exactly two cards.
    pub fn is_two_pair(&self) -> bool {
        self.ranks.ranks_with_count(2) >= 2
    }

    pub fn is_three(&self) -> bool {
        self.ranks.has_count(3)
    }

    /// Some rank at exactly three and some other rank at exactly two.
    pub fn is_full_house(&self) -> bool {
        self.ranks.has_count(3) && self.ranks.has_count(2)
    }

    pub fn is_four(&self) -> bool {
        self.ranks.has_count(4)
    }

    pub fn is_flush(&self) -> bool {
        self.suits.flush_suit().is_some()
    }
}
