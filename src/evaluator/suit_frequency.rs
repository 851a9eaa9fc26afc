use crate::cards::{Card, Suit};

/// Cards needed in one suit for a flush.
pub const FLUSH_LEN: u8 = 5;

/// Number of cards held in each suit. Only used for flush detection.
///
/// Counts saturate at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitFrequency {
    counts: [u8; 4],
}

impl SuitFrequency {
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut counts = [0u8; 4];
        for card in cards {
            let slot = &mut counts[card.suit().index()];
            *slot = slot.saturating_add(1);
        }
        Self { counts }
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.counts[suit.index()]
    }

    /// A suit holding at least five cards, if any. With seven cards at most one can.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL.iter().copied().find(|&suit| self.count(suit) >= FLUSH_LEN)
    }
}
