use crate::cards::{Card, Rank, Suit};
use crate::hand::CardSet;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The 52 cards a Hold'em deal draws from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Cards come out in canonical order: clubs, diamonds, hearts, spades,
    /// and Two through Ace within each suit.
    ///
    /// ```
    /// use holdem_enum::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0].to_string(), "02c");
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// The standard deck minus every card in `in_play`, in canonical order.
    pub fn without(in_play: &CardSet) -> Vec<Card> {
        Self::standard().cards.into_iter().filter(|c| !in_play.contains(c)).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Reorder the deck with ChaCha8 seeded by `seed`; the same seed always
    /// deals the same hole cards and board.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.cards.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Take the last card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Take up to `n` cards; fewer come back once the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}
