//! Hand classification from rank and suit frequency tables.
//!
//! The evaluator answers "which categories are present" for a snapshot of up
//! to seven cards and reports the strongest one. It does not pick a best five
//! and does not compare hands.
//!
//! Known limitations:
//! - Straights and straight flushes are never evaluated. A straight flush is
//!   reported as a flush.
//! - Category checks use exact rank counts. Counts {3,3,1} have no rank at
//!   exactly two, so they report three of a kind rather than full house.

pub(crate) mod detector;
pub mod hand_analysis;
pub mod rank_frequency;
pub mod suit_frequency;

use crate::cards::Card;
use std::fmt;

pub use hand_analysis::HandAnalysis;
pub use rank_frequency::RankFrequency;
pub use suit_frequency::SuitFrequency;

/// Hand category from weakest to strongest, in reporting precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Flush = 4,
    FullHouse = 5,
    FourOfAKind = 6,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
        }
    }

    /// Pair or better.
    pub const fn is_made(self) -> bool {
        !matches!(self, Category::HighCard)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strongest category present in `analysis`.
pub fn classify_analysis(analysis: &HandAnalysis) -> Category {
    use detector::DETECTORS;

    DETECTORS
        .iter()
        .find(|detector| detector.detect(analysis))
        .map_or(Category::HighCard, |detector| detector.category())
}

/// Build fresh frequency tables for `cards` and report the strongest category.
///
/// ```
/// use holdem_enum::cards::parse_cards;
/// use holdem_enum::evaluator::{classify, Category};
///
/// let cards = parse_cards("Ach Acd Acs 09c 09d 02h 05s").unwrap();
/// assert_eq!(classify(&cards), Category::FullHouse);
/// ```
pub fn classify<'a, I>(cards: I) -> Category
where
    I: IntoIterator<Item = &'a Card>,
    I::IntoIter: Clone,
{
    classify_analysis(&HandAnalysis::new(cards))
}
