use crate::cards::{parse_cards, Card};
use crate::problem::ProblemError;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// Most community cards a Hold'em board can hold.
pub const MAX_BOARD: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0} (at most 5)")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card {0} is already in play")]
    DuplicateCard(Card),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_enum::hand::HoleCards;
///
/// let hole: HoleCards = "02h 03d".parse().unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }
}

impl FromStr for HoleCards {
    type Err = ProblemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Ok(Self::from_slice(&cards)?)
    }
}

/// Community cards dealt so far (0 to 5).
///
/// ```
/// use holdem_enum::hand::Board;
///
/// let board: Board = "Kih 04c 05h".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > MAX_BOARD {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
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
}

impl FromStr for Board {
    type Err = ProblemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Ok(Board::try_new(cards)?)
    }
}

/// Validate that a pair of hole cards and board form a valid Hold'em state.
/// Allows 0..=5 board cards. Ensures uniqueness across all cards.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > MAX_BOARD {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateHoleCards);
    }
    Ok(())
}

/// Unique cards currently in play, iterated in canonical (suit, rank) order.
///
/// Re-inserting a card that is already present is a no-op, so a set can
/// never hold the same physical card twice.
///
/// ```
/// use holdem_enum::cards::Card;
/// use holdem_enum::hand::CardSet;
///
/// let mut set = CardSet::new();
/// let ace: Card = "Acs".parse().unwrap();
/// assert!(set.insert(ace));
/// assert!(!set.insert(ace));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: BTreeSet<Card>,
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cards of a validated hole + board state.
    pub fn from_holdem(hole: &HoleCards, board: &Board) -> Result<Self, HandError> {
        validate_holdem(hole, board)?;
        let mut set = CardSet::new();
        set.try_extend(hole.as_array())?;
        set.try_extend(board.as_slice().iter().copied())?;
        Ok(set)
    }

    /// Insert a card; returns `false` and leaves the set untouched if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    /// Insert every card, failing on the first one already in play.
    pub fn try_extend<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            if !self.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(())
    }

    /// A copy of this set extended by `extra`, or `None` if any extra card is already in play
    /// (including a card repeated within `extra`).
    pub fn extended(&self, extra: &[Card]) -> Option<CardSet> {
        let mut set = self.clone();
        set.try_extend(extra.iter().copied()).ok()?;
        Some(set)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::collections::btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}
