use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

/// Two-character rank labels, the single source for both parsing and formatting.
const RANK_LABELS: [(Rank, &str); 13] = [
    (Rank::Two, "02"),
    (Rank::Three, "03"),
    (Rank::Four, "04"),
    (Rank::Five, "05"),
    (Rank::Six, "06"),
    (Rank::Seven, "07"),
    (Rank::Eight, "08"),
    (Rank::Nine, "09"),
    (Rank::Ten, "10"),
    (Rank::Jack, "Ja"),
    (Rank::Queen, "Qu"),
    (Rank::King, "Ki"),
    (Rank::Ace, "Ac"),
];

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The two-character label used in card tokens ("02", "10", "Ja", "Ac").
    pub fn label(self) -> &'static str {
        RANK_LABELS[(self.value() - 2) as usize].1
    }

    /// Exact match against the two-character token labels, ignoring case.
    pub fn from_label(label: &str) -> Option<Rank> {
        RANK_LABELS
            .iter()
            .find(|(_, l)| l.eq_ignore_ascii_case(label))
            .map(|&(rank, _)| rank)
    }

    /// Look up a rank by its integer value (2..=14).
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Rank::ALL[(value - 2) as usize]),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(rank) = Rank::from_label(t) {
            return Ok(rank);
        }
        // Numeric tokens parse directly, so "2" and "02" agree.
        if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RankParseError::Invalid(s.to_string()));
        }
        t.parse::<u8>()
            .ok()
            .filter(|v| (2..=10).contains(v))
            .and_then(Rank::from_value)
            .ok_or_else(|| RankParseError::Invalid(s.to_string()))
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or_else(|| RankParseError::Invalid(value.to_string()))
    }
}

/// Four suits; order has no hand-strength meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// Cards order by suit first, then rank. The ordering only exists for
/// deterministic iteration; it says nothing about hand strength.
///
/// ```
/// use holdem_enum::cards::{Card, Rank, Suit};
///
/// let card: Card = "Kih".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::King, Suit::Hearts));
/// assert_eq!(card.to_string(), "Kih");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    // Field order drives the derived ordering: (suit, rank).
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Build a card from an integer rank (2..=14) and a suit symbol.
    pub fn from_parts(rank: u8, suit: char) -> Result<Self, CardParseError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}' (expected <2-char rank><suit>, e.g. '02h' or 'Kis')")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let [r0, r1, suit_ch] = chars.as_slice() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let rank_str: String = [*r0, *r1].iter().collect();
        let rank = Rank::from_label(&rank_str)
            .ok_or_else(|| RankParseError::Invalid(rank_str.clone()))?;
        let suit = Suit::try_from(*suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use holdem_enum::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Acs, Kid 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
