//! The Hold'em completion problem: deal cards until seven are in play and
//! keep the deals that make a pair or better.

use crate::cards::{Card, CardParseError};
use crate::deck::Deck;
use crate::evaluator::{classify, Category};
use crate::hand::{Board, CardSet, HandError, HoleCards};
use crate::search::Problem;
use std::str::FromStr;

/// Cards in play once the board is complete: two hole cards plus five board cards.
pub const HOLDEM_CARDS: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error(transparent)]
    Token(#[from] CardParseError),
    #[error(transparent)]
    Shape(#[from] HandError),
}

/// Hole cards and board fixed at construction; the search extends them one
/// undealt card at a time.
///
/// ```
/// use holdem_enum::problem::HoldemProblem;
/// use holdem_enum::search::solutions;
///
/// let problem = HoldemProblem::new(&["02h", "03d"], &["Kih", "04c", "05h", "07c"]).unwrap();
/// let found = solutions(&problem);
/// assert!(found.iter().all(|path| path.len() == 1));
/// assert!(found.iter().all(|path| problem.classify(path).unwrap().is_made()));
/// ```
#[derive(Debug, Clone)]
pub struct HoldemProblem {
    hole: HoleCards,
    board: Board,
    fixed: CardSet,
}

impl HoldemProblem {
    /// Parse hole and board tokens such as `"02h"` or `"Kis"`.
    ///
    /// Fails before any search on an unparseable token, a hole count other
    /// than two, more than five board cards, or a card given twice.
    pub fn new<S: AsRef<str>>(hole: &[S], board: &[S]) -> Result<Self, ProblemError> {
        if hole.len() != 2 {
            return Err(HandError::HoleCount(hole.len()).into());
        }
        if board.len() > crate::hand::MAX_BOARD {
            return Err(HandError::TooManyBoardCards(board.len()).into());
        }
        let hole = parse_tokens(hole)?;
        let board = parse_tokens(board)?;
        let hole = HoleCards::from_slice(&hole)?;
        let board = Board::try_new(board)?;
        Ok(Self::from_cards(hole, board)?)
    }

    pub fn from_cards(hole: HoleCards, board: Board) -> Result<Self, HandError> {
        let fixed = CardSet::from_holdem(&hole, &board)?;
        log::debug!("problem fixed cards {} ({} to deal)", fixed, HOLDEM_CARDS - fixed.len());
        Ok(Self { hole, board, fixed })
    }

    pub fn hole(&self) -> &HoleCards {
        &self.hole
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Hole and board cards, as given.
    pub fn fixed(&self) -> &CardSet {
        &self.fixed
    }

    /// Cards still to be dealt before seven are in play.
    pub fn remaining(&self) -> usize {
        HOLDEM_CARDS - self.fixed.len()
    }

    /// Cards in play after dealing `path`, or `None` if the path re-deals a
    /// card that is already in play.
    pub fn in_play(&self, path: &[Card]) -> Option<CardSet> {
        self.fixed.extended(path)
    }

    /// Strongest category among the fixed cards plus `path`, or `None` if the
    /// path re-deals a card.
    pub fn classify(&self, path: &[Card]) -> Option<Category> {
        self.in_play(path).map(|cards| classify(&cards))
    }
}

fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardParseError> {
    tokens.iter().map(|t| Card::from_str(t.as_ref())).collect()
}

impl Problem for HoldemProblem {
    type Item = Card;

    fn is_success(&self, path: &[Card]) -> bool {
        if self.fixed.len() + path.len() != HOLDEM_CARDS {
            return false;
        }
        self.classify(path).is_some_and(Category::is_made)
    }

    fn is_partial(&self, path: &[Card]) -> bool {
        self.fixed.len() + path.len() < HOLDEM_CARDS && self.in_play(path).is_some()
    }

    /// The full deck minus the original fixed cards. Cards already chosen on
    /// the current path are not removed here; re-dealing one is rejected by
    /// the set semantics in `is_success`/`is_partial`.
    fn options(&self) -> Vec<Card> {
        Deck::without(&self.fixed)
    }
}
