//! holdem-enum: enumerate Texas Hold'em completions by backtracking
//!
//! Given two hole cards and up to five board cards, deal every remaining
//! card sequence until seven cards are in play and keep the sequences that
//! make a pair or better.
//!
//! Layout:
//! - [`search`]: the generic backtracking enumerator and its [`search::Problem`] trait
//! - [`evaluator`]: rank/suit frequency tables and hand categories
//! - [`problem`]: the Hold'em binding of the two
//!
//! ## Quick start
//! ```
//! use holdem_enum::evaluator::Category;
//! use holdem_enum::problem::HoldemProblem;
//! use holdem_enum::search::enumerate;
//!
//! let problem = HoldemProblem::new(&["02h", "03d"], &["Kih", "04c", "05h", "07c"]).unwrap();
//! let mut pairs = 0;
//! enumerate(&problem, |path| {
//!     if problem.classify(path) == Some(Category::Pair) {
//!         pairs += 1;
//!     }
//! });
//! assert_eq!(pairs, 18);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin holdem-enum -- --hole "02h 03d" --board "Kih 04c 05h"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod problem;
pub mod search;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
