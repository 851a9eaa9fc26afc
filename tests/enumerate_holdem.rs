use holdem_enum::cards::Card;
use holdem_enum::deck::Deck;
use holdem_enum::evaluator::Category;
use holdem_enum::hand::{Board, HoleCards};
use holdem_enum::problem::{HoldemProblem, HOLDEM_CARDS};
use holdem_enum::search::{enumerate, par_solutions, solutions, Problem};
use proptest::prelude::*;
use std::collections::HashSet;

fn card(s: &str) -> Card {
    s.parse().expect("valid card")
}

fn assert_valid_completions(problem: &HoldemProblem, found: &[Vec<Card>]) {
    for path in found {
        assert_eq!(problem.fixed().len() + path.len(), HOLDEM_CARDS);
        let distinct: HashSet<Card> = path.iter().copied().collect();
        assert_eq!(distinct.len(), path.len(), "card dealt twice in {path:?}");
        assert!(path.iter().all(|c| !problem.fixed().contains(c)));
        let category = problem.classify(path).expect("no repeated cards");
        assert!(category.is_made(), "{path:?} has no pair or better");
    }
}

#[test]
fn flop_example_emits_only_made_hands() {
    let problem = HoldemProblem::new(&["02h", "03d"], &["Kih", "04c", "05h"]).unwrap();
    let found = solutions(&problem);
    assert_valid_completions(&problem, &found);

    // 661 unordered turn/river pairs make a hand; each is emitted in both orders
    assert_eq!(found.len(), 1322);

    let no_hand = vec![card("09s"), card("Jac")];
    assert!(!found.contains(&no_hand));
    assert!(found.contains(&vec![card("02s"), card("Jac")]));
    assert!(found.contains(&vec![card("Jac"), card("02s")]));
    // two more hearts complete a flush
    assert!(found.contains(&vec![card("09h"), card("Jah")]));
}

#[test]
fn extra_ace_reports_trips_and_both_report_quads() {
    let problem = HoldemProblem::new(&["Ach", "Acd"], &["02c", "07d", "09s"]).unwrap();
    let found = solutions(&problem);
    assert_valid_completions(&problem, &found);

    let aces = [card("Acs"), card("Acc")];
    for path in &found {
        let category = problem.classify(path).unwrap();
        match path.iter().filter(|c| aces.contains(c)).count() {
            2 => assert_eq!(category, Category::FourOfAKind),
            1 => assert!(category >= Category::ThreeOfAKind, "{path:?} -> {category}"),
            _ => assert!(category >= Category::Pair),
        }
    }
    assert!(found.contains(&vec![card("Acs"), card("Acc")]));
}

#[test]
fn every_completion_is_emitted_with_pocket_pair() {
    // a pocket pair makes every deal a success, so the count is all ordered deals
    let problem = HoldemProblem::new(&["Ach", "Acd"], &["02c", "07d", "09s"]).unwrap();
    let stats = enumerate(&problem, |_| {});
    assert_eq!(stats.solutions, 47 * 46);
    // only re-dealt cards are dead ends
    assert_eq!(stats.dead_ends, 47);
}

#[test]
fn turn_and_river_counts_match_direct_check() {
    let problem = HoldemProblem::new(&["Jah", "10h"], &["02h", "07h", "Kic"]).unwrap();
    let found: HashSet<Vec<Card>> = solutions(&problem).into_iter().collect();

    let deck = problem.options();
    for &turn in &deck {
        for &river in &deck {
            let path = vec![turn, river];
            let expected = turn != river && problem.classify(&path).is_some_and(Category::is_made);
            assert_eq!(found.contains(&path), expected, "{path:?}");
        }
    }
}

#[test]
fn parallel_search_matches_sequential() {
    let problem = HoldemProblem::new(&["02h", "03d"], &["Kih", "04c", "05h"]).unwrap();
    assert_eq!(par_solutions(&problem), solutions(&problem));
}

#[test]
fn options_are_the_undealt_deck() {
    let problem = HoldemProblem::new(&["02h", "03d"], &[] as &[&str]).unwrap();
    let options = problem.options();
    assert_eq!(options.len(), 50);
    assert_eq!(options, problem.options());
    assert!(!options.contains(&card("02h")));
    assert!(!options.contains(&card("03d")));
}

fn any_deal() -> impl Strategy<Value = (HoleCards, Board)> {
    // at least three board cards keeps each case to a few thousand paths
    prop::sample::subsequence(Deck::standard().as_slice().to_vec(), 5..=7)
        .prop_shuffle()
        .prop_map(|cards| {
            let hole = HoleCards::from_slice(&cards[..2]).unwrap();
            let board = Board::try_new(cards[2..].to_vec()).unwrap();
            (hole, board)
        })
}

/// Five undealt cards for hole Ach Acd and an empty board.
fn five_without_pocket_aces() -> impl Strategy<Value = Vec<Card>> {
    let hole = [card("Ach"), card("Acd")];
    let rest: Vec<Card> =
        Deck::standard().as_slice().iter().copied().filter(|c| !hole.contains(c)).collect();
    prop::sample::subsequence(rest, 5).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn emitted_solutions_are_seven_distinct_cards((hole, board) in any_deal()) {
        let problem = HoldemProblem::from_cards(hole, board).unwrap();
        let mut emitted = 0usize;
        enumerate(&problem, |path| {
            emitted += 1;
            let mut in_play: HashSet<Card> = problem.fixed().iter().copied().collect();
            for c in path {
                assert!(in_play.insert(*c), "card {c} dealt twice");
            }
            assert_eq!(in_play.len(), HOLDEM_CARDS);
            assert!(problem.is_success(path));
        });
        let found = solutions(&problem);
        prop_assert_eq!(found.len(), emitted);
    }

    #[test]
    fn pocket_aces_never_misreport(path in five_without_pocket_aces()) {
        let problem = HoldemProblem::new(&["Ach", "Acd"], &[] as &[&str]).unwrap();
        prop_assert!(problem.is_success(&path));
        let category = problem.classify(&path).unwrap();
        let extra_aces = path.iter().filter(|c| **c == card("Acs") || **c == card("Acc")).count();
        match extra_aces {
            2 => prop_assert_eq!(category, Category::FourOfAKind),
            1 => prop_assert!(category >= Category::ThreeOfAKind),
            _ => prop_assert!(category >= Category::Pair),
        }
    }
}
