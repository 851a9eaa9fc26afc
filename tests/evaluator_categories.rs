use holdem_enum::cards::parse_cards;
use holdem_enum::evaluator::{classify, Category, HandAnalysis};

fn category(s: &str) -> Category {
    classify(&parse_cards(s).expect("valid cards"))
}

fn analyze(s: &str) -> HandAnalysis {
    HandAnalysis::new(&parse_cards(s).expect("valid cards"))
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(category("09c 09d 09h 09s Acc 02d 05h"), Category::FourOfAKind);
}

#[test]
fn category_full_house() {
    assert_eq!(category("03c 03d 03h Jas Jac 07d 09h"), Category::FullHouse);
}

#[test]
fn category_flush() {
    assert_eq!(category("Kih 10h 08h 06h 03h 02c 04d"), Category::Flush);
}

#[test]
fn category_three_of_a_kind() {
    assert_eq!(category("Quc Qud Quh 10s 02c 05d 07h"), Category::ThreeOfAKind);
}

#[test]
fn category_two_pair() {
    assert_eq!(category("Jac Jad 09c 09h 02s 05d 07h"), Category::TwoPair);
}

#[test]
fn category_pair() {
    assert_eq!(category("Ach Acd 10s 09c 02d 05h 07s"), Category::Pair);
}

#[test]
fn category_high_card() {
    assert_eq!(category("Ach Kid 07s 05c 02d 09h Jac"), Category::HighCard);
}

#[test]
fn plain_quads_are_not_a_full_house() {
    // counts {4,1,1,1}
    let a = analyze("Ach Acd Acs Acc 02d 05h 07s");
    assert!(a.is_four());
    assert!(!a.is_full_house());
    assert_eq!(category("Ach Acd Acs Acc 02d 05h 07s"), Category::FourOfAKind);
}

#[test]
fn trips_and_a_pair_is_not_two_pair() {
    // counts {3,2,1,1}
    let a = analyze("Ach Acd Acs Kic Kid 05h 07s");
    assert!(a.is_full_house());
    assert!(!a.is_two_pair());
    assert_eq!(category("Ach Acd Acs Kic Kid 05h 07s"), Category::FullHouse);
}

#[test]
fn sixth_card_of_another_suit_keeps_the_flush() {
    let five = analyze("Kih 10h 08h 06h 03h");
    let six = analyze("Kih 10h 08h 06h 03h 02c");
    assert!(five.is_flush());
    assert!(six.is_flush());
}

#[test]
fn straight_flush_is_only_a_flush() {
    assert_eq!(category("09h 08h 07h 06h 05h 02c 03d"), Category::Flush);
}
