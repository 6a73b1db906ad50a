pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use core::fmt;
use std::collections::HashSet;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "high-card",
            Category::Pair => "one-pair",
            Category::TwoPair => "two-pair",
            Category::ThreeOfAKind => "three-of-a-kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full-house",
            Category::FourOfAKind => "four-of-a-kind",
            Category::StraightFlush => "straight-flush",
            Category::RoyalFlush => "royal-flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluation result: category, best five cards and packed strength.
/// `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct EvaluatedHand {
    pub category: Category,
    /// Defining cards first (e.g. the trips of a full house), then kickers.
    pub best_five: [Card; 5],
    values: [u8; 5],
    value: HandValue,
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EvaluatedHand {}

impl EvaluatedHand {
    pub(crate) fn new(category: Category, best_five: [Card; 5], values: [u8; 5]) -> Self {
        let value = HandValue::from_parts(category, &values);
        EvaluatedHand { category, best_five, values, value }
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Comparison values of `best_five`, most significant first.
    /// A wheel Ace reports 1.
    pub const fn values(&self) -> [u8; 5] {
        self.values
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and five comparison values into a comparable value.
    /// Uses 6 bits per value to be generous (supports up to 63).
    pub fn from_parts(category: Category, values_desc: &[u8; 5]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | v0 (6) | v1 (6) | v2 (6) | v3 (6) | v4 (6) | 18 zero bits ]
        // v0 is the primary tiebreaker and must be more significant than v1..v4.
        const CAT_SHIFT: u32 = 48;
        const VALUE_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, value) in values_desc.iter().enumerate() {
            let offset = CAT_SHIFT - VALUE_STRIDE * (i as u32 + 1);
            v |= u64::from(*value & 0x3f) << offset;
        }
        HandValue(v)
    }

    /// The category encoded in the high byte.
    pub fn category_ordinal(self) -> u8 {
        (self.0 >> 48) as u8
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate: need 5, got {0}")]
    InsufficientCards(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
}

/// Evaluate five or more distinct cards: best five, category and strength.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("As Ks Qs Js 10s 2d 3h").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards(cards.len()));
    }
    let distinct: HashSet<Card> = cards.iter().copied().collect();
    if distinct.len() != cards.len() {
        return Err(EvalError::DuplicateCards);
    }

    // Build analysis once (sorted cards, rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // First matching detector wins, strongest category first
    if let Some(hand) = DETECTORS.iter().find_map(|detector| detector.detect(&analysis)) {
        return Ok(hand);
    }

    // Unreachable: HighCard always matches once five cards are present
    unreachable!("HighCard detector should always match")
}

/// Evaluate a Hold'em hand: hole cards plus 3 to 5 board cards.
///
/// ```
/// use holdem_rs::evaluator::{evaluate_holdem, Category};
/// use holdem_rs::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<EvaluatedHand, EvalError> {
    validate_holdem(hole, board)?;
    evaluate(&hole.combined_with(board))
}

/// Compare two Hold'em hands on a shared board.
///
/// ```
/// use holdem_rs::evaluator::compare_holdem;
/// use holdem_rs::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(va.cmp(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card, Rank, Suit};

    fn eval(s: &str) -> EvaluatedHand {
        evaluate(&parse_cards(s).unwrap()).expect("valid hand")
    }

    #[test]
    fn four_cards_is_insufficient() {
        let cards = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(evaluate(&cards).unwrap_err(), EvalError::InsufficientCards(4));
    }

    #[test]
    fn duplicate_cards_are_rejected() {
        let cards = parse_cards("As As Qs Js 9d").unwrap();
        assert_eq!(evaluate(&cards).unwrap_err(), EvalError::DuplicateCards);
    }

    #[test]
    fn holdem_needs_a_flop() {
        let hole = HoleCards::try_new(
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
        )
        .unwrap();
        let board = Board::new(vec![Card::new(Rank::Two, Suit::Clubs)]);
        assert_eq!(evaluate_holdem(&hole, &board).unwrap_err(), EvalError::InsufficientCards(3));
    }

    #[test]
    fn holdem_rejects_overlap() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        let board = Board::new(parse_cards("As 2c 3d").unwrap());
        assert!(matches!(
            evaluate_holdem(&hole, &board),
            Err(EvalError::InvalidHand(HandError::Overlap))
        ));
    }

    #[test]
    fn value_packs_category_above_kickers() {
        let best_pair = HandValue::from_parts(Category::Pair, &[14, 14, 13, 12, 11]);
        let worst_two_pair = HandValue::from_parts(Category::TwoPair, &[3, 3, 2, 2, 4]);
        assert!(worst_two_pair > best_pair);
        assert_eq!(worst_two_pair.category_ordinal(), Category::TwoPair.ordinal());
    }

    #[test]
    fn wheel_reports_low_ace() {
        let e = eval("As 2h 3d 4c 5s 9d Kc");
        assert_eq!(e.category, Category::Straight);
        assert_eq!(e.values(), [5, 4, 3, 2, 1]);
        assert!(e < eval("2h 3d 4c 5s 6d 9d Kc"));
    }

    #[test]
    fn full_house_with_two_trips_uses_higher_as_triple() {
        let e = eval("Ks Kh Kd 5c 5s 5h 2c");
        assert_eq!(e.category, Category::FullHouse);
        let ranks: Vec<Rank> = e.best_five.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::King, Rank::King, Rank::King, Rank::Five, Rank::Five]);
    }

    #[test]
    fn lower_trips_full_house_loses_to_higher_trips() {
        // 555KK must lose to 666-22 even though K > 6 in the pair
        assert!(eval("5s 5h 5d Kc Ks") < eval("6s 6h 6d 2c 2s"));
    }

    #[test]
    fn evaluates_every_category() {
        let cases = [
            ("As Ks Qs Js 10s", Category::RoyalFlush),
            ("9s 8s 7s 6s 5s", Category::StraightFlush),
            ("Kc Kd Kh Ks 2s", Category::FourOfAKind),
            ("10c 10d 10h 2s 2h", Category::FullHouse),
            ("Ah 9h 7h 3h 2h", Category::Flush),
            ("Ac 2d 3h 4s 5c", Category::Straight),
            ("Qc Qd Qh 9s 2c", Category::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Category::TwoPair),
            ("Ah Ad 10s 9c 2d", Category::Pair),
            ("Ah Kd 7s 5c 2d", Category::HighCard),
        ];
        for (cards, category) in cases {
            assert_eq!(eval(cards).category, category, "{cards}");
        }
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::RoyalFlush.to_string(), "royal-flush");
        assert_eq!(Category::Pair.label(), "one-pair");
    }
}
