use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, EvaluatedHand};

/// Pre-computed analysis of a card set (five or more cards).
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight: Option<StraightInfo>,
    /// Straight made only from flush-suit cards.
    pub straight_flush: Option<StraightInfo>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        // rank descending, then suit descending for stable output
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let rank_groups = RankGroups::from_sorted(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight = StraightInfo::detect(&sorted_cards);
        let straight_flush = if suit_info.is_flush() && straight.is_some() {
            StraightInfo::detect(&suit_info.flush_cards)
        } else {
            None
        };

        Self { sorted_cards, rank_groups, suit_info, straight, straight_flush }
    }

    /// Highest `n` cards whose rank is not in `excluded`.
    pub fn kickers(&self, excluded: &[Rank], n: usize) -> impl Iterator<Item = Card> + '_ {
        let excluded = excluded.to_vec();
        self.sorted_cards.iter().copied().filter(move |c| !excluded.contains(&c.rank())).take(n)
    }

    /// Build a result whose comparison values are the card values in order.
    pub fn build_evaluation(&self, category: Category, best_five: [Card; 5]) -> EvaluatedHand {
        let values = best_five.map(Card::value);
        EvaluatedHand::new(category, best_five, values)
    }

    /// Build a straight-based result; the wheel Ace compares as 1.
    pub fn build_straight(&self, category: Category, straight: &StraightInfo) -> EvaluatedHand {
        EvaluatedHand::new(category, straight.cards, straight.values())
    }
}

/// Collect exactly five cards, or nothing.
pub fn five<I: IntoIterator<Item = Card>>(cards: I) -> Option<[Card; 5]> {
    let v: Vec<Card> = cards.into_iter().take(5).collect();
    v.try_into().ok()
}
