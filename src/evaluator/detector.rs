use super::hand_analysis::{five, HandAnalysis};
use crate::cards::Rank;
use crate::evaluator::{Category, EvaluatedHand};

/// Strategy pattern: each detector recognises one category and builds its
/// best five cards, or returns `None` so the next detector is tried.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let sf = analysis.straight_flush.filter(|s| !s.is_wheel && s.top_rank() == Rank::Ace)?;
        Some(analysis.build_straight(self.category(), &sf))
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let sf = analysis.straight_flush?;
        Some(analysis.build_straight(self.category(), &sf))
    }
}

/// Four of a Kind: Four cards of the same rank plus the best kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = analysis.kickers(&[quad.rank], 1);
        let best = five(quad.cards.iter().copied().chain(kicker))?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

/// Full House: highest triple plus the best remaining pair (a second
/// triple contributes two of its cards)
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let trips = *analysis.rank_groups.trips().first()?;
        let pair = analysis.rank_groups.best_pair_excluding(trips.rank)?;
        let best = five(trips.cards.iter().chain(pair.cards.iter().take(2)).copied())?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

/// Flush: Top five cards of the flush suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let best = five(analysis.suit_info.flush_cards.iter().copied())?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

/// Straight: Five consecutive ranks (wheel last)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let straight = analysis.straight?;
        Some(analysis.build_straight(self.category(), &straight))
    }
}

/// Three of a Kind: Three cards of the same rank plus two kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let trips = *analysis.rank_groups.trips().first()?;
        let kickers = analysis.kickers(&[trips.rank], 2);
        let best = five(trips.cards.iter().copied().chain(kickers))?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

/// Two Pair: The two highest pairs plus one kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let pairs = analysis.rank_groups.pairs();
        let (high, low) = match pairs.as_slice() {
            [high, low, ..] => (*high, *low),
            _ => return None,
        };
        let kicker = analysis.kickers(&[high.rank, low.rank], 1);
        let best = five(high.cards.iter().chain(low.cards.iter()).copied().chain(kicker))?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

/// One Pair: Two cards of the same rank plus three kickers
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let pair = *analysis.rank_groups.pairs().first()?;
        let kickers = analysis.kickers(&[pair.rank], 3);
        let best = five(pair.cards.iter().copied().chain(kickers))?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

/// High Card: Top five cards overall
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let best = five(analysis.sorted_cards.iter().copied())?;
        Some(analysis.build_evaluation(self.category(), best))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
