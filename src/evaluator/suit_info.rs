use crate::cards::{Card, Suit};

/// Flush information: the suit with at least five cards and those cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    /// Every card of the flush suit, highest first. Empty without a flush.
    pub flush_cards: Vec<Card>,
}

impl SuitInfo {
    /// Detect a flush among cards sorted by rank descending.
    pub fn detect(sorted: &[Card]) -> Self {
        let best = Suit::ALL
            .iter()
            .map(|&suit| {
                let cards: Vec<Card> = sorted.iter().copied().filter(|c| c.suit() == suit).collect();
                (suit, cards)
            })
            .filter(|(_, cards)| cards.len() >= 5)
            // more than one qualifying suit needs 10+ cards; keep the strongest top five
            .max_by(|(_, a), (_, b)| {
                let ra = a.iter().take(5).map(|c| c.rank());
                let rb = b.iter().take(5).map(|c| c.rank());
                ra.cmp(rb)
            });

        match best {
            Some((suit, flush_cards)) => SuitInfo { flush_suit: Some(suit), flush_cards },
            None => SuitInfo { flush_suit: None, flush_cards: Vec::new() },
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
