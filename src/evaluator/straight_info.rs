use crate::cards::{Card, Rank};

/// A five-card straight, highest card first. In the wheel (A-2-3-4-5) the
/// Ace sits last and compares as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub cards: [Card; 5],
    pub is_wheel: bool,
}

impl StraightInfo {
    /// Find the highest straight among cards sorted by rank descending.
    pub fn detect(sorted: &[Card]) -> Option<Self> {
        // one card per rank; paired cards would otherwise break every window
        let mut distinct: Vec<Card> = Vec::with_capacity(sorted.len());
        for &card in sorted {
            if distinct.last().map_or(true, |last| last.rank() != card.rank()) {
                distinct.push(card);
            }
        }

        for w in distinct.windows(5) {
            if w.windows(2).all(|p| p[0].value() == p[1].value() + 1) {
                return Some(StraightInfo { cards: [w[0], w[1], w[2], w[3], w[4]], is_wheel: false });
            }
        }

        let find = |rank: Rank| distinct.iter().copied().find(|c| c.rank() == rank);
        match (
            find(Rank::Five),
            find(Rank::Four),
            find(Rank::Three),
            find(Rank::Two),
            find(Rank::Ace),
        ) {
            (Some(five), Some(four), Some(three), Some(two), Some(ace)) => {
                Some(StraightInfo { cards: [five, four, three, two, ace], is_wheel: true })
            }
            _ => None,
        }
    }

    pub fn top_rank(&self) -> Rank {
        self.cards[0].rank()
    }

    /// Comparison values, with a wheel Ace counted as 1.
    pub fn values(&self) -> [u8; 5] {
        let mut values = self.cards.map(Card::value);
        if self.is_wheel {
            values[4] = 1;
        }
        values
    }
}
