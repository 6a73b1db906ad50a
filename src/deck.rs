use crate::cards::{Card, Rank, Suit};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards in deck: requested {requested}, available {available}")]
    InsufficientCards { requested: usize, available: usize },
}

/// A standard 52-card deck. The top of the deck is the end of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Cards removed from a deck by [`Deck::deal`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub community: Vec<Card>,
    pub remainder: Deck,
}

impl Deck {
    /// Fresh, unshuffled deck: every (suit, rank) pair once.
    ///
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Uniformly shuffled copy of this deck using the provided RNG.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Deck { cards }
    }

    /// Shuffled copy using a seeded RNG for reproducibility.
    pub fn shuffled_seeded(&self, seed: u64) -> Deck {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled(&mut rng)
    }

    /// Deal `n_hands * cards_per_hand + n_community` cards from the top.
    ///
    /// Each hand receives its cards consecutively (hand 0 first), then the
    /// community cards are taken. Nothing is dealt when the deck is short.
    ///
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let deal = Deck::standard().shuffled_seeded(1).deal(4, 2, 0).unwrap();
    /// assert_eq!(deal.hands.len(), 4);
    /// assert_eq!(deal.remainder.len(), 44);
    /// ```
    pub fn deal(
        mut self,
        n_hands: usize,
        cards_per_hand: usize,
        n_community: usize,
    ) -> Result<Deal, DeckError> {
        let available = self.cards.len();
        let requested = n_hands
            .checked_mul(cards_per_hand)
            .and_then(|hole| hole.checked_add(n_community))
            .ok_or(DeckError::InsufficientCards { requested: usize::MAX, available })?;
        if requested > available {
            return Err(DeckError::InsufficientCards { requested, available });
        }
        let hands: Vec<Vec<Card>> = (0..n_hands).map(|_| self.draw_n(cards_per_hand)).collect();
        let community = self.draw_n(n_community);
        debug!(
            "dealt {} hand(s) x {} and {} community card(s), {} left",
            n_hands,
            cards_per_hand,
            n_community,
            self.cards.len()
        );
        Ok(Deal { hands, community, remainder: self })
    }

    fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.cards.pop()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
