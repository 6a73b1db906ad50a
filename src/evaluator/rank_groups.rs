use crate::cards::{Card, Rank};

/// Cards sharing one rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Groups cards by rank, sorted by (count desc, rank desc).
///
/// Example: AAKKQ5 groups as [(Ace, 2), (King, 2), (Queen, 1), (Five, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Build from cards already sorted by rank descending.
    pub fn from_sorted(sorted: &[Card]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::new();
        for &card in sorted {
            match groups.last_mut() {
                Some(g) if g.rank == card.rank() => g.cards.push(card),
                _ => groups.push(RankGroup { rank: card.rank(), cards: vec![card] }),
            }
        }
        groups.sort_by(|a, b| b.count().cmp(&a.count()).then(b.rank.cmp(&a.rank)));
        Self { groups }
    }

    /// The four-of-a-kind group, if present.
    pub fn quad(&self) -> Option<&RankGroup> {
        self.groups.iter().find(|g| g.count() == 4)
    }

    /// All three-of-a-kind groups, highest rank first.
    pub fn trips(&self) -> Vec<&RankGroup> {
        self.with_count(3)
    }

    /// All pair groups, highest rank first.
    pub fn pairs(&self) -> Vec<&RankGroup> {
        self.with_count(2)
    }

    /// Highest group other than `excluded` that can supply two cards,
    /// counting a second triple as a pair.
    pub fn best_pair_excluding(&self, excluded: Rank) -> Option<&RankGroup> {
        self.groups
            .iter()
            .filter(|g| g.rank != excluded && (2..=3).contains(&g.count()))
            .max_by_key(|g| g.rank)
    }

    fn with_count(&self, count: usize) -> Vec<&RankGroup> {
        self.groups.iter().filter(|g| g.count() == count).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[RankGroup] {
        &self.groups
    }
}
