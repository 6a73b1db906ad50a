//! Showdown resolution: pick the strongest active hand.
//!
//! Ties are not split. When two hands have exactly equal strength the one
//! listed first wins; [`Showdown::tied_with`] reports the others so callers
//! can surface the tie.

use crate::cards::Card;
use crate::evaluator::{evaluate, EvalError, EvaluatedHand};
use crate::hand::{validate_holdem, Board, HoleCards};
use log::{debug, trace};

/// Stable identity of a seat at the table.
pub type PlayerId = usize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("no active players at showdown")]
    NoActivePlayers,
    #[error("player {player}: {source}")]
    Evaluation {
        player: PlayerId,
        #[source]
        source: EvalError,
    },
}

/// A seat entering the showdown. Inactive (folded) seats are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contender {
    pub id: PlayerId,
    pub hole: HoleCards,
    pub active: bool,
}

impl Contender {
    pub fn new(id: PlayerId, hole: HoleCards) -> Self {
        Self { id, hole, active: true }
    }

    pub fn folded(id: PlayerId, hole: HoleCards) -> Self {
        Self { id, hole, active: false }
    }
}

/// Ranks one seat's combined cards. The seam between the resolver and the
/// evaluator.
pub trait HandRanker {
    fn rank(&mut self, cards: &[Card]) -> Result<EvaluatedHand, EvalError>;
}

/// Ranks with [`evaluate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRanker;

impl HandRanker for StandardRanker {
    fn rank(&mut self, cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
        evaluate(cards)
    }
}

/// Result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Showdown {
    pub winner: PlayerId,
    pub hand: EvaluatedHand,
    /// Every evaluated seat, in input order.
    pub results: Vec<(PlayerId, EvaluatedHand)>,
}

impl Showdown {
    /// Other seats whose hand equals the winner's strength.
    pub fn tied_with(&self) -> Vec<PlayerId> {
        self.results
            .iter()
            .filter(|(id, hand)| *id != self.winner && *hand == self.hand)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn hand_of(&self, id: PlayerId) -> Option<&EvaluatedHand> {
        self.results.iter().find(|(pid, _)| *pid == id).map(|(_, hand)| hand)
    }
}

/// Evaluate every active contender against the board and return the winner.
///
/// ```
/// use holdem_rs::hand::Board;
/// use holdem_rs::showdown::{resolve_winner, Contender};
///
/// let board: Board = "Kc 9d 4s 2h 6c".parse().unwrap();
/// let players = [
///     Contender::new(1, "Ks Ad".parse().unwrap()),
///     Contender::new(2, "Kh Qd".parse().unwrap()),
/// ];
/// let showdown = resolve_winner(&players, &board).unwrap();
/// assert_eq!(showdown.winner, 1);
/// ```
pub fn resolve_winner(contenders: &[Contender], board: &Board) -> Result<Showdown, ShowdownError> {
    resolve_winner_with(&mut StandardRanker, contenders, board)
}

/// Like [`resolve_winner`] but ranks hands with the given [`HandRanker`].
pub fn resolve_winner_with<R: HandRanker + ?Sized>(
    ranker: &mut R,
    contenders: &[Contender],
    board: &Board,
) -> Result<Showdown, ShowdownError> {
    let mut results = Vec::with_capacity(contenders.len());
    let mut best: Option<(PlayerId, EvaluatedHand)> = None;

    for c in contenders.iter().filter(|c| c.active) {
        let to_err = |source: EvalError| ShowdownError::Evaluation { player: c.id, source };
        validate_holdem(&c.hole, board).map_err(|e| to_err(e.into()))?;
        let hand = ranker.rank(&c.hole.combined_with(board)).map_err(to_err)?;
        trace!("player {} shows {} ({})", c.id, hand.category, hand.value().raw());

        // strictly greater: the first maximal entry keeps the win
        if best.as_ref().map_or(true, |(_, b)| hand > *b) {
            best = Some((c.id, hand));
        }
        results.push((c.id, hand));
    }

    let (winner, hand) = best.ok_or(ShowdownError::NoActivePlayers)?;
    debug!("showdown among {} player(s): {} wins with {}", results.len(), winner, hand.category);
    Ok(Showdown { winner, hand, results })
}
