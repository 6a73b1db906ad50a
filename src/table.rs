//! Single-table hand sequencing as immutable snapshots.
//!
//! Every operation borrows a [`Round`] and returns a new one, so earlier
//! snapshots stay valid for display, logging or replays. The pot is never
//! split: the single showdown winner (or last seat standing) takes it all.

use crate::agents::Policy;
use crate::deck::{Deck, DeckError};
use crate::evaluator::EvaluatedHand;
use crate::hand::{Board, HandError, HoleCards};
use crate::showdown::{resolve_winner, Contender, PlayerId, Showdown, ShowdownError};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub fn label(self) -> &'static str {
        match self {
            Street::PreFlop => "pre-flop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        }
    }

    /// The following street and how many community cards it reveals.
    fn next(self) -> Option<(Street, usize)> {
        match self {
            Street::PreFlop => Some((Street::Flop, 3)),
            Street::Flop => Some((Street::Turn, 1)),
            Street::Turn => Some((Street::River, 1)),
            Street::River => Some((Street::Showdown, 0)),
            Street::Showdown => None,
        }
    }
}

/// Seat-level decisions. `Raise(by)` puts in the call amount plus `by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(u64),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    #[error("need at least two seats with chips, got {0}")]
    NotEnoughPlayers(usize),
    #[error("no seat {0}")]
    NoSuchSeat(usize),
    #[error("seat {0} is not active")]
    SeatNotActive(usize),
    #[error("seat {0} is not next to act")]
    NotYourTurn(usize),
    #[error("seat {seat} cannot check facing {to_call}")]
    CheckFacingBet { seat: usize, to_call: u64 },
    #[error("raise must be positive")]
    ZeroRaise,
    #[error("betting round is still open")]
    BettingOpen,
    #[error("hand is over")]
    HandOver,
    #[error("no policy for seat {0}")]
    NoPolicy(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub chips: u64,
    pub hole: Option<HoleCards>,
    /// Chips put in on the current street.
    pub bet: u64,
    pub active: bool,
    /// Acted since the street began or the last raise.
    pub acted: bool,
}

impl Seat {
    pub fn new(id: PlayerId, name: impl Into<String>, chips: u64) -> Self {
        Self { id, name: name.into(), chips, hole: None, bet: 0, active: true, acted: false }
    }

    fn can_act(&self) -> bool {
        self.active && self.chips > 0
    }
}

/// Table setup. Seat 0 is the human, the rest are scripted opponents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    pub opponents: usize,
    pub starting_chips: u64,
}

impl TableConfig {
    pub fn new(opponents: usize, starting_chips: u64) -> Self {
        Self { opponents, starting_chips }
    }

    pub fn seats(&self) -> Vec<Seat> {
        std::iter::once(Seat::new(0, "You", self.starting_chips))
            .chain((1..=self.opponents).map(|i| Seat::new(i, format!("CPU {i}"), self.starting_chips)))
            .collect()
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(3, 1000)
    }
}

/// Snapshot of a hand in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    street: Street,
    seats: Vec<Seat>,
    board: Board,
    deck: Deck,
    pot: u64,
    current: Option<usize>,
}

/// How a hand ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Outcome {
    pub winner: PlayerId,
    /// `None` when everyone else folded.
    pub hand: Option<EvaluatedHand>,
    pub showdown: Option<Showdown>,
    pub pot: u64,
    pub board: Board,
    /// Seats after the pot was awarded, ready for the next hand.
    pub seats: Vec<Seat>,
}

impl Round {
    /// Reset seats for a new hand and deal two hole cards to each seat with
    /// chips. Seats without chips sit the hand out.
    pub fn start(seats: Vec<Seat>, deck: Deck) -> Result<Round, TableError> {
        let mut seats: Vec<Seat> = seats
            .into_iter()
            .map(|s| Seat { hole: None, bet: 0, acted: false, active: s.chips > 0, ..s })
            .collect();
        let playing: Vec<usize> = (0..seats.len()).filter(|&i| seats[i].active).collect();
        if playing.len() < 2 {
            return Err(TableError::NotEnoughPlayers(playing.len()));
        }

        let deal = deck.deal(playing.len(), 2, 0)?;
        for (&i, cards) in playing.iter().zip(&deal.hands) {
            seats[i].hole = Some(HoleCards::from_slice(cards)?);
        }
        debug!("new hand: {} seat(s) dealt in", playing.len());

        let mut round = Round {
            street: Street::PreFlop,
            seats,
            board: Board::default(),
            deck: deal.remainder,
            pot: 0,
            current: None,
        };
        round.current = round.pending_after(None);
        Ok(round)
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, idx: usize) -> Option<&Seat> {
        self.seats.get(idx)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Seat expected to act next, or `None` once betting is complete.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| s.active).count()
    }

    pub fn max_bet(&self) -> u64 {
        self.seats.iter().filter(|s| s.active).map(|s| s.bet).max().unwrap_or(0)
    }

    pub fn to_call(&self, idx: usize) -> u64 {
        self.seats.get(idx).map_or(0, |s| self.max_bet().saturating_sub(s.bet))
    }

    /// True when one seat remains, or every active seat has acted and either
    /// matched the highest bet or has no chips left.
    pub fn betting_complete(&self) -> bool {
        self.active_count() <= 1 || (0..self.seats.len()).all(|i| !self.is_pending(i))
    }

    /// Apply `action` for `seat`, returning the next snapshot.
    pub fn apply(&self, seat: usize, action: Action) -> Result<Round, TableError> {
        if self.street == Street::Showdown {
            return Err(TableError::HandOver);
        }
        let s = self.seats.get(seat).ok_or(TableError::NoSuchSeat(seat))?;
        if !s.active {
            return Err(TableError::SeatNotActive(seat));
        }
        if self.current != Some(seat) {
            return Err(TableError::NotYourTurn(seat));
        }
        let to_call = self.to_call(seat);

        let mut next = self.clone();
        match action {
            Action::Fold => next.seats[seat].active = false,
            Action::Check if to_call > 0 => {
                return Err(TableError::CheckFacingBet { seat, to_call });
            }
            Action::Check => {}
            Action::Call => next.put(seat, to_call),
            Action::Raise(0) => return Err(TableError::ZeroRaise),
            Action::Raise(by) => {
                next.put(seat, to_call.saturating_add(by));
                for (i, other) in next.seats.iter_mut().enumerate() {
                    if i != seat && other.active {
                        other.acted = false;
                    }
                }
            }
        }
        next.seats[seat].acted = true;
        debug!("{} {:?} on the {}, pot {}", next.seats[seat].name, action, self.street.label(), next.pot);

        next.current = if next.betting_complete() { None } else { next.pending_after(Some(seat)) };
        Ok(next)
    }

    /// Close the betting round and reveal the next street's cards.
    /// With a single seat left the hand goes straight to showdown.
    pub fn advance(&self) -> Result<Round, TableError> {
        let (street, n) = self.street.next().ok_or(TableError::HandOver)?;
        if !self.betting_complete() {
            return Err(TableError::BettingOpen);
        }

        let mut next = self.clone();
        if self.active_count() <= 1 {
            next.street = Street::Showdown;
        } else {
            if n > 0 {
                let deal = next.deck.clone().deal(0, 0, n)?;
                next.board = next.board.extended(&deal.community)?;
                next.deck = deal.remainder;
            }
            next.street = street;
        }
        for s in next.seats.iter_mut() {
            s.bet = 0;
            s.acted = false;
        }
        next.current = if next.street == Street::Showdown { None } else { next.pending_after(None) };
        debug!("{}: board [{}]", next.street.label(), crate::cards::format_cards(next.board.as_slice()));
        Ok(next)
    }

    /// Award the pot. Uncontested when one seat remains, otherwise the
    /// showdown decides; requires the river betting to be finished.
    pub fn settle(&self) -> Result<Outcome, TableError> {
        let active: Vec<&Seat> = self.seats.iter().filter(|s| s.active).collect();
        let (winner, showdown) = match active.as_slice() {
            [] => return Err(ShowdownError::NoActivePlayers.into()),
            [only] => (only.id, None),
            _ => {
                if self.street != Street::Showdown {
                    return Err(TableError::BettingOpen);
                }
                let contenders: Vec<Contender> = self
                    .seats
                    .iter()
                    .filter_map(|s| s.hole.map(|hole| Contender { id: s.id, hole, active: s.active }))
                    .collect();
                let showdown = resolve_winner(&contenders, &self.board)?;
                (showdown.winner, Some(showdown))
            }
        };

        let mut seats = self.seats.clone();
        if let Some(s) = seats.iter_mut().find(|s| s.id == winner) {
            s.chips += self.pot;
        }
        let hand = showdown.as_ref().map(|sd| sd.hand);
        match &hand {
            Some(h) => info!("player {} wins {} with {}", winner, self.pot, h.category),
            None => info!("player {} wins {} uncontested", winner, self.pot),
        }
        Ok(Outcome { winner, hand, showdown, pot: self.pot, board: self.board.clone(), seats })
    }

    // contributions are capped at the seat's stack; no side pots
    fn put(&mut self, seat: usize, amount: u64) {
        let s = &mut self.seats[seat];
        let amount = amount.min(s.chips);
        s.chips -= amount;
        s.bet += amount;
        self.pot += amount;
    }

    fn is_pending(&self, idx: usize) -> bool {
        let s = &self.seats[idx];
        s.can_act() && (!s.acted || s.bet < self.max_bet())
    }

    /// First pending seat after `after` in seat order (from seat 0 when `None`).
    fn pending_after(&self, after: Option<usize>) -> Option<usize> {
        let n = self.seats.len();
        let start = after.map_or(0, |i| i + 1);
        (0..n).map(|k| (start + k) % n).find(|&i| self.is_pending(i))
    }
}

/// Drive one hand to completion, asking `policies[seat]` for every decision.
pub fn play_hand(round: Round, policies: &mut [Box<dyn Policy>]) -> Result<Outcome, TableError> {
    let mut round = round;
    loop {
        while let Some(seat) = round.current() {
            let policy = policies.get_mut(seat).ok_or(TableError::NoPolicy(seat))?;
            let action = policy.decide(&round, seat);
            round = round.apply(seat, action)?;
        }
        if round.street() == Street::Showdown || round.active_count() <= 1 {
            break;
        }
        round = round.advance()?;
    }
    round.settle()
}
